//! Ambient tenant context shared with tenant-scoped collaborators.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tenant_branding_sdk::TenantContext;

/// Cloneable read handle on the last published [`TenantContext`].
///
/// Catalog, cart and order code hold a clone and read it lock-free; only
/// the engine publishes.
#[derive(Debug, Clone, Default)]
pub struct AmbientTenant {
    inner: Arc<ArcSwap<TenantContext>>,
}

impl AmbientTenant {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published context.
    #[must_use]
    pub fn current(&self) -> Arc<TenantContext> {
        self.inner.load_full()
    }

    pub(crate) fn publish(&self, context: TenantContext) {
        self.inner.store(Arc::new(context));
    }
}

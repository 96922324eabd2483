//! Domain service for the static tenant directory plugin.

use std::collections::HashSet;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tenant_branding_sdk::{Tenant, TenantDirectory};
use tracing::{info, warn};

use crate::config::StaticDirectoryConfig;

/// Tenant list together with the revision it was published under.
#[derive(Debug)]
struct DirectorySnapshot {
    tenants: Arc<[Tenant]>,
    revision: u64,
}

/// Static tenant directory.
///
/// Stores tenant records in memory, loaded from configuration. Readers are
/// lock-free; [`replace`](Self::replace) publishes a new list atomically.
#[derive(Debug)]
pub struct StaticTenantDirectory {
    current: ArcSwap<DirectorySnapshot>,
}

impl StaticTenantDirectory {
    /// Creates a new directory from configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticDirectoryConfig) -> Self {
        Self::new(cfg.tenants.clone())
    }

    #[must_use]
    pub fn new(tenants: Vec<Tenant>) -> Self {
        warn_duplicate_active_slugs(&tenants);
        Self {
            current: ArcSwap::from_pointee(DirectorySnapshot {
                tenants: tenants.into(),
                revision: 0,
            }),
        }
    }

    /// Publishes a new tenant list, e.g. after an admin edit.
    ///
    /// Returns the new revision.
    pub fn replace(&self, tenants: Vec<Tenant>) -> u64 {
        warn_duplicate_active_slugs(&tenants);
        let count = tenants.len();
        let tenants: Arc<[Tenant]> = tenants.into();
        let previous = self.current.rcu(|cur| DirectorySnapshot {
            tenants: Arc::clone(&tenants),
            revision: cur.revision + 1,
        });
        let revision = previous.revision + 1;
        info!(revision, tenants = count, "tenant directory replaced");
        revision
    }
}

impl TenantDirectory for StaticTenantDirectory {
    fn tenants(&self) -> Arc<[Tenant]> {
        Arc::clone(&self.current.load().tenants)
    }

    fn revision(&self) -> u64 {
        self.current.load().revision
    }
}

// De-duplication is the directory owner's job; only flag it here.
fn warn_duplicate_active_slugs(tenants: &[Tenant]) {
    let mut seen = HashSet::new();
    for tenant in tenants.iter().filter(|t| t.is_active) {
        if !seen.insert(tenant.slug.as_str()) {
            warn!(slug = %tenant.slug, "duplicate active tenant slug in directory");
        }
    }
}

//! Branding engine: one synchronous resolution pass per navigation.
//!
//! Read directory -> resolve slug -> select tenant -> classify path ->
//! load persisted snapshot -> apply branding -> publish ambient context.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tenant_branding_sdk::{
    BrandingError, BrandingPlan, BrandingPort, KeyValueStore, Location, RecoveryScreen,
    ResolutionContext, Tenant, TenantContext, TenantDirectory,
};
use tracing::{debug, info};

use super::ambient::AmbientTenant;
use super::applicator;
use super::classifier::is_system_location;
use super::logo::resolve_logo;
use super::persistence::load_snapshot;
use super::recovery::recovery_screen;
use super::resolver::{SlugSource, resolve};
use super::selector::select;
use crate::config::TenantBrandingConfig;

/// Everything one pass produced.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionOutcome {
    pub context: ResolutionContext,
    pub slug_source: SlugSource,
    pub plan: BrandingPlan,
    pub tenant: TenantContext,
    /// Present when the addressed tenant does not exist.
    pub recovery: Option<RecoveryScreen>,
    /// Directory revision the pass was computed against.
    pub directory_revision: u64,
}

pub struct BrandingEngine {
    config: TenantBrandingConfig,
    directory: Arc<dyn TenantDirectory>,
    store: Arc<dyn KeyValueStore>,
    ambient: AmbientTenant,
    last: Mutex<Option<Location>>,
}

impl BrandingEngine {
    /// Creates an engine over injected collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`BrandingError::InvalidConfig`] if `config` fails validation.
    pub fn new(
        config: TenantBrandingConfig,
        directory: Arc<dyn TenantDirectory>,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, BrandingError> {
        config.validate()?;
        Ok(Self {
            config,
            directory,
            store,
            ambient: AmbientTenant::new(),
            last: Mutex::new(None),
        })
    }

    #[must_use]
    pub fn config(&self) -> &TenantBrandingConfig {
        &self.config
    }

    /// Handle on the ambient tenant context for other collaborators.
    #[must_use]
    pub fn ambient(&self) -> AmbientTenant {
        self.ambient.clone()
    }

    /// Last published ambient context.
    #[must_use]
    pub fn current(&self) -> Arc<TenantContext> {
        self.ambient.current()
    }

    /// Resolves `location`, writes document branding through `port` and
    /// publishes the ambient context. Never fails.
    #[tracing::instrument(skip_all, fields(hostname = %location.hostname, path = %location.path))]
    pub fn navigate(&self, location: &Location, port: &mut dyn BrandingPort) -> ResolutionOutcome {
        *self.last.lock() = Some(location.clone());
        self.run(location, port)
    }

    /// Re-runs the last navigated location, e.g. after the directory changed.
    ///
    /// Returns `None` when nothing has been navigated yet.
    #[tracing::instrument(skip_all)]
    pub fn refresh(&self, port: &mut dyn BrandingPort) -> Option<ResolutionOutcome> {
        let location = self.last.lock().clone()?;
        debug!(hostname = %location.hostname, path = %location.path, "re-running last location");
        Some(self.run(&location, port))
    }

    /// Pure part of a pass: resolution context and slug source.
    #[must_use]
    pub fn resolve_context(&self, location: &Location) -> (ResolutionContext, SlugSource) {
        let directory = self.directory.tenants();
        self.build_context(location, &directory)
    }

    fn build_context(
        &self,
        location: &Location,
        directory: &[Tenant],
    ) -> (ResolutionContext, SlugSource) {
        let resolved = resolve(&location.hostname, &location.path, &self.config);
        let selection = select(resolved.slug.as_deref(), directory, &self.config);
        let context = ResolutionContext {
            hostname: location.hostname.clone(),
            path: location.path.clone(),
            resolved_slug: resolved.slug,
            is_system_path: is_system_location(&location.path, &self.config),
            selected_tenant: selection.tenant,
            tenant_not_found: selection.not_found,
        };
        (context, resolved.source)
    }

    fn run(&self, location: &Location, port: &mut dyn BrandingPort) -> ResolutionOutcome {
        let directory_revision = self.directory.revision();
        let directory = self.directory.tenants();
        let (context, slug_source) = self.build_context(location, &directory);

        let snapshot = load_snapshot(self.store.as_ref(), &self.config.storage_keys);
        let plan = applicator::apply(&context, &snapshot, &self.config, port);

        let recovery = context.tenant_not_found.then(|| {
            recovery_screen(context.resolved_slug.as_deref(), &directory, &self.config)
        });

        let tenant = TenantContext {
            logo: context.selected_tenant.as_ref().map(resolve_logo),
            tenant: context.selected_tenant.clone(),
            not_found: context.tenant_not_found,
            is_public: context.is_public(),
        };
        self.ambient.publish(tenant.clone());

        info!(
            slug = context.resolved_slug.as_deref().unwrap_or("-"),
            source = ?slug_source,
            tenant = tenant.tenant.as_ref().map_or("-", |t| t.slug.as_str()),
            not_found = context.tenant_not_found,
            public = context.is_public(),
            directory_revision,
            "tenant resolved"
        );

        ResolutionOutcome {
            context,
            slug_source,
            plan,
            tenant,
            recovery,
            directory_revision,
        }
    }
}

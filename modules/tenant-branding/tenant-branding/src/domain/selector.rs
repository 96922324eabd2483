//! Tenant selection against the directory snapshot.
//!
//! An explicitly addressed but unknown tenant is surfaced as not-found.
//! An unaddressed request silently receives the default tenant, or the
//! unbranded master site when the default is unavailable.

use serde::Serialize;
use tenant_branding_sdk::Tenant;
use tracing::debug;

use crate::config::TenantBrandingConfig;

/// Outcome of tenant selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub tenant: Option<Tenant>,
    pub not_found: bool,
}

/// Picks the tenant for a resolved slug. Pure.
///
/// Inactive tenants are indistinguishable from missing ones, and an empty
/// directory behaves like a directory without the tenant.
#[must_use]
pub fn select(slug: Option<&str>, directory: &[Tenant], config: &TenantBrandingConfig) -> Selection {
    match slug {
        Some(slug) => match find_active(directory, slug) {
            Some(tenant) => Selection {
                tenant: Some(tenant.clone()),
                not_found: false,
            },
            None => {
                debug!(slug, directory_len = directory.len(), "requested tenant not found");
                Selection {
                    tenant: None,
                    not_found: true,
                }
            }
        },
        None => {
            let tenant = find_active(directory, &config.default_tenant_slug).cloned();
            if tenant.is_none() {
                debug!(
                    default_slug = %config.default_tenant_slug,
                    "default tenant unavailable, serving master site"
                );
            }
            Selection {
                tenant,
                not_found: false,
            }
        }
    }
}

fn find_active<'a>(directory: &'a [Tenant], slug: &str) -> Option<&'a Tenant> {
    directory.iter().find(|t| t.is_active && t.slug == slug)
}

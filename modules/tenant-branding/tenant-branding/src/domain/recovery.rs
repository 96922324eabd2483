//! "Tenant not found" recovery screen.
//!
//! Actions use replace navigation so that leaving the screen never
//! re-enters the same unresolved URL.

use tenant_branding_sdk::{Navigation, RecoveryAction, RecoveryEntry, RecoveryScreen, Tenant};

use crate::config::TenantBrandingConfig;

const VIEW_DEMO_LABEL: &str = "Ver demonstra\u{e7}\u{e3}o";
const GO_HOME_LABEL: &str = "Ir para o in\u{ed}cio";

/// Lists every active tenant in directory order with its direct link.
#[must_use]
pub fn recovery_screen(
    requested_slug: Option<&str>,
    directory: &[Tenant],
    config: &TenantBrandingConfig,
) -> RecoveryScreen {
    let entries = directory
        .iter()
        .filter(|t| t.is_active)
        .map(|t| RecoveryEntry {
            slug: t.slug.clone(),
            name: t.name.clone(),
            url: tenant_url(t, config),
        })
        .collect();

    RecoveryScreen {
        requested_slug: requested_slug.map(str::to_owned),
        entries,
        actions: vec![
            RecoveryAction {
                label: VIEW_DEMO_LABEL.to_owned(),
                navigation: Navigation::Replace {
                    href: config.recovery.demo_url.clone(),
                },
            },
            RecoveryAction {
                label: GO_HOME_LABEL.to_owned(),
                navigation: Navigation::Replace {
                    href: config.recovery.home_url.clone(),
                },
            },
        ],
    }
}

/// Custom domain when configured, otherwise `https://<slug>.<root_domain>`.
#[must_use]
pub fn tenant_url(tenant: &Tenant, config: &TenantBrandingConfig) -> String {
    match tenant.settings.custom_domain.as_deref().map(str::trim) {
        Some(domain) if !domain.is_empty() => {
            if domain.contains("://") {
                domain.to_owned()
            } else {
                format!("https://{domain}")
            }
        }
        _ => format!("https://{}.{}", tenant.slug, config.root_domain),
    }
}

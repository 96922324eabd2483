//! Configuration for the tenant branding engine.
//!
//! The reserved path set, the default tenant and the document vocabulary are
//! configuration rather than logic. None of it is editable at runtime.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tenant_branding_sdk::BrandingError;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenantBrandingConfig {
    /// Platform root domain; `<slug>.<root_domain>` addresses a tenant.
    pub root_domain: String,

    /// Subdomain labels that never name a tenant (e.g. `www`).
    pub reserved_subdomains: BTreeSet<String>,

    /// First path segments reserved for platform pages.
    pub system_paths: BTreeSet<String>,

    /// Flagship tenant served when the URL names no tenant.
    pub default_tenant_slug: String,

    /// Appended to the tenant name in the page title.
    pub title_suffix: String,

    /// Attribute carrying the tenant slug on the root and body elements.
    pub marker_attribute: String,

    /// CSS custom property holding the primary color triplet.
    pub primary_rgb_var: String,

    /// CSS custom property holding the secondary color triplet.
    pub secondary_rgb_var: String,

    /// Id of the single style element holding persisted custom CSS.
    pub custom_style_id: String,

    pub storage_keys: StorageKeys,

    pub recovery: RecoveryConfig,
}

/// Keys of the persisted branding snapshot in the durable store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageKeys {
    pub custom_css: String,
    pub tenant_slug: String,
    pub background: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            custom_css: "custom_css".to_owned(),
            tenant_slug: "current_slug".to_owned(),
            background: "background".to_owned(),
        }
    }
}

/// Targets of the "tenant not found" screen actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecoveryConfig {
    pub demo_url: String,
    pub home_url: String,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            demo_url: "/demo".to_owned(),
            home_url: "/".to_owned(),
        }
    }
}

const DEFAULT_SYSTEM_PATHS: &[&str] = &[
    "404",
    "admin",
    "area-cliente",
    "cadastro",
    "cadastro-nativo",
    "demo",
    "login",
    "master-admin",
    "politica-de-privacidade",
    "privacidade",
    "registro",
    "template",
    "templates",
    "termos",
];

fn default_root_domain() -> String {
    "locadoras.com".to_owned()
}

fn default_reserved_subdomains() -> BTreeSet<String> {
    ["www"].into_iter().map(str::to_owned).collect()
}

fn default_system_paths() -> BTreeSet<String> {
    DEFAULT_SYSTEM_PATHS.iter().map(|s| (*s).to_owned()).collect()
}

fn default_title_suffix() -> String {
    "Loca\u{e7}\u{e3}o de Equipamentos".to_owned()
}

impl Default for TenantBrandingConfig {
    fn default() -> Self {
        Self {
            root_domain: default_root_domain(),
            reserved_subdomains: default_reserved_subdomains(),
            system_paths: default_system_paths(),
            default_tenant_slug: "bils".to_owned(),
            title_suffix: default_title_suffix(),
            marker_attribute: "data-tenant".to_owned(),
            primary_rgb_var: "--tenant-primary-rgb".to_owned(),
            secondary_rgb_var: "--tenant-secondary-rgb".to_owned(),
            custom_style_id: "tenant-custom-css".to_owned(),
            storage_keys: StorageKeys::default(),
            recovery: RecoveryConfig::default(),
        }
    }
}

impl TenantBrandingConfig {
    /// Checks structural constraints the resolver relies on.
    ///
    /// # Errors
    ///
    /// Returns [`BrandingError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), BrandingError> {
        let root = self.root_domain.trim();
        if root.is_empty() {
            return Err(BrandingError::invalid_config("root_domain", "must not be empty"));
        }
        if root.starts_with('.') || root.ends_with('.') || root.contains('/') {
            return Err(BrandingError::invalid_config(
                "root_domain",
                "must be a bare domain such as `locadoras.com`",
            ));
        }
        if let Some(bad) = self.system_paths.iter().find(|p| p.is_empty() || p.contains('/')) {
            return Err(BrandingError::invalid_config(
                "system_paths",
                format!("`{bad}` must be a single non-empty path segment"),
            ));
        }
        if self.system_paths.contains(&self.default_tenant_slug) {
            return Err(BrandingError::invalid_config(
                "default_tenant_slug",
                "collides with a reserved system path",
            ));
        }
        for (field, var) in [
            ("primary_rgb_var", &self.primary_rgb_var),
            ("secondary_rgb_var", &self.secondary_rgb_var),
        ] {
            if !var.starts_with("--") {
                return Err(BrandingError::invalid_config(field, "must start with `--`"));
            }
        }
        if self.marker_attribute.trim().is_empty() {
            return Err(BrandingError::invalid_config("marker_attribute", "must not be empty"));
        }
        if self.custom_style_id.trim().is_empty() {
            return Err(BrandingError::invalid_config("custom_style_id", "must not be empty"));
        }
        let keys = &self.storage_keys;
        if keys.custom_css == keys.tenant_slug
            || keys.custom_css == keys.background
            || keys.tenant_slug == keys.background
        {
            return Err(BrandingError::invalid_config("storage_keys", "keys must be distinct"));
        }
        Ok(())
    }
}

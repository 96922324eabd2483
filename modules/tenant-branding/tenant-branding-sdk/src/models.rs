//! Domain models for the tenant branding engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// URL/subdomain-safe tenant identifier.
pub type TenantSlug = String;

/// A branded rental business sharing the deployment.
///
/// Records are owned by the admin-management collaborator; the engine only
/// reads them. Field names follow the camelCase layout of directory dumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Unique slug, usable as a subdomain label or first path segment.
    pub slug: TenantSlug,
    /// Display name.
    pub name: String,
    /// Primary brand color, expected as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Secondary brand color, expected as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    /// Logo URL or data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Only active tenants are ever selected.
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub settings: TenantSettings,
}

fn default_active() -> bool {
    true
}

/// Optional per-tenant settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSettings {
    /// Custom domain used instead of `<slug>.<root-domain>` in links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
}

impl Tenant {
    /// Creates an active tenant with no colors, logo or settings.
    #[must_use]
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            primary_color: None,
            secondary_color: None,
            logo: None,
            is_active: true,
            settings: TenantSettings::default(),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_color = Some(primary.into());
        self.secondary_color = Some(secondary.into());
        self
    }

    #[must_use]
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    #[must_use]
    pub fn with_custom_domain(mut self, domain: impl Into<String>) -> Self {
        self.settings.custom_domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Current browser location as supplied by the routing layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub hostname: String,
    pub path: String,
}

impl Location {
    #[must_use]
    pub fn new(hostname: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            path: path.into(),
        }
    }
}

/// Per-navigation resolution result. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionContext {
    pub hostname: String,
    pub path: String,
    /// Candidate slug signaled by the URL, if any.
    pub resolved_slug: Option<TenantSlug>,
    /// Whether the first path segment is a reserved system path.
    pub is_system_path: bool,
    pub selected_tenant: Option<Tenant>,
    /// A slug was requested but no active tenant carries it.
    pub tenant_not_found: bool,
}

impl ResolutionContext {
    /// Tenant-facing page, eligible for document-level branding.
    #[must_use]
    pub fn is_public(&self) -> bool {
        !self.is_system_path
    }
}

/// Customization state restored from the durable key-value store.
///
/// Written by the appearance customization flow; the engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_slug: Option<TenantSlug>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_value: Option<String>,
}

impl BrandingSnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.custom_css.is_none() && self.tenant_slug.is_none() && self.background_value.is_none()
    }

    /// Custom CSS or a persisted slug takes precedence over computed branding.
    #[must_use]
    pub fn overrides_branding(&self) -> bool {
        self.custom_css.is_some() || self.tenant_slug.is_some()
    }
}

/// RGB triplet consumed by the stylesheet through CSS custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Platform gold, used whenever a brand color is missing or malformed.
    pub const DEFAULT_GOLD: Self = Self(245, 213, 51);

    /// Renders as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::DEFAULT_GOLD
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// Logo shown in the square logo slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "src", rename_all = "snake_case")]
pub enum LogoSource {
    /// Tenant-supplied URL or data URI, used unmodified.
    Url(String),
    /// Synthesized SVG badge as a data URI.
    Generated(String),
}

impl LogoSource {
    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            Self::Url(src) | Self::Generated(src) => src,
        }
    }
}

/// What to do with the tenant marker attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "slug", rename_all = "snake_case")]
pub enum MarkerDirective {
    Set(TenantSlug),
    Clear,
}

/// What to do with the dedicated custom stylesheet element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StylesheetDirective {
    Upsert { id: String, css: String },
    Remove { id: String },
}

/// What to do with the manually-applied page background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum BackgroundDirective {
    Set(String),
    Clear,
}

/// A CSS custom property written on the root element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssVariable {
    pub name: String,
    pub value: String,
}

/// Complete document state computed for one resolution pass.
///
/// Applying the same plan twice leaves the document unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandingPlan {
    pub marker_attribute: String,
    pub marker: MarkerDirective,
    /// Tenant CSS variables to write. Empty means remove them.
    pub css_variables: Vec<CssVariable>,
    /// `None` leaves the current title untouched.
    pub title: Option<String>,
    pub logo: Option<LogoSource>,
    pub stylesheet: StylesheetDirective,
    pub background: BackgroundDirective,
}

/// Ambient tenant state exposed to catalog, cart and order screens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TenantContext {
    pub tenant: Option<Tenant>,
    pub not_found: bool,
    pub is_public: bool,
    pub logo: Option<LogoSource>,
}

/// Browser navigation kind used by recovery actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Navigation {
    /// Full-page navigation replacing the current history entry.
    Replace { href: String },
}

/// One tenant offered on the "tenant not found" screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryEntry {
    pub slug: TenantSlug,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryAction {
    pub label: String,
    pub navigation: Navigation,
}

/// Screen shown when an explicitly addressed tenant does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryScreen {
    pub requested_slug: Option<TenantSlug>,
    pub entries: Vec<RecoveryEntry>,
    pub actions: Vec<RecoveryAction>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn tenant_deserializes_directory_layout() {
        let raw = serde_json::json!({
            "slug": "bils",
            "name": "Bils Locadora",
            "primaryColor": "#112233",
            "settings": { "customDomain": "bils.com.br" }
        });

        let tenant: Tenant = serde_json::from_value(raw).unwrap();

        assert_eq!(tenant.slug, "bils");
        assert!(tenant.is_active);
        assert_eq!(tenant.primary_color.as_deref(), Some("#112233"));
        assert!(tenant.secondary_color.is_none());
        assert_eq!(tenant.settings.custom_domain.as_deref(), Some("bils.com.br"));
    }

    #[test]
    fn rgb_renders_css_triplet() {
        assert_eq!(Rgb(17, 34, 51).to_string(), "17, 34, 51");
        assert_eq!(Rgb::DEFAULT_GOLD.to_string(), "245, 213, 51");
        assert_eq!(Rgb(17, 34, 51).to_hex(), "#112233");
    }

    #[test]
    fn snapshot_override_ignores_background_only() {
        let snapshot = BrandingSnapshot {
            background_value: Some("#000".to_owned()),
            ..Default::default()
        };
        assert!(!snapshot.is_empty());
        assert!(!snapshot.overrides_branding());

        let snapshot = BrandingSnapshot {
            tenant_slug: Some("bils".to_owned()),
            ..Default::default()
        };
        assert!(snapshot.overrides_branding());
    }
}

//! Branding applicator.
//!
//! [`plan`] turns a resolution context and the persisted snapshot into the
//! complete document state; [`apply`] hands that state to the branding port.
//! Tenant branding only reaches the document on tenant-facing pages.

use tenant_branding_sdk::{
    BackgroundDirective, BrandingPlan, BrandingPort, BrandingSnapshot, CssVariable,
    MarkerDirective, ResolutionContext, StylesheetDirective, Tenant,
};
use tracing::debug;

use super::color::rgb_or_default;
use super::logo::resolve_logo;
use crate::config::TenantBrandingConfig;

/// Computes the document state for one pass. Pure.
///
/// On system pages the plan never sets the marker or a background. On the
/// not-found screen only the persisted custom stylesheet survives.
#[must_use]
pub fn plan(
    ctx: &ResolutionContext,
    snapshot: &BrandingSnapshot,
    config: &TenantBrandingConfig,
) -> BrandingPlan {
    if ctx.tenant_not_found {
        return not_found_plan(snapshot, config);
    }

    let is_public = ctx.is_public();
    let mut marker = MarkerDirective::Clear;
    let mut css_variables = Vec::new();
    let mut title = None;
    let mut logo = None;

    if let Some(tenant) = &ctx.selected_tenant {
        if is_public {
            marker = MarkerDirective::Set(tenant.slug.clone());
            css_variables = tenant_css_variables(tenant, config);
        }
        title = Some(page_title(tenant, config));
        logo = Some(resolve_logo(tenant));
    }

    let stylesheet = persisted_stylesheet(snapshot, config);

    let mut background = BackgroundDirective::Clear;
    if is_public && snapshot.overrides_branding() {
        if let Some(slug) = &snapshot.tenant_slug {
            marker = MarkerDirective::Set(slug.clone());
        }
        if let Some(value) = &snapshot.background_value {
            background = BackgroundDirective::Set(value.clone());
        }
    }

    BrandingPlan {
        marker_attribute: config.marker_attribute.clone(),
        marker,
        css_variables,
        title,
        logo,
        stylesheet,
        background,
    }
}

/// Computes the plan and writes it through `port`.
///
/// A not-found screen without persisted CSS is rendered unbranded via
/// [`BrandingPort::clear_branding`].
pub fn apply(
    ctx: &ResolutionContext,
    snapshot: &BrandingSnapshot,
    config: &TenantBrandingConfig,
    port: &mut dyn BrandingPort,
) -> BrandingPlan {
    let plan = plan(ctx, snapshot, config);
    if ctx.tenant_not_found && matches!(plan.stylesheet, StylesheetDirective::Remove { .. }) {
        debug!("tenant not found, clearing document branding");
        port.clear_branding();
    } else {
        debug!(
            public = ctx.is_public(),
            marker = ?plan.marker,
            stylesheet = matches!(plan.stylesheet, StylesheetDirective::Upsert { .. }),
            "applying document branding"
        );
        port.apply_branding(&plan);
    }
    plan
}

/// `"<tenant name> - <suffix>"`.
#[must_use]
pub fn page_title(tenant: &Tenant, config: &TenantBrandingConfig) -> String {
    format!("{} - {}", tenant.name, config.title_suffix)
}

fn tenant_css_variables(tenant: &Tenant, config: &TenantBrandingConfig) -> Vec<CssVariable> {
    vec![
        CssVariable {
            name: config.primary_rgb_var.clone(),
            value: rgb_or_default(tenant.primary_color.as_deref()).to_string(),
        },
        CssVariable {
            name: config.secondary_rgb_var.clone(),
            value: rgb_or_default(tenant.secondary_color.as_deref()).to_string(),
        },
    ]
}

fn persisted_stylesheet(
    snapshot: &BrandingSnapshot,
    config: &TenantBrandingConfig,
) -> StylesheetDirective {
    match &snapshot.custom_css {
        Some(css) => StylesheetDirective::Upsert {
            id: config.custom_style_id.clone(),
            css: css.clone(),
        },
        None => StylesheetDirective::Remove {
            id: config.custom_style_id.clone(),
        },
    }
}

fn not_found_plan(snapshot: &BrandingSnapshot, config: &TenantBrandingConfig) -> BrandingPlan {
    BrandingPlan {
        marker_attribute: config.marker_attribute.clone(),
        marker: MarkerDirective::Clear,
        css_variables: Vec::new(),
        title: None,
        logo: None,
        stylesheet: persisted_stylesheet(snapshot, config),
        background: BackgroundDirective::Clear,
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use tenant_branding_sdk::LogoSource;

    fn ctx(path: &str, is_system_path: bool, tenant: Option<Tenant>) -> ResolutionContext {
        ResolutionContext {
            hostname: "bils.locadoras.com".to_owned(),
            path: path.to_owned(),
            resolved_slug: tenant.as_ref().map(|t| t.slug.clone()),
            is_system_path,
            selected_tenant: tenant,
            tenant_not_found: false,
        }
    }

    fn bils() -> Tenant {
        Tenant::new("bils", "Bils Locadora").with_colors("#112233", "#ffffff")
    }

    fn snapshot(css: Option<&str>, slug: Option<&str>, background: Option<&str>) -> BrandingSnapshot {
        BrandingSnapshot {
            custom_css: css.map(str::to_owned),
            tenant_slug: slug.map(str::to_owned),
            background_value: background.map(str::to_owned),
        }
    }

    #[test]
    fn public_page_gets_marker_variables_and_title() {
        let cfg = TenantBrandingConfig::default();
        let plan = plan(&ctx("/equipamentos", false, Some(bils())), &BrandingSnapshot::default(), &cfg);

        assert_eq!(plan.marker, MarkerDirective::Set("bils".to_owned()));
        assert_eq!(
            plan.css_variables,
            vec![
                CssVariable {
                    name: "--tenant-primary-rgb".to_owned(),
                    value: "17, 34, 51".to_owned(),
                },
                CssVariable {
                    name: "--tenant-secondary-rgb".to_owned(),
                    value: "255, 255, 255".to_owned(),
                },
            ]
        );
        assert_eq!(
            plan.title.as_deref(),
            Some("Bils Locadora - Loca\u{e7}\u{e3}o de Equipamentos")
        );
        assert!(matches!(plan.logo, Some(LogoSource::Generated(_))));
        assert_eq!(plan.background, BackgroundDirective::Clear);
        assert_eq!(
            plan.stylesheet,
            StylesheetDirective::Remove {
                id: "tenant-custom-css".to_owned()
            }
        );
    }

    #[test]
    fn system_page_clears_marker_but_keeps_title() {
        let cfg = TenantBrandingConfig::default();
        let plan = plan(&ctx("/admin", true, Some(bils())), &BrandingSnapshot::default(), &cfg);

        assert_eq!(plan.marker, MarkerDirective::Clear);
        assert!(plan.css_variables.is_empty());
        assert!(plan.title.is_some());
    }

    #[test]
    fn malformed_colors_use_gold() {
        let cfg = TenantBrandingConfig::default();
        let tenant = Tenant::new("x", "X").with_colors("#abc", "teal");
        let plan = plan(&ctx("/", false, Some(tenant)), &BrandingSnapshot::default(), &cfg);

        assert!(plan.css_variables.iter().all(|v| v.value == "245, 213, 51"));
    }

    #[test]
    fn no_tenant_leaves_title_untouched() {
        let cfg = TenantBrandingConfig::default();
        let plan = plan(&ctx("/", false, None), &BrandingSnapshot::default(), &cfg);

        assert!(plan.title.is_none());
        assert!(plan.logo.is_none());
        assert_eq!(plan.marker, MarkerDirective::Clear);
    }

    #[test]
    fn snapshot_overrides_marker_and_background_on_public_pages() {
        let cfg = TenantBrandingConfig::default();
        let snap = snapshot(Some("body{}"), Some("custom"), Some("#000000"));
        let plan = plan(&ctx("/", false, Some(bils())), &snap, &cfg);

        assert_eq!(plan.marker, MarkerDirective::Set("custom".to_owned()));
        assert_eq!(plan.background, BackgroundDirective::Set("#000000".to_owned()));
        assert_eq!(
            plan.stylesheet,
            StylesheetDirective::Upsert {
                id: "tenant-custom-css".to_owned(),
                css: "body{}".to_owned()
            }
        );
    }

    #[test]
    fn snapshot_css_without_slug_keeps_tenant_marker() {
        let cfg = TenantBrandingConfig::default();
        let snap = snapshot(Some("body{}"), None, Some("url(x.png)"));
        let plan = plan(&ctx("/", false, Some(bils())), &snap, &cfg);

        assert_eq!(plan.marker, MarkerDirective::Set("bils".to_owned()));
        assert_eq!(plan.background, BackgroundDirective::Set("url(x.png)".to_owned()));
    }

    #[test]
    fn snapshot_on_system_page_injects_css_only() {
        let cfg = TenantBrandingConfig::default();
        let snap = snapshot(Some("body{}"), Some("custom"), Some("#000000"));
        let plan = plan(&ctx("/master-admin", true, Some(bils())), &snap, &cfg);

        assert_eq!(plan.marker, MarkerDirective::Clear);
        assert_eq!(plan.background, BackgroundDirective::Clear);
        assert!(matches!(plan.stylesheet, StylesheetDirective::Upsert { .. }));
    }

    #[test]
    fn background_alone_does_not_override() {
        let cfg = TenantBrandingConfig::default();
        let snap = snapshot(None, None, Some("#000000"));
        let plan = plan(&ctx("/", false, Some(bils())), &snap, &cfg);

        assert_eq!(plan.background, BackgroundDirective::Clear);
    }

    fn not_found_ctx() -> ResolutionContext {
        let mut context = ctx("/ghost", false, None);
        context.resolved_slug = Some("ghost".to_owned());
        context.tenant_not_found = true;
        context
    }

    #[test]
    fn not_found_plan_keeps_only_persisted_css() {
        let cfg = TenantBrandingConfig::default();
        let snap = snapshot(Some("body{}"), Some("custom"), Some("#000000"));
        let plan = plan(&not_found_ctx(), &snap, &cfg);

        assert_eq!(plan.marker, MarkerDirective::Clear);
        assert!(plan.css_variables.is_empty());
        assert!(plan.title.is_none());
        assert!(plan.logo.is_none());
        assert_eq!(plan.background, BackgroundDirective::Clear);
        assert_eq!(
            plan.stylesheet,
            StylesheetDirective::Upsert {
                id: "tenant-custom-css".to_owned(),
                css: "body{}".to_owned()
            }
        );
    }

    #[test]
    fn not_found_without_css_removes_stylesheet() {
        let cfg = TenantBrandingConfig::default();
        let snap = snapshot(None, Some("custom"), Some("#000000"));
        let plan = plan(&not_found_ctx(), &snap, &cfg);

        assert_eq!(plan.marker, MarkerDirective::Clear);
        assert_eq!(
            plan.stylesheet,
            StylesheetDirective::Remove {
                id: "tenant-custom-css".to_owned()
            }
        );
    }
}

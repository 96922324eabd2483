//! Tenant Branding SDK
//!
//! This crate provides the public contracts of the `tenant-branding` module:
//!
//! - [`TenantDirectory`], [`KeyValueStore`], [`BrandingPort`] - ports injected into the engine
//! - [`Tenant`], [`ResolutionContext`], [`BrandingSnapshot`], [`BrandingPlan`] - domain models
//! - [`TenantContext`] - ambient tenant state exposed to the rest of the application
//! - [`StoreError`], [`BrandingError`] - error types

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;

pub use api::{BrandingPort, KeyValueStore, TenantDirectory};
pub use error::{BrandingError, StoreError};
pub use models::{
    BackgroundDirective, BrandingPlan, BrandingSnapshot, CssVariable, Location, LogoSource,
    MarkerDirective, Navigation, RecoveryAction, RecoveryEntry, RecoveryScreen,
    ResolutionContext, Rgb, StylesheetDirective, Tenant, TenantContext, TenantSettings,
    TenantSlug,
};

//! Tenant Branding
//!
//! Resolves which tenant owns a visit from the request hostname and path,
//! and applies or strips that tenant's branding on the document.
//!
//! ## Usage
//!
//! ```ignore
//! use tenant_branding::{BrandingEngine, InMemoryDocument, TenantBrandingConfig};
//!
//! let engine = BrandingEngine::new(TenantBrandingConfig::default(), directory, store)?;
//! let mut document = InMemoryDocument::new();
//!
//! let outcome = engine.navigate(&Location::new("bils.locadoras.com", "/equipamentos"), &mut document);
//! if let Some(screen) = outcome.recovery {
//!     // render the tenant-not-found screen
//! }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod infra;


pub use config::{RecoveryConfig, StorageKeys, TenantBrandingConfig};
pub use domain::{
    AmbientTenant, BrandingEngine, ResolutionOutcome, ResolvedSlug, Selection, SlugSource,
};
pub use infra::{FileKeyValueStore, InMemoryDocument, InMemoryKeyValueStore, StyleElement};

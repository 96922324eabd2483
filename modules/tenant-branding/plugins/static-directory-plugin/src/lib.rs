//! Static Tenant Directory Plugin
//!
//! This plugin provides tenant records from configuration.
//! Useful for testing, development, and simple deployments.
//!
//! ## Configuration
//!
//! ```yaml
//! directory:
//!   tenants:
//!     - slug: "bils"
//!       name: "Bils Locadora"
//!       primaryColor: "#112233"
//!       secondaryColor: "#ffffff"
//!     - slug: "acme"
//!       name: "Acme Rentals"
//!       isActive: false
//!       settings:
//!         customDomain: "acme.com.br"
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::StaticDirectoryConfig;
pub use domain::StaticTenantDirectory;

//! Domain layer for the static tenant directory plugin.

pub mod service;

pub use service::StaticTenantDirectory;

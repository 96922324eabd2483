//! Ports between the branding engine and its collaborators.
//!
//! The engine never touches global state. The tenant directory, the durable
//! key-value store and the document are injected through these traits so
//! that resolution stays pure and deterministic under test:
//!
//! ```ignore
//! let engine = BrandingEngine::new(config, directory, store);
//! let outcome = engine.navigate(&Location::new("bils.locadoras.com", "/"), &mut document);
//! ```

use std::sync::Arc;

use crate::error::StoreError;
use crate::models::{BrandingPlan, Tenant};

/// Read-only source of tenant records.
///
/// Implemented by the admin-management collaborator. The engine re-reads
/// the list on every pass, so implementations should make `tenants` cheap.
pub trait TenantDirectory: Send + Sync {
    /// Current snapshot of every known tenant, active or not.
    fn tenants(&self) -> Arc<[Tenant]>;

    /// Monotonic counter bumped whenever the tenant list changes.
    fn revision(&self) -> u64;
}

/// Durable string key-value store that survives reloads.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the change cannot be persisted.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Document-level side effects of branding.
///
/// Implementations own the page: root/body marker attributes, CSS custom
/// properties, title, logo slot, body background and one dedicated style
/// element. Every call overwrites the previous state.
pub trait BrandingPort {
    /// Writes the complete plan. Must be idempotent.
    fn apply_branding(&mut self, plan: &BrandingPlan);

    /// Removes every tenant artifact from the document, leaving the title.
    fn clear_branding(&mut self);
}

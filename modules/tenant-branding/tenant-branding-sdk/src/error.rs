//! Error types for the tenant branding engine.

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](crate::KeyValueStore) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium could not be read or written.
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data exists but cannot be decoded.
    #[error("store data is corrupt: {0}")]
    Corrupt(String),

    /// Data could not be encoded for storage.
    #[error("store serialization failed: {0}")]
    Serialization(String),
}

/// Errors surfaced while setting up the engine.
///
/// Resolution passes themselves never fail: every unresolvable input
/// degrades to the not-found screen or the unbranded master site.
#[derive(Debug, Error)]
pub enum BrandingError {
    /// A configuration value violates its constraints.
    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfig {
        /// Dotted path of the offending field.
        field: String,
        /// Human-readable constraint description.
        reason: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BrandingError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

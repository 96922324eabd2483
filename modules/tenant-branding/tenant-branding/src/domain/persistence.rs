//! Persisted branding snapshot glue over the key-value store.
//!
//! The engine only reads the snapshot. [`save_snapshot`] exists for the
//! appearance customization flow that authors it.

use tenant_branding_sdk::{BrandingSnapshot, KeyValueStore, StoreError};
use tracing::warn;

use crate::config::StorageKeys;

/// Reads the snapshot. Unreadable or blank entries count as absent.
#[must_use]
pub fn load_snapshot(store: &dyn KeyValueStore, keys: &StorageKeys) -> BrandingSnapshot {
    BrandingSnapshot {
        custom_css: read_entry(store, &keys.custom_css),
        tenant_slug: read_entry(store, &keys.tenant_slug),
        background_value: read_entry(store, &keys.background),
    }
}

/// Writes present fields and removes absent ones.
///
/// # Errors
///
/// Returns the first [`StoreError`] raised by the store.
pub fn save_snapshot(
    store: &dyn KeyValueStore,
    keys: &StorageKeys,
    snapshot: &BrandingSnapshot,
) -> Result<(), StoreError> {
    for (key, value) in [
        (&keys.custom_css, &snapshot.custom_css),
        (&keys.tenant_slug, &snapshot.tenant_slug),
        (&keys.background, &snapshot.background_value),
    ] {
        match value {
            Some(value) => store.set(key, value)?,
            None => store.remove(key)?,
        }
    }
    Ok(())
}

fn read_entry(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value.filter(|v| !v.trim().is_empty()),
        Err(e) => {
            warn!(key, error = %e, "failed to read persisted branding entry, ignoring");
            None
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::infra::storage::InMemoryKeyValueStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Corrupt("unreadable".to_owned()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Corrupt("unwritable".to_owned()))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn save_then_load_preserves_fields() {
        let store = InMemoryKeyValueStore::new();
        let keys = StorageKeys::default();
        let snapshot = BrandingSnapshot {
            custom_css: Some(":root{--x:1}".to_owned()),
            tenant_slug: Some("bils".to_owned()),
            background_value: None,
        };

        save_snapshot(&store, &keys, &snapshot).unwrap();

        assert_eq!(load_snapshot(&store, &keys), snapshot);
        assert_eq!(store.get("current_slug").unwrap().as_deref(), Some("bils"));
    }

    #[test]
    fn save_removes_absent_fields() {
        let store = InMemoryKeyValueStore::new();
        let keys = StorageKeys::default();
        store.set("background", "#000").unwrap();

        save_snapshot(&store, &keys, &BrandingSnapshot::default()).unwrap();

        assert!(store.get("background").unwrap().is_none());
    }

    #[test]
    fn blank_entries_are_absent() {
        let store = InMemoryKeyValueStore::new();
        store.set("custom_css", "   ").unwrap();

        assert!(load_snapshot(&store, &StorageKeys::default()).is_empty());
    }

    #[test]
    #[tracing_test::traced_test]
    fn read_failures_degrade_to_empty_snapshot() {
        let snapshot = load_snapshot(&BrokenStore, &StorageKeys::default());

        assert!(snapshot.is_empty());
        assert!(logs_contain("failed to read persisted branding entry"));
    }

    #[test]
    fn save_propagates_store_errors() {
        let snapshot = BrandingSnapshot {
            custom_css: Some("x".to_owned()),
            ..Default::default()
        };
        let err = save_snapshot(&BrokenStore, &StorageKeys::default(), &snapshot).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }
}

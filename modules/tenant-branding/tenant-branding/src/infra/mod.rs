//! Adapters for the engine's ports.

pub mod document;
pub mod storage;

pub use document::{InMemoryDocument, StyleElement};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};

// ABOUTME: Local persistence for Sitepanel
// ABOUTME: Key-value store backends and the last-known-good settings cache

pub mod cache;
pub mod error;
pub mod kv;

pub use cache::LocalSettingsCache;
pub use error::{StorageError, StorageResult};
pub use kv::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};

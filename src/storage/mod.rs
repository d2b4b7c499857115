//! Key-value stores backing the schedule cache.
//!
//! The cache layer only needs four string operations, so any store offering
//! `get / set / keys / del` can sit behind it:
//!
//! - [`MemoryStore`]: process-local map, used for tests and one-shot runs
//! - [`LocalStore`]: one file per key under a root directory
//!
//! ## Lifecycle
//!
//! A store is opened explicitly by its constructor (`LocalStore::open`,
//! `MemoryStore::new`), shared as `Arc<dyn KeyValueStore>`, and released with
//! [`KeyValueStore::close`] once the owner is done with it.

pub mod local;
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStore;
pub use memory::MemoryStore;

/// Trait for string key-value backends.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// List keys matching a glob pattern (`*` and `?` wildcards).
    async fn keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Delete the given keys, returning how many existed.
    async fn del(&self, keys: &[String]) -> Result<usize>;

    /// Release the store. Further calls may fail with `CacheUnavailable`.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

// src/pipeline/service.rs

//! Service construction from configuration.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{CacheBackend, CacheConfig, Config};
use crate::services::ExamService;
use crate::storage::{KeyValueStore, LocalStore, MemoryStore};
use crate::utils::http;

/// Open the configured cache store.
pub async fn open_store(cache: &CacheConfig) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match cache.backend {
        CacheBackend::Local => Arc::new(LocalStore::open(&cache.dir).await?),
        CacheBackend::Memory => Arc::new(MemoryStore::new()),
    };
    log::debug!("Cache backend: {:?}", cache.backend);
    Ok(store)
}

/// Build an [`ExamService`] backed by a reqwest client and the configured store.
pub async fn build_service(config: &Config) -> Result<ExamService> {
    let client = http::create_async_client(&config.upstream)?;
    let store = open_store(&config.cache).await?;
    ExamService::new(config, Arc::new(client), store)
}

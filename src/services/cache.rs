// src/services/cache.rs

//! Read-through schedule cache.
//!
//! Wraps a [`KeyValueStore`] holding one JSON-serialized
//! [`DepartmentSchedule`] per department key. A store that cannot answer is
//! never fatal here: reads degrade to a miss and writes are skipped, so the
//! caller falls back to a live fetch.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::DepartmentSchedule;
use crate::models::department::DEPARTMENT_KEY_PATTERN;
use crate::storage::KeyValueStore;

/// Department schedule cache over a shared key-value store.
#[derive(Clone)]
pub struct ScheduleCache {
    store: Arc<dyn KeyValueStore>,
}

impl ScheduleCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Cached schedule for `key`, or `None` on a miss or store failure.
    pub async fn get(&self, key: &str) -> Option<DepartmentSchedule> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("Cache miss for {}", key);
                return None;
            }
            Err(e) => {
                log::warn!("Cache read for {} failed, fetching live: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(schedule) => {
                log::debug!("Cache hit for {}", key);
                Some(schedule)
            }
            Err(e) => {
                log::warn!("Discarding unreadable cache entry {}: {}", key, e);
                None
            }
        }
    }

    /// Store a fully parsed schedule. Failures are logged and skipped.
    pub async fn put(&self, key: &str, schedule: &DepartmentSchedule) {
        let raw = match serde_json::to_string(schedule) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Cannot serialize schedule for {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.store.set(key, &raw).await {
            log::warn!("Cache write for {} failed: {}", key, e);
        }
    }

    /// Number of department entries currently stored.
    pub async fn remaining(&self) -> Result<usize> {
        Ok(self.store.keys(DEPARTMENT_KEY_PATTERN).await?.len())
    }

    /// Delete every department entry and verify none is left.
    ///
    /// Returns the number of entries deleted.
    pub async fn invalidate_all(&self) -> Result<usize> {
        let keys = self.store.keys(DEPARTMENT_KEY_PATTERN).await?;
        let deleted = if keys.is_empty() {
            0
        } else {
            self.store.del(&keys).await?
        };

        let remaining = self.remaining().await?;
        if remaining > 0 {
            return Err(AppError::cache(format!(
                "{remaining} department entries left after clearing {deleted}"
            )));
        }

        log::debug!("Cleared {} department cache entries", deleted);
        Ok(deleted)
    }
}

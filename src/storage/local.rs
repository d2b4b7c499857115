//! Local filesystem key-value store.
//!
//! ## Storage Layout
//!
//! ```text
//! {root}/
//! ├── 6465707431.json       # value of "dept1"
//! └── 6465707432.json       # value of "dept2"
//! ```
//!
//! File stems are the hex-encoded key, so any key maps to a valid file name
//! and `keys` can recover the original key from a directory listing.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::storage::KeyValueStore;
use crate::utils::glob_matcher;

const EXTENSION: &str = "json";

/// Local filesystem key-value store.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root_dir: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub async fn open(root_dir: impl Into<PathBuf>) -> Result<Self> {
        let root_dir = root_dir.into();
        tokio::fs::create_dir_all(&root_dir)
            .await
            .map_err(|e| unavailable(&root_dir, e))?;
        log::debug!("Opened local cache store at {}", root_dir.display());
        Ok(Self { root_dir })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Get the full path for a key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir
            .join(format!("{}.{EXTENSION}", hex::encode(key.as_bytes())))
    }

    /// Recover the key from a file name written by [`Self::path`].
    fn key_from_file_name(name: &str) -> Option<String> {
        let stem = name.strip_suffix(EXTENSION)?.strip_suffix('.')?;
        let bytes = hex::decode(stem).ok()?;
        String::from_utf8(bytes).ok()
    }

    /// Write bytes atomically through a uniquely named temp file, then rename.
    ///
    /// Each writer gets its own temp file, so concurrent writes to one key
    /// end with exactly one complete value in place.
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> std::io::Result<()> {
        let root_dir = self.root_dir.clone();
        let path = self.path(key);
        let bytes = bytes.to_vec();

        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = tempfile::Builder::new()
                .prefix(".")
                .suffix(".tmp")
                .tempfile_in(&root_dir)?;
            tmp.write_all(&bytes)?;
            tmp.flush()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(std::io::Error::other)?
    }
}

fn unavailable(path: &Path, error: std::io::Error) -> AppError {
    AppError::cache(format!("{}: {}", path.display(), error))
}

#[async_trait]
impl KeyValueStore for LocalStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable(&path, e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write_bytes(key, value.as_bytes())
            .await
            .map_err(|e| unavailable(&self.path(key), e))
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let matcher = glob_matcher(pattern)?;
        let mut entries = match tokio::fs::read_dir(&self.root_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(unavailable(&self.root_dir, e)),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| unavailable(&self.root_dir, e))?
        {
            let file_name = entry.file_name();
            let Some(key) = file_name.to_str().and_then(Self::key_from_file_name) else {
                continue;
            };
            if matcher.is_match(&key) {
                keys.push(key);
            }
        }

        keys.sort();
        Ok(keys)
    }

    async fn del(&self, keys: &[String]) -> Result<usize> {
        let mut removed = 0;
        for key in keys {
            let path = self.path(key);
            match tokio::fs::remove_file(&path).await {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(unavailable(&path, e)),
            }
        }
        Ok(removed)
    }
}

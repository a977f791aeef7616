//! # File Key-Value Store
//!
//! Persists each cache key as its own file inside a base directory, the
//! desktop/server counterpart of browser local storage.
//!
//! ```text
//! cache/
//! └── hub_app_config.json   ← one file per key
//! ```
//!
//! Writes are atomic: each value goes to its own uniquely named temp file in
//! the same directory, which is then renamed over the target. Concurrent
//! writers to one key never share a temp file; the last rename wins.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;
use tracing::{debug, info};

use super::traits::KeyValueStorage;

#[derive(Clone)]
pub struct FileKeyValueStore {
    base_directory: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            std::fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create cache directory {}", base_path.display())
            })?;
            info!("Created cache directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// File path backing `key`
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_directory.join(format!("{}.json", file_name))
    }
}

#[async_trait]
impl KeyValueStorage for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for_key(key);
        match fs::read_to_string(&path).await {
            Ok(content) => {
                debug!("Read cache key '{}' from {:?}", key, path);
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read cache file {:?}", path)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for_key(key);
        let directory = self.base_directory.clone();
        let target = path.clone();
        let value = value.to_string();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut temp = NamedTempFile::new_in(&directory)
                .with_context(|| format!("Failed to create temp file in {:?}", directory))?;
            temp.write_all(value.as_bytes())
                .with_context(|| format!("Failed to write temp file {:?}", temp.path()))?;
            temp.persist(&target)
                .with_context(|| format!("Failed to move cache file into place at {:?}", target))?;
            Ok(())
        })
        .await
        .context("Cache write task panicked")??;

        debug!("Saved cache key '{}' to {:?}", key, path);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for_key(key);
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Removed cache key '{}'", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove cache file {:?}", path)),
        }
    }
}

//! # In-Memory Storage
//!
//! Process-local implementations of the storage traits. Used for tests and
//! when no remote document store is configured.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

use super::traits::{DocumentStore, KeyValueStorage};

/// Key-value cache held in memory
#[derive(Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("Memory cache lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("Memory cache lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("Memory cache lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

/// Document store held in memory, keyed by (collection, id)
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<Mutex<HashMap<(String, String), Value>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents across all collections
    pub fn len(&self) -> usize {
        self.documents.lock().map(|docs| docs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| anyhow!("Document store lock poisoned"))?;
        Ok(documents
            .get(&(collection.to_string(), id.to_string()))
            .cloned())
    }

    async fn set_document(&self, collection: &str, id: &str, document: &Value) -> Result<()> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|_| anyhow!("Document store lock poisoned"))?;
        documents.insert((collection.to_string(), id.to_string()), document.clone());
        debug!("Stored document {}/{}", collection, id);
        Ok(())
    }
}

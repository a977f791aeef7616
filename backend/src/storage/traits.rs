//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.
//!
//! Three seams exist:
//! - [`KeyValueStorage`]: the local client cache (browser storage, a file, memory)
//! - [`DocumentStore`]: the remote managed document database
//! - [`ConfigSource`]: one tier of the configuration fallback chain

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use shared::{ClientConfig, ConfigOrigin};

/// Trait defining the interface for local key-value persistence
///
/// Values are opaque strings; callers own the serialization format.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Trait defining the interface for the remote document store
///
/// Writes are plain overwrites with no precondition.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document by collection and id
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Create or overwrite a document
    async fn set_document(&self, collection: &str, id: &str, document: &Value) -> Result<()>;
}

/// One tier of the configuration fallback chain
///
/// `Ok(None)` is an expected miss. `Err` is a failure the chain logs and
/// demotes to the next tier.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Tier reported to callers when this source wins
    fn origin(&self) -> ConfigOrigin;

    /// Fetch the configuration document for `client_id`
    async fn fetch_config(&self, client_id: &str) -> Result<Option<ClientConfig>>;
}

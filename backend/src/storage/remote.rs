//! # Remote Document Store
//!
//! Adapters for the managed document database that holds tenant
//! configurations. The store is reached through a small REST document API:
//!
//! - `GET {base_url}/{collection}/{id}` → `200` with the JSON document, `404` when absent
//! - `PUT {base_url}/{collection}/{id}` with the JSON document → overwrite
//!
//! [`RemoteConfigSource`] exposes the `configs` collection of any
//! [`DocumentStore`] as a tier of the configuration chain.

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use shared::{ClientConfig, ConfigOrigin};
use std::sync::Arc;
use tracing::{debug, info};

use super::traits::{ConfigSource, DocumentStore};

/// Collection holding one document per client, keyed by client id
pub const CONFIG_COLLECTION: &str = "configs";

/// Document store reached over HTTP
#[derive(Clone)]
pub struct HttpDocumentStore {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpDocumentStore {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Using remote document store at {}", base_url);
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// `{base_url}/{collection}/{id}` with each segment percent-encoded
    fn document_url(&self, collection: &str, id: &str) -> Result<Url> {
        for segment in [collection, id] {
            if segment.is_empty() || segment == "." || segment == ".." {
                bail!("'{}' is not a valid document path segment", segment);
            }
        }

        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid document store URL '{}'", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Document store URL '{}' cannot carry a path", self.base_url))?
            .pop_if_empty()
            .push(collection)
            .push(id);
        Ok(url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let url = self.document_url(collection, id)?;
        debug!("GET {}", url);

        let response = self
            .authorize(self.client.get(url.clone()))
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response
            .error_for_status()
            .with_context(|| format!("Document store rejected GET {}", url))?;
        let document = response
            .json::<Value>()
            .await
            .with_context(|| format!("Document at {} is not valid JSON", url))?;
        Ok(Some(document))
    }

    async fn set_document(&self, collection: &str, id: &str, document: &Value) -> Result<()> {
        let url = self.document_url(collection, id)?;
        debug!("PUT {}", url);

        self.authorize(self.client.put(url.clone()))
            .json(document)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Document store rejected PUT {}", url))?;
        Ok(())
    }
}

/// The `configs` collection of a document store, as a config chain tier
#[derive(Clone)]
pub struct RemoteConfigSource {
    store: Arc<dyn DocumentStore>,
}

impl RemoteConfigSource {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Overwrite the stored document for `config.client_id`
    pub async fn publish(&self, config: &ClientConfig) -> Result<()> {
        let document = serde_json::to_value(config)?;
        self.store
            .set_document(CONFIG_COLLECTION, &config.client_id, &document)
            .await
    }
}

#[async_trait]
impl ConfigSource for RemoteConfigSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn origin(&self) -> ConfigOrigin {
        ConfigOrigin::Remote
    }

    async fn fetch_config(&self, client_id: &str) -> Result<Option<ClientConfig>> {
        let Some(document) = self.store.get_document(CONFIG_COLLECTION, client_id).await? else {
            return Ok(None);
        };

        let config: ClientConfig = serde_json::from_value(document)
            .with_context(|| format!("Remote config document '{}' has an invalid shape", client_id))?;
        Ok(Some(config))
    }
}

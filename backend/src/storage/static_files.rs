//! # Static Config Directory
//!
//! Bundled configuration documents shipped alongside the app.
//!
//! ## Directory Structure
//!
//! ```text
//! configs/
//! ├── index.json                   ← known document names (scanned by the resolver)
//! ├── access-codes.json            ← provisioned access code -> client id registry
//! ├── wildroots-festival-2025.json ← one document per client, `{clientId}.json`
//! └── ...
//! ```

use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::{ClientConfig, ConfigOrigin};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use super::traits::ConfigSource;

pub const INDEX_FILE: &str = "index.json";
pub const ACCESS_CODE_REGISTRY_FILE: &str = "access-codes.json";

/// Documents scanned for embedded access codes when no index file exists
pub const DEFAULT_KNOWN_DOCUMENTS: &[&str] = &[
    "wildroots-festival-2025.json",
    "restore-physio-clinic.json",
    "harbour-kitchen.json",
    "parkside-lettings.json",
];

#[derive(Clone)]
pub struct StaticConfigDirectory {
    directory: PathBuf,
}

impl StaticConfigDirectory {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn index_path(&self) -> PathBuf {
        self.directory.join(INDEX_FILE)
    }

    pub fn registry_path(&self) -> PathBuf {
        self.directory.join(ACCESS_CODE_REGISTRY_FILE)
    }

    /// Path of the document for `client_id`, or None when the id cannot name a file
    pub fn document_path(&self, client_id: &str) -> Option<PathBuf> {
        if is_safe_document_stem(client_id) {
            Some(self.directory.join(format!("{}.json", client_id)))
        } else {
            None
        }
    }

    /// Read and parse one document by file name (e.g. `harbour-kitchen.json`)
    pub async fn read_document(&self, file_name: &str) -> Result<Option<ClientConfig>> {
        let stem = client_id_from_file_name(file_name);
        if !is_safe_document_stem(stem) {
            warn!("Refusing to read config document with unsafe name '{}'", file_name);
            return Ok(None);
        }

        let path = self.directory.join(file_name);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read config document {:?}", path))
            }
        };

        let config: ClientConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config document {:?}", path))?;
        debug!("Loaded static config document {:?}", path);
        Ok(Some(config))
    }

    /// Names of the documents known to this directory
    ///
    /// Reads `index.json` when present, otherwise the built-in list.
    pub async fn known_documents(&self) -> Result<Vec<String>> {
        match fs::read_to_string(self.index_path()).await {
            Ok(content) => {
                let names: Vec<String> = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid index file {:?}", self.index_path()))?;
                Ok(names)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(DEFAULT_KNOWN_DOCUMENTS
                .iter()
                .map(|name| name.to_string())
                .collect()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {:?}", self.index_path())),
        }
    }

    /// Provisioned access codes, keyed by upper-cased code
    pub async fn access_code_registry(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(self.registry_path()).await {
            Ok(content) => {
                let registry: BTreeMap<String, String> = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid registry file {:?}", self.registry_path()))?;
                Ok(registry
                    .into_iter()
                    .map(|(code, client_id)| (code.to_uppercase(), client_id))
                    .collect())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {:?}", self.registry_path())),
        }
    }
}

#[async_trait]
impl ConfigSource for StaticConfigDirectory {
    fn name(&self) -> &'static str {
        "static"
    }

    fn origin(&self) -> ConfigOrigin {
        ConfigOrigin::Static
    }

    async fn fetch_config(&self, client_id: &str) -> Result<Option<ClientConfig>> {
        if !is_safe_document_stem(client_id) {
            debug!("Client id '{}' cannot name a static document", client_id);
            return Ok(None);
        }
        self.read_document(&format!("{}.json", client_id)).await
    }
}

/// Client id derived from a document file name (file name minus extension)
pub fn client_id_from_file_name(file_name: &str) -> &str {
    file_name.strip_suffix(".json").unwrap_or(file_name)
}

fn is_safe_document_stem(stem: &str) -> bool {
    !stem.is_empty()
        && !stem.starts_with('.')
        && stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{bundled_configs_dir, sample_config, TestEnvironment};

    #[tokio::test]
    async fn test_fetch_config_reads_client_document() {
        let env = TestEnvironment::new().await.unwrap();
        env.write_static_config(&sample_config("harbour-kitchen", Some("HARBOUR")))
            .await
            .unwrap();

        let config = env.static_dir.fetch_config("harbour-kitchen").await.unwrap();
        assert_eq!(config.unwrap().client_id, "harbour-kitchen");
        assert!(env.static_dir.fetch_config("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_bundled_documents_parse() {
        let bundled = StaticConfigDirectory::new(bundled_configs_dir());
        let known = bundled.known_documents().await.unwrap();
        assert_eq!(known.len(), DEFAULT_KNOWN_DOCUMENTS.len());

        for file_name in &known {
            let config = bundled.read_document(file_name).await.unwrap().unwrap();
            assert_eq!(config.client_id, client_id_from_file_name(file_name));
            assert!(config.access_code.is_some());
            assert!(config.industry.is_some());
        }
    }

    #[tokio::test]
    async fn test_fetch_config_rejects_path_like_ids() {
        let env = TestEnvironment::new().await.unwrap();
        assert!(env.static_dir.fetch_config("../secrets").await.unwrap().is_none());
        assert!(env.static_dir.fetch_config("").await.unwrap().is_none());
        assert!(env.static_dir.document_path("a/b").is_none());
    }

    #[tokio::test]
    async fn test_invalid_document_is_an_error() {
        let env = TestEnvironment::new().await.unwrap();
        std::fs::write(env.static_dir.directory().join("broken.json"), "{ not json").unwrap();

        assert!(env.static_dir.fetch_config("broken").await.is_err());
    }

    #[tokio::test]
    async fn test_known_documents_default_and_index() {
        let env = TestEnvironment::new().await.unwrap();
        let defaults = env.static_dir.known_documents().await.unwrap();
        assert_eq!(defaults.len(), DEFAULT_KNOWN_DOCUMENTS.len());

        std::fs::write(env.static_dir.index_path(), r#"["only-one.json"]"#).unwrap();
        let indexed = env.static_dir.known_documents().await.unwrap();
        assert_eq!(indexed, vec!["only-one.json".to_string()]);
    }

    #[tokio::test]
    async fn test_registry_codes_are_uppercased() {
        let env = TestEnvironment::new().await.unwrap();
        assert!(env.static_dir.access_code_registry().await.unwrap().is_empty());

        std::fs::write(env.static_dir.registry_path(), r#"{"summer24": "summer-fair"}"#).unwrap();
        let registry = env.static_dir.access_code_registry().await.unwrap();
        assert_eq!(registry.get("SUMMER24"), Some(&"summer-fair".to_string()));
    }

    #[test]
    fn test_client_id_from_file_name() {
        assert_eq!(client_id_from_file_name("wildroots-festival-2025.json"), "wildroots-festival-2025");
        assert_eq!(client_id_from_file_name("plain"), "plain");
    }
}

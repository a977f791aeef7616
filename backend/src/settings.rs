//! Runtime settings.
//!
//! Loaded as: built-in defaults → optional YAML file named by
//! `HUB_SETTINGS_FILE` → individual `HUB_*` environment variables.
//!
//! ```yaml
//! bind_addr: "127.0.0.1:3000"
//! static_config_dir: "configs"
//! cache_dir: "/var/lib/hub-app"
//! remote_store_url: "https://documents.example.com/v1"
//! cors_origin: "http://localhost:8080"
//! frontend_dist_dir: "../web/dist"
//! initial_load_timeout_ms: 2000
//! emergency_timeout_ms: 10000
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::domain::ProviderTimeouts;

pub const SETTINGS_FILE_VAR: &str = "HUB_SETTINGS_FILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubSettings {
    pub bind_addr: String,
    /// Directory of bundled `{clientId}.json` documents
    pub static_config_dir: PathBuf,
    /// Directory backing the local config cache
    pub cache_dir: PathBuf,
    /// Base URL of the remote document API; in-memory store when absent
    pub remote_store_url: Option<String>,
    pub remote_store_api_key: Option<String>,
    pub cors_origin: String,
    /// Built web bundle served for every non-API path
    pub frontend_dist_dir: Option<PathBuf>,
    pub initial_load_timeout_ms: u64,
    pub emergency_timeout_ms: u64,
}

impl Default for HubSettings {
    fn default() -> Self {
        let cache_dir = dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("hub-app");
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            static_config_dir: PathBuf::from("configs"),
            cache_dir,
            remote_store_url: None,
            remote_store_api_key: None,
            cors_origin: "http://localhost:8080".to_string(),
            frontend_dist_dir: None,
            initial_load_timeout_ms: 2000,
            emergency_timeout_ms: 10000,
        }
    }
}

impl HubSettings {
    /// Load settings from the process environment
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load settings using `lookup` for environment variables
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match lookup(SETTINGS_FILE_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        settings.apply_env(&lookup)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: HubSettings = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn apply_env<F>(&mut self, lookup: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("HUB_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("HUB_STATIC_CONFIG_DIR") {
            self.static_config_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("HUB_CACHE_DIR") {
            self.cache_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("HUB_REMOTE_STORE_URL") {
            self.remote_store_url = Some(value).filter(|url| !url.trim().is_empty());
        }
        if let Some(value) = lookup("HUB_REMOTE_STORE_API_KEY") {
            self.remote_store_api_key = Some(value);
        }
        if let Some(value) = lookup("HUB_CORS_ORIGIN") {
            self.cors_origin = value;
        }
        if let Some(value) = lookup("HUB_FRONTEND_DIST_DIR") {
            self.frontend_dist_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup("HUB_INITIAL_LOAD_TIMEOUT_MS") {
            self.initial_load_timeout_ms = value
                .parse()
                .with_context(|| format!("HUB_INITIAL_LOAD_TIMEOUT_MS is not a number: '{}'", value))?;
        }
        if let Some(value) = lookup("HUB_EMERGENCY_TIMEOUT_MS") {
            self.emergency_timeout_ms = value
                .parse()
                .with_context(|| format!("HUB_EMERGENCY_TIMEOUT_MS is not a number: '{}'", value))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        if self.initial_load_timeout_ms == 0 {
            anyhow::bail!("initial_load_timeout_ms must be greater than zero");
        }
        if self.emergency_timeout_ms < self.initial_load_timeout_ms {
            anyhow::bail!("emergency_timeout_ms must not be shorter than initial_load_timeout_ms");
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind_addr))
    }

    pub fn provider_timeouts(&self) -> ProviderTimeouts {
        ProviderTimeouts {
            initial_load: Duration::from_millis(self.initial_load_timeout_ms),
            emergency: Duration::from_millis(self.emergency_timeout_ms),
        }
    }
}

//! # Config Store
//!
//! Produces a [`ClientConfig`] for a canonical client id by walking an ordered
//! list of [`ConfigSource`] tiers (first success wins), falling back to a
//! synthesized generic config so an unknown id still renders an app shell.
//!
//! Every resolution is written to the local cache under [`CONFIG_CACHE_KEY`]
//! together with the client id, replacing whatever was there.

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use shared::{
    CachedConfig, ClientConfig, ConfigOrigin, Features, NavigationItem, Theme, ThemeColors,
    ThemeFonts, ThemeLogo,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::storage::{ConfigSource, KeyValueStorage, RemoteConfigSource};

/// Well-known local cache key holding the last resolved config
pub const CONFIG_CACHE_KEY: &str = "hub_app_config";

/// Display name of the synthesized fallback config
pub const GENERIC_APP_NAME: &str = "Hub App";

/// A resolved configuration plus how it was obtained
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: ClientConfig,
    pub is_expired: bool,
    pub origin: ConfigOrigin,
}

#[derive(Clone)]
pub struct ConfigStore {
    sources: Vec<Arc<dyn ConfigSource>>,
    cache: Arc<dyn KeyValueStorage>,
    publisher: Option<RemoteConfigSource>,
}

impl ConfigStore {
    /// `sources` are tried in order; the first to return a config wins
    pub fn new(sources: Vec<Arc<dyn ConfigSource>>, cache: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            sources,
            cache,
            publisher: None,
        }
    }

    /// Enable [`ConfigStore::publish`] through the given remote tier
    pub fn with_publisher(mut self, publisher: RemoteConfigSource) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// First-success-wins over the source tiers. Failures demote to the next tier.
    pub async fn first_success(&self, client_id: &str) -> Option<(ClientConfig, ConfigOrigin)> {
        for source in &self.sources {
            match source.fetch_config(client_id).await {
                Ok(Some(config)) => {
                    if config.client_id != client_id {
                        warn!(
                            "{} config for '{}' declares clientId '{}'",
                            source.name(),
                            client_id,
                            config.client_id
                        );
                    }
                    return Some((config, source.origin()));
                }
                Ok(None) => debug!("{} has no config for '{}'", source.name(), client_id),
                Err(e) => warn!(
                    "{} lookup for '{}' failed, trying next tier: {:#}",
                    source.name(),
                    client_id,
                    e
                ),
            }
        }
        None
    }

    /// Resolve `client_id` through the chain, cache the result and check expiry.
    ///
    /// Never fails: an unknown id yields the generic config.
    pub async fn load(&self, client_id: &str) -> LoadedConfig {
        let loaded = self.lookup(client_id).await;
        self.persist(client_id, &loaded.config).await;
        loaded
    }

    /// Same as [`ConfigStore::load`] without touching the local cache
    pub async fn lookup(&self, client_id: &str) -> LoadedConfig {
        let (config, origin) = match self.first_success(client_id).await {
            Some(found) => found,
            None => {
                info!("No config found for '{}', using generic config", client_id);
                (generic_config(client_id), ConfigOrigin::Generic)
            }
        };

        let is_expired = is_expired(config.expiry.as_deref(), Utc::now());
        if is_expired {
            warn!("Config for '{}' expired at {:?}", client_id, config.expiry);
        }
        info!("Loaded config '{}' from {:?}", config.name, origin);

        LoadedConfig {
            config,
            is_expired,
            origin,
        }
    }

    /// Read the cached config, if any
    ///
    /// A payload that fails to parse is removed and treated as a miss.
    pub async fn load_cached(&self) -> Option<LoadedConfig> {
        let raw = match self.cache.get(CONFIG_CACHE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read cached config: {:#}", e);
                return None;
            }
        };

        match serde_json::from_str::<CachedConfig>(&raw) {
            Ok(cached) => {
                debug!("Restored cached config for '{}'", cached.client_id);
                let is_expired = is_expired(cached.config.expiry.as_deref(), Utc::now());
                Some(LoadedConfig {
                    config: cached.config,
                    is_expired,
                    origin: ConfigOrigin::Cache,
                })
            }
            Err(e) => {
                warn!("Discarding corrupt cached config: {}", e);
                if let Err(e) = self.cache.remove(CONFIG_CACHE_KEY).await {
                    warn!("Could not remove corrupt cached config: {:#}", e);
                }
                None
            }
        }
    }

    /// Raw cached payload, exactly as persisted
    pub async fn cached_payload(&self) -> Result<Option<String>> {
        self.cache.get(CONFIG_CACHE_KEY).await
    }

    pub async fn clear_cache(&self) -> Result<()> {
        self.cache.remove(CONFIG_CACHE_KEY).await
    }

    /// Write a config to the remote document store (plain overwrite)
    pub async fn publish(&self, config: &ClientConfig) -> Result<()> {
        let publisher = self
            .publisher
            .as_ref()
            .ok_or_else(|| anyhow!("No remote document store is configured"))?;
        publisher.publish(config).await?;
        info!("Published config for '{}'", config.client_id);
        Ok(())
    }

    async fn persist(&self, client_id: &str, config: &ClientConfig) {
        let cached = CachedConfig {
            client_id: client_id.to_string(),
            config: config.clone(),
        };
        let payload = match serde_json::to_string(&cached) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Could not serialize config for cache: {}", e);
                return;
            }
        };
        if let Err(e) = self.cache.set(CONFIG_CACHE_KEY, &payload).await {
            warn!("Could not cache config for '{}': {:#}", client_id, e);
        }
    }
}

/// The config used when no tier knows `client_id`
pub fn generic_config(client_id: &str) -> ClientConfig {
    ClientConfig {
        client_id: client_id.to_string(),
        access_code: None,
        name: GENERIC_APP_NAME.to_string(),
        description: None,
        version: None,
        expiry: None,
        industry: None,
        variation: None,
        theme: Theme {
            colors: ThemeColors {
                primary: "#1976D2".to_string(),
                secondary: "#424242".to_string(),
                background: "#FFFFFF".to_string(),
                surface: "#F5F5F5".to_string(),
                text: "#212121".to_string(),
                text_secondary: "#757575".to_string(),
            },
            fonts: ThemeFonts::default(),
            logo: ThemeLogo::default(),
        },
        navigation: vec![NavigationItem {
            id: "home".to_string(),
            title: "Home".to_string(),
            icon: "home".to_string(),
            path: "/".to_string(),
        }],
        features: Features::default(),
        content: BTreeMap::new(),
        push_notifications: None,
        analytics: None,
    }
}

/// Parse an expiry value: RFC 3339, a naive date-time (UTC), or a plain date
/// (midnight UTC)
pub fn parse_expiry(expiry: &str) -> Option<DateTime<Utc>> {
    let expiry = expiry.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(expiry) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(expiry, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(expiry, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Expired means the expiry parses to an instant before `now`.
/// Missing or unparseable expiry is not expired.
pub fn is_expired(expiry: Option<&str>, now: DateTime<Utc>) -> bool {
    let Some(expiry) = expiry else {
        return false;
    };
    match parse_expiry(expiry) {
        Some(at) => at < now,
        None => {
            warn!("Ignoring unparseable config expiry '{}'", expiry);
            false
        }
    }
}

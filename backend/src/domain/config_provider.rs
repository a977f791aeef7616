//! # Config Provider
//!
//! Session-level owner of the current configuration. Exposes
//! `{config, is_expired, loading}` plus `load_config` / `clear_config` to the
//! rendering layer.
//!
//! Overlapping loads are not de-duplicated or cancelled: whichever finishes
//! last writes the state.

use shared::{ClientConfig, ConfigStateResponse};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::access_code_resolver::AccessCodeResolver;
use super::config_store::{ConfigStore, LoadedConfig};
use super::deadline::Deadline;
use super::errors::ConfigError;

/// Default bound on the initial cache-only load
pub const DEFAULT_INITIAL_LOAD_TIMEOUT: Duration = Duration::from_secs(2);
/// Default backstop that forces `loading` off
pub const DEFAULT_EMERGENCY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy)]
pub struct ProviderTimeouts {
    pub initial_load: Duration,
    pub emergency: Duration,
}

impl Default for ProviderTimeouts {
    fn default() -> Self {
        Self {
            initial_load: DEFAULT_INITIAL_LOAD_TIMEOUT,
            emergency: DEFAULT_EMERGENCY_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderState {
    pub config: Option<ClientConfig>,
    pub is_expired: bool,
    pub loading: bool,
}

impl From<ProviderState> for ConfigStateResponse {
    fn from(state: ProviderState) -> Self {
        ConfigStateResponse {
            config: state.config,
            is_expired: state.is_expired,
            loading: state.loading,
        }
    }
}

/// How the initial mount-time load ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialLoad {
    /// A cached config was restored
    Restored,
    /// Nothing cached; the UI should ask for an access code
    NoSession,
    /// The cache read did not finish in time
    TimedOut,
    /// The cache could not be read
    Failed,
}

#[derive(Clone)]
pub struct ConfigProvider {
    resolver: Arc<AccessCodeResolver>,
    store: ConfigStore,
    state: Arc<RwLock<ProviderState>>,
    timeouts: ProviderTimeouts,
}

impl ConfigProvider {
    pub fn new(resolver: Arc<AccessCodeResolver>, store: ConfigStore) -> Self {
        Self::with_timeouts(resolver, store, ProviderTimeouts::default())
    }

    pub fn with_timeouts(
        resolver: Arc<AccessCodeResolver>,
        store: ConfigStore,
        timeouts: ProviderTimeouts,
    ) -> Self {
        Self {
            resolver,
            store,
            state: Arc::new(RwLock::new(ProviderState::default())),
            timeouts,
        }
    }

    pub async fn state(&self) -> ProviderState {
        self.state.read().await.clone()
    }

    /// Load a configuration.
    ///
    /// - `None` (or a blank string): hydrate from the local cache only; fails
    ///   with [`ConfigError::NoCachedConfig`] when nothing is cached
    /// - `Some(id_or_code)`: resolve the access code, then run the store chain
    pub async fn load_config(&self, id_or_code: Option<&str>) -> Result<LoadedConfig, ConfigError> {
        let input = id_or_code.map(str::trim).filter(|s| !s.is_empty());
        self.set_loading(true).await;

        let loaded = match input {
            None => match self.store.load_cached().await {
                Some(loaded) => loaded,
                None => {
                    self.set_loading(false).await;
                    return Err(ConfigError::NoCachedConfig);
                }
            },
            Some(input) => {
                let client_id = self.resolver.resolve(input).await;
                self.store.load(&client_id).await
            }
        };

        {
            let mut state = self.state.write().await;
            state.config = Some(loaded.config.clone());
            state.is_expired = loaded.is_expired;
            state.loading = false;
        }
        info!("Provider now serving '{}'", loaded.config.client_id);
        Ok(loaded)
    }

    /// Forget the current config in memory and in the local cache
    pub async fn clear_config(&self) -> Result<(), ConfigError> {
        {
            let mut state = self.state.write().await;
            *state = ProviderState::default();
        }
        self.store.clear_cache().await?;
        info!("Cleared client configuration");
        Ok(())
    }

    /// Mount-time load: cache only, bounded by the initial-load deadline, with
    /// an emergency backstop that forces `loading` off if anything leaves it on.
    pub async fn initialize(&self) -> InitialLoad {
        let state = self.state.clone();
        Deadline::new("emergency loading reset", self.timeouts.emergency).backstop(move || async move {
            let mut state = state.write().await;
            if state.loading {
                warn!("Loading flag still set at emergency timeout; forcing it off");
                state.loading = false;
            }
        });

        let deadline = Deadline::new("initial config load", self.timeouts.initial_load);
        let outcome = match deadline.run(self.load_config(None)).await {
            Ok(Ok(_)) => InitialLoad::Restored,
            Ok(Err(ConfigError::NoCachedConfig)) => InitialLoad::NoSession,
            Ok(Err(e)) => {
                warn!("Initial config load failed: {}", e);
                InitialLoad::Failed
            }
            Err(_) => InitialLoad::TimedOut,
        };

        self.set_loading(false).await;
        info!("Initial config load finished: {:?}", outcome);
        outcome
    }

    async fn set_loading(&self, loading: bool) {
        self.state.write().await.loading = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config_store::CONFIG_CACHE_KEY;
    use crate::storage::test_utils::{bundled_configs_dir, sample_config, TestEnvironment};
    use crate::storage::{
        ConfigSource, InMemoryDocumentStore, KeyValueStorage, MemoryKeyValueStore, RemoteConfigSource,
        StaticConfigDirectory,
    };
    use anyhow::Result;
    use async_trait::async_trait;
    use shared::ConfigOrigin;

    /// Cache whose reads never complete
    struct HangingCache;

    #[async_trait]
    impl KeyValueStorage for HangingCache {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            std::future::pending().await
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }

        async fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    fn provider_over(static_dir: StaticConfigDirectory, cache: Arc<dyn KeyValueStorage>) -> ConfigProvider {
        let remote = RemoteConfigSource::new(Arc::new(InMemoryDocumentStore::new()));
        let sources: Vec<Arc<dyn ConfigSource>> = vec![Arc::new(remote), Arc::new(static_dir.clone())];
        let store = ConfigStore::new(sources, cache);
        ConfigProvider::new(Arc::new(AccessCodeResolver::new(static_dir)), store)
    }

    fn bundled_provider() -> ConfigProvider {
        provider_over(
            StaticConfigDirectory::new(bundled_configs_dir()),
            Arc::new(MemoryKeyValueStore::new()),
        )
    }

    #[tokio::test]
    async fn test_access_code_loads_festival_config() {
        let provider = bundled_provider();

        let loaded = provider.load_config(Some("WILDROOTS2025")).await.unwrap();
        assert_eq!(loaded.config.client_id, "wildroots-festival-2025");
        assert_eq!(loaded.config.name, "WildRoots Festival 2025");
        assert_eq!(loaded.origin, ConfigOrigin::Static);

        let state = provider.state().await;
        assert_eq!(state.config, Some(loaded.config));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_unknown_code_yields_generic_config() {
        let provider = bundled_provider();

        let loaded = provider.load_config(Some("UNKNOWNCODE")).await.unwrap();
        assert_eq!(loaded.config.client_id, "UNKNOWNCODE");
        assert_eq!(loaded.origin, ConfigOrigin::Generic);
        assert_eq!(loaded.config.navigation.len(), 1);
        assert_eq!(loaded.config.navigation[0].id, "home");
    }

    #[tokio::test]
    async fn test_cache_only_load_without_cache_fails() {
        let provider = bundled_provider();

        let err = provider.load_config(None).await.unwrap_err();
        assert!(matches!(err, ConfigError::NoCachedConfig));
        assert!(!provider.state().await.loading);

        // Blank input counts as no input
        assert!(matches!(
            provider.load_config(Some("   ")).await,
            Err(ConfigError::NoCachedConfig)
        ));
    }

    #[tokio::test]
    async fn test_clear_then_cache_only_load_fails() {
        let provider = bundled_provider();
        provider.load_config(Some("WILDROOTS2025")).await.unwrap();

        // Cache-only load works while something is cached
        let restored = provider.load_config(None).await.unwrap();
        assert_eq!(restored.origin, ConfigOrigin::Cache);

        provider.clear_config().await.unwrap();
        assert_eq!(provider.state().await, ProviderState::default());
        assert!(matches!(
            provider.load_config(None).await,
            Err(ConfigError::NoCachedConfig)
        ));
    }

    #[tokio::test]
    async fn test_sequential_loads_cache_identical_bytes() {
        let cache = MemoryKeyValueStore::new();
        let provider = provider_over(
            StaticConfigDirectory::new(bundled_configs_dir()),
            Arc::new(cache.clone()),
        );

        provider.load_config(Some("wildroots-festival-2025")).await.unwrap();
        let first = cache.get(CONFIG_CACHE_KEY).await.unwrap().unwrap();
        provider.load_config(Some("wildroots-festival-2025")).await.unwrap();
        let second = cache.get(CONFIG_CACHE_KEY).await.unwrap().unwrap();

        assert_eq!(first.into_bytes(), second.into_bytes());
    }

    #[tokio::test]
    async fn test_expiry_flag_reaches_state() {
        let env = TestEnvironment::new().await.unwrap();
        let mut expired = sample_config("expired-client", None);
        expired.expiry = Some("2001-01-01T00:00:00Z".to_string());
        env.write_static_config(&expired).await.unwrap();
        let mut current = sample_config("current-client", None);
        current.expiry = Some("2999-01-01T00:00:00Z".to_string());
        env.write_static_config(&current).await.unwrap();

        let provider = provider_over(env.static_dir.clone(), Arc::new(env.cache.clone()));

        provider.load_config(Some("expired-client")).await.unwrap();
        assert!(provider.state().await.is_expired);

        provider.load_config(Some("current-client")).await.unwrap();
        assert!(!provider.state().await.is_expired);
    }

    #[tokio::test]
    async fn test_initialize_restores_from_file_cache() {
        let env = TestEnvironment::new().await.unwrap();
        env.write_static_config(&sample_config("restart-me", None)).await.unwrap();

        let first = provider_over(env.static_dir.clone(), Arc::new(env.cache.clone()));
        first.load_config(Some("restart-me")).await.unwrap();

        // A fresh provider over the same cache directory, as after an app restart
        let second = provider_over(env.static_dir.clone(), Arc::new(env.cache.clone()));
        assert_eq!(second.initialize().await, InitialLoad::Restored);
        let state = second.state().await;
        assert_eq!(state.config.unwrap().client_id, "restart-me");
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_initialize_without_session() {
        let provider = bundled_provider();
        assert_eq!(provider.initialize().await, InitialLoad::NoSession);
        assert!(!provider.state().await.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_times_out_on_hanging_cache() {
        let provider = provider_over(
            StaticConfigDirectory::new(bundled_configs_dir()),
            Arc::new(HangingCache),
        );

        assert_eq!(provider.initialize().await, InitialLoad::TimedOut);
        let state = provider.state().await;
        assert!(!state.loading);
        assert!(state.config.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_emergency_backstop_clears_stuck_loading() {
        let provider = provider_over(
            StaticConfigDirectory::new(bundled_configs_dir()),
            Arc::new(HangingCache),
        );
        provider.initialize().await;

        // A later cache-only load hangs and leaves the flag on
        let stuck = provider.clone();
        let hung = tokio::spawn(async move { stuck.load_config(None).await });
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(provider.state().await.loading);

        tokio::time::sleep(DEFAULT_EMERGENCY_TIMEOUT).await;
        assert!(!provider.state().await.loading);
        hung.abort();
    }

    #[tokio::test]
    async fn test_overlapping_loads_last_write_wins() {
        let provider = bundled_provider();

        let (a, b) = tokio::join!(
            provider.load_config(Some("HARBOUR")),
            provider.load_config(Some("PARKSIDE")),
        );
        let a = a.unwrap();
        let b = b.unwrap();

        // Either may finish last; the state matches one of them and is not loading
        let state = provider.state().await;
        let served = state.config.unwrap().client_id;
        assert!(served == a.config.client_id || served == b.config.client_id);
        assert!(!state.loading);
    }
}

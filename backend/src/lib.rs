//! # Hub App Backend
//!
//! Configuration service for a white-label hub app: one codebase rendered as
//! many branded apps, selected at runtime by an access code.
//!
//! ## Architecture
//!
//! - **storage**: local key-value cache, remote document store and the
//!   bundled static config directory
//! - **domain**: access code resolution, the config store chain, the session
//!   provider, variation styles and the client generator
//! - **io**: REST handlers over the domain
//!
//! [`initialize_backend`] wires the layers from [`settings::HubSettings`];
//! [`create_router`] exposes them over HTTP.

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

pub mod domain;
pub mod io;
pub mod settings;
pub mod storage;

use domain::{AccessCodeResolver, ConfigProvider, ConfigStore, InitialLoad, ProviderTimeouts};
use settings::HubSettings;
use storage::{
    ConfigSource, DocumentStore, FileKeyValueStore, HttpDocumentStore, InMemoryDocumentStore,
    KeyValueStorage, RemoteConfigSource, StaticConfigDirectory,
};

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<AccessCodeResolver>,
    pub config_store: ConfigStore,
    pub config_provider: ConfigProvider,
}

impl AppState {
    /// Wire the domain services over already-built storage adapters.
    ///
    /// The chain order is remote document store first, static directory second.
    pub async fn assemble(
        static_dir: StaticConfigDirectory,
        documents: Arc<dyn DocumentStore>,
        cache: Arc<dyn KeyValueStorage>,
        timeouts: ProviderTimeouts,
    ) -> Self {
        let remote = RemoteConfigSource::new(documents);
        let sources: Vec<Arc<dyn ConfigSource>> =
            vec![Arc::new(remote.clone()), Arc::new(static_dir.clone())];
        let config_store = ConfigStore::new(sources, cache).with_publisher(remote);

        let resolver = Arc::new(AccessCodeResolver::with_registry(static_dir).await);
        let config_provider =
            ConfigProvider::with_timeouts(resolver.clone(), config_store.clone(), timeouts);

        Self {
            resolver,
            config_store,
            config_provider,
        }
    }
}

/// Build storage from settings, wire the services and run the initial load
pub async fn initialize_backend(settings: &HubSettings) -> Result<AppState> {
    info!("Setting up storage");
    let static_dir = StaticConfigDirectory::new(&settings.static_config_dir);
    let documents: Arc<dyn DocumentStore> = match &settings.remote_store_url {
        Some(url) => {
            info!("Using remote document store at {}", url);
            Arc::new(HttpDocumentStore::new(
                url.clone(),
                settings.remote_store_api_key.clone(),
            ))
        }
        None => {
            info!("No remote store configured; published configs live in memory");
            Arc::new(InMemoryDocumentStore::new())
        }
    };
    let cache = FileKeyValueStore::new(&settings.cache_dir).with_context(|| {
        format!("Failed to open config cache at {:?}", settings.cache_dir)
    })?;

    info!("Setting up domain model");
    let state = AppState::assemble(
        static_dir,
        documents,
        Arc::new(cache),
        settings.provider_timeouts(),
    )
    .await;

    match state.config_provider.initialize().await {
        InitialLoad::Restored => info!("Restored cached session"),
        InitialLoad::NoSession => info!("No cached session; waiting for an access code"),
        other => info!("Starting without a session ({:?})", other),
    }

    Ok(state)
}

/// The `/api` routes with state applied
pub fn routes(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/resolve/:code", get(io::resolve_access_code))
        .route(
            "/configs/:client_id",
            get(io::get_client_config).put(io::put_client_config),
        )
        .route("/session", get(io::get_session).delete(io::clear_session))
        .route("/session/load", post(io::load_session))
        .route("/session/shell", get(io::get_app_shell))
        .route("/variations", get(io::list_variations))
        .route("/variations/:name", get(io::get_variation))
        .route("/logs", post(io::log_message));

    Router::new().nest("/api", api_routes).with_state(app_state)
}

/// Full application router: API, static configs, optional web bundle, CORS
pub fn create_router(settings: &HubSettings, app_state: AppState) -> Result<Router> {
    let origin = settings
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", settings.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let mut router = routes(app_state).nest_service(
        "/configs",
        ServeDir::new(&settings.static_config_dir),
    );
    if let Some(dist) = &settings.frontend_dist_dir {
        info!("Serving web bundle from {:?}", dist);
        router = router.fallback_service(ServeDir::new(dist));
    }

    Ok(router.layer(cors))
}

//! # REST API for the Config Session
//!
//! The provider's current configuration: state snapshot, load by access code
//! or client id, clear, and the app shell derived from it.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::{ConfigStateResponse, LoadConfigRequest, LoadedConfigResponse};
use tracing::info;

use super::config_error_response;
use crate::domain::build_app_shell;
use crate::AppState;

/// Current `{config, isExpired, loading}` snapshot
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/session");

    let snapshot: ConfigStateResponse = state.config_provider.state().await.into();
    Json(snapshot)
}

/// Load a config; without `idOrCode` the cached session is restored
pub async fn load_session(
    State(state): State<AppState>,
    Json(request): Json<LoadConfigRequest>,
) -> impl IntoResponse {
    info!("POST /api/session/load - request: {:?}", request);

    match state
        .config_provider
        .load_config(request.id_or_code.as_deref())
        .await
    {
        Ok(loaded) => (
            StatusCode::OK,
            Json(LoadedConfigResponse {
                config: loaded.config,
                is_expired: loaded.is_expired,
                origin: loaded.origin,
            }),
        )
            .into_response(),
        Err(e) => config_error_response("Failed to load config", e),
    }
}

/// Forget the current config and drop the cached copy
pub async fn clear_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/session");

    match state.config_provider.clear_config().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => config_error_response("Failed to clear config", e),
    }
}

/// App shell view model for the current config
pub async fn get_app_shell(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/session/shell");

    let snapshot = state.config_provider.state().await;
    match snapshot.config {
        Some(config) => (
            StatusCode::OK,
            Json(build_app_shell(&config, snapshot.is_expired)),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, super::NO_SESSION_MESSAGE).into_response(),
    }
}

//! # REST API for Client Configs
//!
//! Access code resolution plus read/publish of per-client config documents.
//! Lookups here run the store chain without touching the session cache.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::{ClientConfig, LoadedConfigResponse, ResolveAccessCodeResponse};
use tracing::{error, info, warn};

use crate::AppState;

/// Map an access code (or a raw client id) to its canonical client id
pub async fn resolve_access_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/resolve/{}", code);

    let client_id = state.resolver.resolve(&code).await;
    Json(ResolveAccessCodeResponse {
        input: code,
        client_id,
    })
}

/// Run the config chain for one client id
pub async fn get_client_config(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/configs/{}", client_id);

    let loaded = state.config_store.lookup(&client_id).await;
    (
        StatusCode::OK,
        Json(LoadedConfigResponse {
            config: loaded.config,
            is_expired: loaded.is_expired,
            origin: loaded.origin,
        }),
    )
}

/// Publish a config document to the remote store
pub async fn put_client_config(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(config): Json<ClientConfig>,
) -> impl IntoResponse {
    info!("PUT /api/configs/{}", client_id);

    if config.client_id != client_id {
        warn!(
            "Rejected publish: path id '{}' does not match clientId '{}'",
            client_id, config.client_id
        );
        return (
            StatusCode::BAD_REQUEST,
            format!(
                "clientId '{}' does not match path '{}'",
                config.client_id, client_id
            ),
        )
            .into_response();
    }

    match state.config_store.publish(&config).await {
        Ok(()) => (StatusCode::OK, Json(config)).into_response(),
        Err(e) => {
            error!("Failed to publish config '{}': {:#}", client_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error publishing config").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_support::{bundled_router, get, json_request, parse, send};
    use crate::storage::test_utils::sample_config;
    use shared::ConfigOrigin;

    #[tokio::test]
    async fn test_resolve_builtin_code() {
        let (router, _) = bundled_router().await;

        let (status, body) = send(&router, get("/api/resolve/wildroots2025")).await;
        assert_eq!(status, StatusCode::OK);
        let response: ResolveAccessCodeResponse = parse(&body);
        assert_eq!(response.input, "wildroots2025");
        assert_eq!(response.client_id, "wildroots-festival-2025");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code_passes_through() {
        let (router, _) = bundled_router().await;

        let (_, body) = send(&router, get("/api/resolve/some-client")).await;
        let response: ResolveAccessCodeResponse = parse(&body);
        assert_eq!(response.client_id, "some-client");
    }

    #[tokio::test]
    async fn test_get_config_does_not_touch_session() {
        let (router, state) = bundled_router().await;

        let (status, body) = send(&router, get("/api/configs/harbour-kitchen")).await;
        assert_eq!(status, StatusCode::OK);
        let response: LoadedConfigResponse = parse(&body);
        assert_eq!(response.origin, ConfigOrigin::Static);
        assert_eq!(response.config.client_id, "harbour-kitchen");

        assert!(state.config_store.load_cached().await.is_none());
    }

    #[tokio::test]
    async fn test_published_config_shadows_static_tier() {
        let (router, _) = bundled_router().await;
        let mut config = sample_config("harbour-kitchen", None);
        config.name = "Harbour Kitchen (remote)".to_string();

        let (status, _) = send(
            &router,
            json_request("PUT", "/api/configs/harbour-kitchen", &config),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&router, get("/api/configs/harbour-kitchen")).await;
        let response: LoadedConfigResponse = parse(&body);
        assert_eq!(response.origin, ConfigOrigin::Remote);
        assert_eq!(response.config.name, "Harbour Kitchen (remote)");
    }

    #[tokio::test]
    async fn test_publish_rejects_mismatched_id() {
        let (router, _) = bundled_router().await;
        let config = sample_config("other-client", None);

        let (status, _) = send(
            &router,
            json_request("PUT", "/api/configs/harbour-kitchen", &config),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

//! # REST API Interface Layer
//!
//! HTTP endpoints for the hub app. Each submodule owns one resource family:
//!
//! - [`config_apis`]: access code resolution and per-client config documents
//! - [`session_apis`]: the provider's current config and the derived app shell
//! - [`variation_apis`]: style bundles for the visual variations
//! - [`logging_apis`]: log forwarding from the web app
//!
//! Handlers log the request line at `info`, then map the domain result onto a
//! status code. Failures are logged at `error` before being returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::ConfigError;

pub mod config_apis;
pub mod logging_apis;
pub mod session_apis;
pub mod variation_apis;

pub use config_apis::*;
pub use logging_apis::*;
pub use session_apis::*;
pub use variation_apis::*;

/// Body returned when a session restore finds nothing cached
pub const NO_SESSION_MESSAGE: &str = "No cached configuration; enter an access code";

pub(crate) fn config_error_response(context: &str, err: ConfigError) -> Response {
    match err {
        ConfigError::NoCachedConfig => (StatusCode::NOT_FOUND, NO_SESSION_MESSAGE).into_response(),
        other => {
            error!("{}: {}", context, other);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{}: {}", context, other)).into_response()
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde::de::DeserializeOwned;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::domain::ProviderTimeouts;
    use crate::storage::test_utils::bundled_configs_dir;
    use crate::storage::{InMemoryDocumentStore, MemoryKeyValueStore, StaticConfigDirectory};
    use crate::{routes, AppState};

    /// API router over the bundled configs with in-memory remote and cache
    pub async fn bundled_router() -> (Router, AppState) {
        let state = AppState::assemble(
            StaticConfigDirectory::new(bundled_configs_dir()),
            Arc::new(InMemoryDocumentStore::new()),
            Arc::new(MemoryKeyValueStore::new()),
            ProviderTimeouts::default(),
        )
        .await;
        (routes(state.clone()), state)
    }

    pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    pub fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
        serde_json::from_slice(body).unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    pub fn json_request(method: &str, uri: &str, body: &impl serde::Serialize) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }
}

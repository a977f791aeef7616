//! # REST API for Client Log Forwarding
//!
//! The web app posts its own warnings here so renderer problems (unknown
//! sections, expired configs shown to users) land in the server log.

use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

#[derive(Debug, Deserialize, Serialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LogResponse {
    pub success: bool,
}

pub async fn log_message(Json(request): Json<LogRequest>) -> Result<Json<LogResponse>, StatusCode> {
    let component = request.component.as_deref().unwrap_or("web");

    match request.level.to_lowercase().as_str() {
        "debug" => debug!(component, "{}", request.message),
        "warn" | "warning" => warn!(component, "{}", request.message),
        "error" => error!(component, "{}", request.message),
        _ => info!(component, "{}", request.message),
    }

    Ok(Json(LogResponse { success: true }))
}

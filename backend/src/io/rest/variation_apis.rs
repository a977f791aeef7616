//! # REST API for Visual Variations

use axum::{
    extract::Path,
    response::{IntoResponse, Json},
};
use shared::{Variation, VariationStyles};
use tracing::info;

use crate::domain::{resolve_variation, variation_styles};

/// Every variation's style bundle, in declaration order
pub async fn list_variations() -> impl IntoResponse {
    info!("GET /api/variations");

    let styles: Vec<VariationStyles> = Variation::ALL.into_iter().map(variation_styles).collect();
    Json(styles)
}

/// Style bundle for `name`; unknown names get the modern bundle
pub async fn get_variation(Path(name): Path<String>) -> impl IntoResponse {
    info!("GET /api/variations/{}", name);

    Json(resolve_variation(Some(&name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_support::{bundled_router, get, parse, send};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_named_and_unknown_variations() {
        let (router, _) = bundled_router().await;

        let (status, body) = send(&router, get("/api/variations/vibrant")).await;
        assert_eq!(status, StatusCode::OK);
        let styles: VariationStyles = parse(&body);
        assert_eq!(styles.variation, Variation::Vibrant);

        let (_, body) = send(&router, get("/api/variations/neon")).await;
        let styles: VariationStyles = parse(&body);
        assert_eq!(styles.variation, Variation::Modern);
    }

    #[tokio::test]
    async fn test_list_variations() {
        let (router, _) = bundled_router().await;

        let (_, body) = send(&router, get("/api/variations")).await;
        let all: Vec<VariationStyles> = parse(&body);
        assert_eq!(all.len(), Variation::ALL.len());
    }
}

//! Renderer selection and the app-shell view model handed to the
//! presentation layer.

use shared::{AppShell, ClientConfig, Industry, Renderer};

use super::variation::resolve_variation;

/// Template family for a tenant's vertical
pub fn renderer_for(industry: Option<Industry>) -> Renderer {
    match industry {
        Some(Industry::Festival) => Renderer::Festival,
        Some(Industry::Healthcare) => Renderer::Healthcare,
        Some(Industry::Restaurant) => Renderer::Restaurant,
        Some(Industry::Property) => Renderer::Property,
        Some(Industry::Menu) => Renderer::Menu,
        None => Renderer::Generic,
    }
}

pub fn build_app_shell(config: &ClientConfig, is_expired: bool) -> AppShell {
    AppShell {
        client_id: config.client_id.clone(),
        name: config.name.clone(),
        renderer: renderer_for(config.industry),
        landing_tab: config.landing_tab().to_string(),
        tabs: config.navigation.clone(),
        theme: config.theme.clone(),
        features: config.features.clone(),
        styles: resolve_variation(config.variation.as_deref()),
        is_expired,
    }
}

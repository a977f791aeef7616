use anyhow::Result;
use hub_backend::settings::HubSettings;
use hub_backend::{create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = HubSettings::load()?;
    info!("Static configs: {:?}", settings.static_config_dir);
    info!("Config cache: {:?}", settings.cache_dir);

    let app_state = initialize_backend(&settings).await?;
    let app = create_router(&settings, app_state)?;

    let addr = settings.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

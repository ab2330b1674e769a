mod config;
mod handlers;
mod languages;
mod page;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let (config, loaded_path) = Config::load(&Config::candidate_paths())?;

    let default_filter = if config.system_config.debug {
        "translation_service=debug,tower_http=debug"
    } else {
        "translation_service=info,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match &loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file found, using defaults"),
    }

    let app_state = AppState::new(config.clone())?;

    info!("=== Translation Service ===");
    info!("Supported Languages: {}", app_state.languages.len());

    let app = routes::build_app(app_state);

    let host: std::net::IpAddr = config
        .system_config
        .host
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid host {}: {}", config.system_config.host, e))?;
    let addr = SocketAddr::from((host, config.system_config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use product_api::{app, state::AppState};
use product_core::{ConfigError, ProcessorConfig};
use tokio::net::TcpListener;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config_path = std::env::var("PRODUCT_PROCESSOR_CONFIG")
        .unwrap_or_else(|_| "product-processor.toml".to_string());

    let config = match ProcessorConfig::from_path(Path::new(&config_path)) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("config file '{config_path}' not found, running with an empty exclusion list");
            ProcessorConfig::default()
        }
        Err(err) => return Err(err.into()),
    };

    let exclusion_list = config.exclusion_list();
    info!(excluded_values = exclusion_list.len(), "exclusion list loaded");

    let state = Arc::new(AppState::new(exclusion_list));
    let router = app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);

    let listener = TcpListener::bind((std::net::Ipv4Addr::UNSPECIFIED, port)).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

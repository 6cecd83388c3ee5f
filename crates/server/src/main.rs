//! Portfolio dashboard server entry point.

use tracing::info;

use portfolio_dashboard::{build_engine, init_tracing, Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/dashboard.toml".to_string());

    let file_config = if std::path::Path::new(&config_path).exists() {
        Some(ServerConfig::from_file(&config_path)?)
    } else {
        None
    };
    let loaded_from_file = file_config.is_some();
    let config = file_config.unwrap_or_default().with_env_overrides()?;

    init_tracing(&config.log_format);

    info!("Portfolio Dashboard Server v{}", env!("CARGO_PKG_VERSION"));
    if loaded_from_file {
        info!("Loaded configuration from {}", config_path);
    } else {
        info!("Using default configuration");
    }

    let engine = build_engine(&config)?;

    let server = Server::new(config, engine);
    server.start().await?;

    Ok(())
}

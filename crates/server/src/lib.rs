//! # Portfolio Dashboard Server
//!
//! Read-only JSON API over the portfolio metrics engine.
//!
//! ## Endpoints
//!
//! - `GET /api/portfolio/holdings` (optional `search`, `sort`, `order`)
//! - `GET /api/portfolio/allocation`
//! - `GET /api/portfolio/performance`
//! - `GET /api/portfolio/summary`
//! - `GET /api/health`
//!
//! ## Usage
//!
//! ```ignore
//! use portfolio_dashboard::{Server, ServerConfig};
//!
//! let config = ServerConfig::default();
//! let engine = portfolio_dashboard::build_engine(&config)?;
//! Server::new(config, engine).start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_dashboard_core::errors::CoreError;
use portfolio_dashboard_core::store::holdings_store::HoldingsStore;
use portfolio_dashboard_core::MetricsEngine;

pub use config::ServerConfig;

/// The dashboard API server.
pub struct Server {
    config: ServerConfig,
    engine: Arc<MetricsEngine>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig, engine: Arc<MetricsEngine>) -> Self {
        Self { config, engine }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        routes::create_router(self.engine.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&self.config))
    }

    /// Bind the configured address.
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        let addr = SocketAddr::new(self.config.ip_addr()?, self.config.port);
        TcpListener::bind(addr).await
    }

    /// Serve on an already bound listener.
    pub async fn serve(&self, listener: TcpListener) -> Result<(), std::io::Error> {
        info!("Server running on {}", listener.local_addr()?);
        axum::serve(listener, self.router()).await
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }
}

/// Build the CORS layer; `*` in the origin list allows any origin.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = config
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the engine from configuration: the holdings file when set, the
/// built-in sample portfolio otherwise.
pub fn build_engine(config: &ServerConfig) -> Result<Arc<MetricsEngine>, CoreError> {
    let store = match config.holdings_file.as_deref() {
        Some(path) => {
            info!("Loading holdings from {}", path);
            HoldingsStore::from_file(path)?
        }
        None => {
            info!("Using built-in sample holdings");
            HoldingsStore::sample()
        }
    };
    info!(holdings = store.len(), "holdings store ready");
    Ok(Arc::new(MetricsEngine::with_store(store)))
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter; `format` selects `json` or human-readable text output.
pub fn init_tracing(format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,portfolio_dashboard=debug,portfolio_dashboard_core=debug"));
    let registry = tracing_subscriber::registry().with(filter);

    if format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

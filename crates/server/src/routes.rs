//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use portfolio_dashboard_core::MetricsEngine;

use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `engine` - The metrics engine serving every portfolio view
pub fn create_router(engine: Arc<MetricsEngine>) -> Router {
    let state = Arc::new(AppState { engine });

    Router::new()
        .route("/", get(handlers::root))
        // Health
        .route("/api/health", get(handlers::health))
        // Portfolio
        .route("/api/portfolio/holdings", get(handlers::get_holdings))
        .route("/api/portfolio/allocation", get(handlers::get_allocation))
        .route("/api/portfolio/performance", get(handlers::get_performance))
        .route("/api/portfolio/summary", get(handlers::get_summary))
        // State
        .with_state(state)
}

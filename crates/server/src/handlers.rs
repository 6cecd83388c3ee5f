//! Request handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use portfolio_dashboard_core::models::allocation::AllocationBreakdown;
use portfolio_dashboard_core::models::analytics::PortfolioSummary;
use portfolio_dashboard_core::models::holding::{HoldingSortField, SortDirection};
use portfolio_dashboard_core::MetricsEngine;

use crate::error::{ApiError, ApiResult};

/// Application state.
pub struct AppState {
    /// The metrics engine, shared read-only by every request
    pub engine: Arc<MetricsEngine>,
}

/// Liveness text served at `/`.
pub async fn root() -> &'static str {
    "API is running"
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    message: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Portfolio API is running".to_string(),
    })
}

/// Optional filtering and ordering for the holdings listing.
#[derive(Debug, Default, Deserialize)]
pub struct HoldingsQuery {
    /// Case-insensitive match on symbol, name or sector
    pub search: Option<String>,
    /// Column to sort by (e.g. `value`, `gainLossPercent`)
    pub sort: Option<String>,
    /// `asc` or `desc` (default `desc`)
    pub order: Option<String>,
}

impl HoldingsQuery {
    fn sort_order(&self) -> ApiResult<Option<(HoldingSortField, SortDirection)>> {
        let direction = match self.order.as_deref() {
            Some(order) => order.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };
        match self.sort.as_deref() {
            Some(field) => Ok(Some((field.parse::<HoldingSortField>()?, direction))),
            None => Ok(None),
        }
    }
}

/// List holdings. Without query parameters this is the store, unfiltered and
/// in store order.
pub async fn get_holdings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HoldingsQuery>,
) -> ApiResult<Response> {
    let sort = query.sort_order()?;
    let holdings = state
        .engine
        .query_holdings(query.search.as_deref(), sort);
    Ok(Json(holdings).into_response())
}

/// Allocation by sector and market cap.
pub async fn get_allocation(State(state): State<Arc<AppState>>) -> Json<AllocationBreakdown> {
    Json(state.engine.compute_allocation())
}

/// Static performance comparison.
pub async fn get_performance(State(state): State<Arc<AppState>>) -> Response {
    Json(state.engine.compute_performance_series()).into_response()
}

/// Portfolio summary.
pub async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state
        .engine
        .compute_summary()
        .map_err(ApiError::computation("Failed to fetch portfolio summary"))?;
    Ok(Json(summary))
}

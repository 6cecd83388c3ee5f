pub mod errors;
pub mod models;
pub mod rounding;
pub mod services;
pub mod store;

use models::{
    allocation::AllocationBreakdown,
    analytics::PortfolioSummary,
    holding::{Holding, HoldingSortField, SortDirection},
    performance::PerformanceSeries,
};
use services::{
    allocation_service::AllocationService, analytics_service::AnalyticsService,
    holdings_service::HoldingsService,
};
use store::{holdings_store::HoldingsStore, sample};
use tracing::debug;

use errors::CoreError;

/// Main entry point for the Portfolio Dashboard core library.
///
/// Owns an immutable holdings store and the static performance series, and
/// recomputes every derived view on each call. Nothing is cached and nothing
/// is mutated, so a single engine can be shared across threads behind an `Arc`.
#[must_use]
pub struct MetricsEngine {
    store: HoldingsStore,
    performance: PerformanceSeries,
    allocation_service: AllocationService,
    analytics_service: AnalyticsService,
    holdings_service: HoldingsService,
}

impl std::fmt::Debug for MetricsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsEngine")
            .field("holdings", &self.store.len())
            .field("timeline_points", &self.performance.timeline.len())
            .finish()
    }
}

impl MetricsEngine {
    /// Create an engine over the given store and performance series.
    pub fn new(store: HoldingsStore, performance: PerformanceSeries) -> Self {
        Self {
            store,
            performance,
            allocation_service: AllocationService::new(),
            analytics_service: AnalyticsService::new(),
            holdings_service: HoldingsService::new(),
        }
    }

    /// Create an engine over the given store with the built-in performance series.
    pub fn with_store(store: HoldingsStore) -> Self {
        Self::new(store, sample::sample_performance())
    }

    /// Engine over the built-in sample portfolio.
    pub fn sample() -> Self {
        Self::with_store(HoldingsStore::sample())
    }

    // ── Holdings ────────────────────────────────────────────────────

    /// All holdings, unfiltered, in store order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        self.store.list()
    }

    /// Get a single holding by symbol (case-insensitive).
    #[must_use]
    pub fn get_holding(&self, symbol: &str) -> Option<&Holding> {
        self.store.get(symbol)
    }

    /// Search holdings by symbol, name and sector (case-insensitive).
    #[must_use]
    pub fn search_holdings(&self, query: &str) -> Vec<&Holding> {
        self.holdings_service.search(self.store.list(), query)
    }

    /// All holdings ordered by one column.
    #[must_use]
    pub fn holdings_sorted(&self, field: HoldingSortField, direction: SortDirection) -> Vec<&Holding> {
        let mut holdings: Vec<&Holding> = self.store.list().iter().collect();
        self.holdings_service.sort(&mut holdings, field, direction);
        holdings
    }

    /// Search, then optionally sort. With neither, returns the store as-is.
    #[must_use]
    pub fn query_holdings(
        &self,
        search: Option<&str>,
        sort: Option<(HoldingSortField, SortDirection)>,
    ) -> Vec<&Holding> {
        let mut holdings = match search {
            Some(q) => self.holdings_service.search(self.store.list(), q),
            None => self.store.list().iter().collect(),
        };
        if let Some((field, direction)) = sort {
            self.holdings_service.sort(&mut holdings, field, direction);
        }
        debug!(
            search = search.unwrap_or(""),
            matched = holdings.len(),
            "queried holdings"
        );
        holdings
    }

    // ── Derived views ───────────────────────────────────────────────

    /// Allocation by sector and by market cap.
    #[must_use]
    pub fn compute_allocation(&self) -> AllocationBreakdown {
        self.allocation_service.compute_allocation(self.store.list())
    }

    /// Portfolio totals and best/worst performers.
    /// Fails with `CoreError::NoHoldings` when the store is empty.
    pub fn compute_summary(&self) -> Result<PortfolioSummary, CoreError> {
        self.analytics_service.get_portfolio_summary(self.store.list())
    }

    /// The static benchmark comparison, returned verbatim.
    #[must_use]
    pub fn compute_performance_series(&self) -> &PerformanceSeries {
        &self.performance
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export all holdings as a JSON string (derived fields included).
    pub fn export_holdings_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self.store.list())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize holdings: {e}")))
    }
}

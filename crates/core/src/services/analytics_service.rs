use tracing::debug;

use crate::errors::CoreError;
use crate::models::analytics::{PerformerRef, PortfolioSummary, RiskLevel};
use crate::models::holding::Holding;
use crate::rounding::{percent_of, round_to, round_whole};

/// Illustrative diversification rating reported with every summary.
pub const DIVERSIFICATION_SCORE: f64 = 8.2;

/// Illustrative risk level reported with every summary.
pub const RISK_LEVEL: RiskLevel = RiskLevel::Moderate;

/// Computes portfolio-wide aggregates: totals, gain/loss, best and worst
/// performers.
///
/// All figures come from the holdings' current and average prices.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Generate the portfolio summary.
    ///
    /// Computes:
    /// - Total current value and total invested (cost basis)
    /// - Gain/loss and % return over the cost basis
    /// - Top and worst performer by gain percentage
    ///
    /// Fails with `CoreError::NoHoldings` on an empty list.
    pub fn get_portfolio_summary(&self, holdings: &[Holding]) -> Result<PortfolioSummary, CoreError> {
        let (top, worst) = Self::performers(holdings).ok_or(CoreError::NoHoldings)?;

        let total_value: f64 = holdings.iter().map(Holding::value).sum();
        let total_invested: f64 = holdings.iter().map(Holding::invested).sum();
        let total_gain_loss = total_value - total_invested;
        let total_gain_loss_percent = percent_of(total_gain_loss, total_invested);

        debug!(
            holdings = holdings.len(),
            total_value,
            total_invested,
            top = %top.symbol,
            worst = %worst.symbol,
            "computed portfolio summary"
        );

        Ok(PortfolioSummary {
            total_value: round_whole(total_value),
            total_invested: round_whole(total_invested),
            total_gain_loss: round_whole(total_gain_loss),
            total_gain_loss_percent: round_to(total_gain_loss_percent, 2),
            top_performer: Self::performer_ref(top),
            worst_performer: Self::performer_ref(worst),
            diversification_score: DIVERSIFICATION_SCORE,
            risk_level: RISK_LEVEL,
        })
    }

    /// Single left-to-right scan for the max and min unrounded gain
    /// percentage. Strict comparisons keep the first holding on ties.
    fn performers(holdings: &[Holding]) -> Option<(&Holding, &Holding)> {
        let (first, rest) = holdings.split_first()?;
        let mut best = first;
        let mut worst = first;

        for holding in rest {
            let pct = holding.raw_gain_loss_percent();
            if pct > best.raw_gain_loss_percent() {
                best = holding;
            }
            if pct < worst.raw_gain_loss_percent() {
                worst = holding;
            }
        }

        Some((best, worst))
    }

    fn performer_ref(holding: &Holding) -> PerformerRef {
        PerformerRef {
            symbol: holding.symbol.clone(),
            name: holding.name.clone(),
            gain_percent: holding.gain_loss_percent(),
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

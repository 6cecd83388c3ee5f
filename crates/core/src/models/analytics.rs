use serde::{Deserialize, Serialize};

/// Portfolio-wide aggregates at the current prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of all holding values, rounded to the nearest unit
    pub total_value: i64,

    /// Sum of all cost bases, rounded to the nearest unit
    pub total_invested: i64,

    /// total_value - total_invested, rounded to the nearest unit
    pub total_gain_loss: i64,

    /// (total_gain_loss / total_invested) * 100, two decimal places
    pub total_gain_loss_percent: f64,

    /// Holding with the highest gain percentage
    pub top_performer: PerformerRef,

    /// Holding with the lowest gain percentage
    pub worst_performer: PerformerRef,

    /// Illustrative diversification rating (0–10)
    pub diversification_score: f64,

    /// Illustrative risk classification
    pub risk_level: RiskLevel,
}

/// Projection of a holding used to name the best/worst performers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerRef {
    pub symbol: String,
    pub name: String,
    pub gain_percent: f64,
}

/// Coarse risk classification shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A monthly observation comparing the portfolio to its benchmarks.
///
/// The core serves these as-is; the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Observation date (serialized as YYYY-MM-DD)
    pub date: NaiveDate,

    /// Portfolio value on this date
    pub portfolio: u64,

    /// NIFTY 50 index level on this date
    pub nifty50: u64,

    /// Gold price on this date
    pub gold: u64,
}

/// Trailing returns in percent over fixed windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailingReturns {
    #[serde(rename = "1month")]
    pub one_month: f64,

    #[serde(rename = "3months")]
    pub three_months: f64,

    #[serde(rename = "1year")]
    pub one_year: f64,
}

/// Trailing returns of one series (the portfolio or a benchmark).
#[derive(Debug, Clone, PartialEq)]
pub struct AssetReturns {
    pub asset: String,
    pub returns: TrailingReturns,
}

/// Returns table keyed by asset name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnsTable {
    pub rows: Vec<AssetReturns>,
}

impl ReturnsTable {
    pub fn get(&self, asset: &str) -> Option<&TrailingReturns> {
        self.rows
            .iter()
            .find(|r| r.asset == asset)
            .map(|r| &r.returns)
    }
}

impl Serialize for ReturnsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for row in &self.rows {
            map.serialize_entry(&row.asset, &row.returns)?;
        }
        map.end()
    }
}

/// Static performance comparison: timeline plus trailing returns.
/// Not derived from holdings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceSeries {
    pub timeline: Vec<TimelinePoint>,
    pub returns: ReturnsTable,
}

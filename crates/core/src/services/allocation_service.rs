use std::collections::HashMap;

use tracing::debug;

use crate::models::allocation::{AllocationBreakdown, AllocationBucket, CategoryAllocation};
use crate::models::holding::Holding;
use crate::rounding::{percent_of, round_to, round_whole};

/// Groups holdings by sector and by market cap.
///
/// Pure business logic: no I/O, no state.
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        Self
    }

    /// Compute both allocation dimensions over the same total value.
    ///
    /// An empty holdings list yields two empty groupings.
    pub fn compute_allocation(&self, holdings: &[Holding]) -> AllocationBreakdown {
        let total_value: f64 = holdings.iter().map(Holding::value).sum();

        let breakdown = AllocationBreakdown {
            by_sector: Self::group_by(holdings, total_value, |h| &h.sector),
            by_market_cap: Self::group_by(holdings, total_value, |h| &h.market_cap),
        };

        debug!(
            holdings = holdings.len(),
            total_value,
            sectors = breakdown.by_sector.len(),
            market_caps = breakdown.by_market_cap.len(),
            "computed allocation"
        );
        breakdown
    }

    /// Sum holding values per category, keeping first-occurrence order.
    fn group_by<'a, F>(holdings: &'a [Holding], total_value: f64, key: F) -> CategoryAllocation
    where
        F: Fn(&'a Holding) -> &'a String,
    {
        let mut totals: Vec<(&str, f64)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for holding in holdings {
            let category = key(holding).as_str();
            match index.get(category).copied() {
                Some(i) => totals[i].1 += holding.value(),
                None => {
                    index.insert(category, totals.len());
                    totals.push((category, holding.value()));
                }
            }
        }

        let buckets = totals
            .into_iter()
            .map(|(category, sum)| AllocationBucket {
                category: category.to_string(),
                value: round_whole(sum),
                percentage: round_to(percent_of(sum, total_value), 1),
            })
            .collect();

        CategoryAllocation { buckets }
    }
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new()
    }
}

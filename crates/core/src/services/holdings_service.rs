use std::cmp::Ordering;

use crate::models::holding::{Holding, HoldingSortField, SortDirection};

/// Search and ordering over a holdings listing.
pub struct HoldingsService;

impl HoldingsService {
    pub fn new() -> Self {
        Self
    }

    /// Holdings whose symbol, name or sector contains `query` (case-insensitive).
    /// Store order is kept. An empty query matches everything.
    pub fn search<'a>(&self, holdings: &'a [Holding], query: &str) -> Vec<&'a Holding> {
        let q = query.to_lowercase();
        holdings
            .iter()
            .filter(|h| {
                h.symbol.to_lowercase().contains(&q)
                    || h.name.to_lowercase().contains(&q)
                    || h.sector.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Stable sort by one column.
    pub fn sort(&self, holdings: &mut [&Holding], field: HoldingSortField, direction: SortDirection) {
        holdings.sort_by(|a, b| {
            let ord = Self::compare(a, b, field);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    fn compare(a: &Holding, b: &Holding, field: HoldingSortField) -> Ordering {
        let by_number = |x: f64, y: f64| x.partial_cmp(&y).unwrap_or(Ordering::Equal);
        match field {
            HoldingSortField::Symbol => a.symbol.cmp(&b.symbol),
            HoldingSortField::Name => a.name.cmp(&b.name),
            HoldingSortField::Value => by_number(a.value(), b.value()),
            HoldingSortField::GainLossPercent => {
                by_number(a.raw_gain_loss_percent(), b.raw_gain_loss_percent())
            }
            HoldingSortField::GainLoss => by_number(a.gain_loss(), b.gain_loss()),
            HoldingSortField::CurrentPrice => by_number(a.current_price, b.current_price),
        }
    }
}

impl Default for HoldingsService {
    fn default() -> Self {
        Self::new()
    }
}

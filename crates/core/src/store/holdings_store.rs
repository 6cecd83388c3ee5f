use std::collections::HashSet;

use tracing::warn;

use crate::errors::CoreError;
use crate::models::holding::Holding;

use super::sample;

/// The authoritative, immutable list of holdings.
///
/// Built once at startup and handed to the engine. There are no mutation
/// operations; reads cannot fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoldingsStore {
    holdings: Vec<Holding>,
}

impl HoldingsStore {
    /// Build a store from arbitrary holdings, validating every record and
    /// rejecting duplicate symbols. Order is preserved.
    pub fn new(holdings: Vec<Holding>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(holdings.len());
        for holding in &holdings {
            if let Err(e) = holding.validate() {
                warn!(symbol = %holding.symbol, error = %e, "rejected holding");
                return Err(e);
            }
            if !seen.insert(holding.symbol.as_str()) {
                warn!(symbol = %holding.symbol, "duplicate holding symbol");
                return Err(CoreError::DuplicateSymbol(holding.symbol.clone()));
            }
        }
        Ok(Self { holdings })
    }

    /// A store with no holdings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in sample portfolio (ten NSE large caps).
    pub fn sample() -> Self {
        Self {
            holdings: sample::sample_holdings(),
        }
    }

    /// Parse a JSON array of holdings. Derived fields in the input are ignored.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let holdings: Vec<Holding> = serde_json::from_str(json)?;
        Self::new(holdings)
    }

    /// Load a JSON holdings file from disk.
    pub fn from_file(path: &str) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CoreError::FileIO(format!("{path}: {e}")))?;
        Self::from_json(&json)
    }

    /// All holdings in store order.
    pub fn list(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Find a holding by symbol (case-insensitive).
    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        let upper = symbol.to_uppercase();
        self.holdings.iter().find(|h| h.symbol == upper)
    }
}

use serde::{Deserialize, Serialize, Serializer};

use crate::errors::CoreError;
use crate::rounding::{percent_of, round_to};

/// A single security position.
///
/// Only the primitive fields are stored. `value`, `gain_loss` and
/// `gain_loss_percent` are derived on every read, so they can never drift
/// from `quantity`, `avg_price` and `current_price`. Serialized output still
/// carries the derived fields; on input they are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Ticker symbol, uppercased (e.g., "TCS", "INFY")
    pub symbol: String,

    /// Display name (e.g., "Tata Consultancy Services")
    pub name: String,

    /// Units held
    pub quantity: u32,

    /// Average acquisition price per unit
    pub avg_price: f64,

    /// Current market price per unit
    pub current_price: f64,

    /// Sector tag (e.g., "Technology", "Banking")
    pub sector: String,

    /// Market-cap tag (e.g., "Large")
    pub market_cap: String,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        avg_price: f64,
        current_price: f64,
        sector: impl Into<String>,
        market_cap: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            quantity,
            avg_price,
            current_price,
            sector: sector.into(),
            market_cap: market_cap.into(),
        }
    }

    /// Market value: `quantity × current_price`.
    pub fn value(&self) -> f64 {
        f64::from(self.quantity) * self.current_price
    }

    /// Cost basis: `quantity × avg_price`.
    pub fn invested(&self) -> f64 {
        f64::from(self.quantity) * self.avg_price
    }

    /// Absolute gain/loss: `value - invested`.
    pub fn gain_loss(&self) -> f64 {
        self.value() - self.invested()
    }

    /// Percentage gain/loss relative to the cost basis, unrounded.
    pub fn raw_gain_loss_percent(&self) -> f64 {
        percent_of(self.gain_loss(), self.invested())
    }

    /// Percentage gain/loss relative to the cost basis, one decimal place.
    pub fn gain_loss_percent(&self) -> f64 {
        round_to(self.raw_gain_loss_percent(), 1)
    }

    /// Check the primitive fields. Symbol uniqueness is a store-level concern.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.symbol.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "symbol must not be empty".into(),
            ));
        }
        if self.symbol != self.symbol.to_uppercase() {
            return Err(CoreError::ValidationError(format!(
                "symbol '{}' must be uppercase",
                self.symbol
            )));
        }
        if self.name.trim().is_empty() {
            return Err(CoreError::ValidationError(format!(
                "{}: name must not be empty",
                self.symbol
            )));
        }
        if self.quantity == 0 {
            return Err(CoreError::ValidationError(format!(
                "{}: quantity must be positive",
                self.symbol
            )));
        }
        for (label, price) in [("avgPrice", self.avg_price), ("currentPrice", self.current_price)] {
            if !price.is_finite() || price <= 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "{}: {label} must be a positive finite number, got {price}",
                    self.symbol
                )));
            }
        }
        if self.sector.trim().is_empty() || self.market_cap.trim().is_empty() {
            return Err(CoreError::ValidationError(format!(
                "{}: sector and marketCap must not be empty",
                self.symbol
            )));
        }
        Ok(())
    }
}

/// Wire shape of a holding, including the derived fields.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HoldingRecord<'a> {
    symbol: &'a str,
    name: &'a str,
    quantity: u32,
    avg_price: f64,
    current_price: f64,
    sector: &'a str,
    market_cap: &'a str,
    value: f64,
    gain_loss: f64,
    gain_loss_percent: f64,
}

impl Serialize for Holding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        HoldingRecord {
            symbol: &self.symbol,
            name: &self.name,
            quantity: self.quantity,
            avg_price: self.avg_price,
            current_price: self.current_price,
            sector: &self.sector,
            market_cap: &self.market_cap,
            value: round_to(self.value(), 2),
            gain_loss: round_to(self.gain_loss(), 2),
            gain_loss_percent: self.gain_loss_percent(),
        }
        .serialize(serializer)
    }
}

/// Column a holdings listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldingSortField {
    Symbol,
    Name,
    Value,
    GainLossPercent,
    GainLoss,
    CurrentPrice,
}

impl std::str::FromStr for HoldingSortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "symbol" => Ok(Self::Symbol),
            "name" => Ok(Self::Name),
            "value" => Ok(Self::Value),
            "gainLossPercent" => Ok(Self::GainLossPercent),
            "gainLoss" => Ok(Self::GainLoss),
            "currentPrice" => Ok(Self::CurrentPrice),
            other => Err(CoreError::ValidationError(format!(
                "unknown sort field '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for HoldingSortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoldingSortField::Symbol => write!(f, "symbol"),
            HoldingSortField::Name => write!(f, "name"),
            HoldingSortField::Value => write!(f, "value"),
            HoldingSortField::GainLossPercent => write!(f, "gainLossPercent"),
            HoldingSortField::GainLoss => write!(f, "gainLoss"),
            HoldingSortField::CurrentPrice => write!(f, "currentPrice"),
        }
    }
}

/// Ascending or descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl std::str::FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(CoreError::ValidationError(format!(
                "unknown sort order '{s}', expected 'asc' or 'desc'"
            ))),
        }
    }
}

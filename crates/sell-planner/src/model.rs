//! Domain Models
//!
//! Core data types for planning sells across risk bands.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// A decile-scaled risk score in `0..=9`
///
/// Price models score valuation risk on a 0.0-0.9 scale; levels here are
/// that score times ten so they can key integer maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskLevel(u8);

impl RiskLevel {
    pub const MIN: RiskLevel = RiskLevel(0);
    pub const MAX: RiskLevel = RiskLevel(9);

    pub fn new(level: u8) -> Result<Self> {
        if level > Self::MAX.0 {
            return Err(PlannerError::InvalidConfiguration(format!(
                "risk level {level} is outside 0..=9"
            )));
        }
        Ok(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A sellable quantity of one asset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol (e.g., "BTC", "ETH")
    pub symbol: String,

    /// Maximum quantity you would sell, not necessarily how much you own
    pub quantity: Decimal,
}

/// Ordered set of holdings
///
/// Insertion order is preserved: the engine emits proceeds rows per asset in
/// exactly this order, so output stays deterministic run to run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AssetHoldings {
    entries: Vec<Holding>,
}

impl AssetHoldings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holding, builder style
    pub fn with(mut self, symbol: impl Into<String>, quantity: Decimal) -> Self {
        self.insert(symbol, quantity);
        self
    }

    /// Add or replace a holding, keeping first-insertion position
    pub fn insert(&mut self, symbol: impl Into<String>, quantity: Decimal) {
        let symbol = symbol.into().to_uppercase();
        if let Some(existing) = self.entries.iter_mut().find(|h| h.symbol == symbol) {
            existing.quantity = quantity;
        } else {
            self.entries.push(Holding { symbol, quantity });
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holding> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-asset price ladders keyed by risk level
///
/// Every asset's ladder must cover the same set of risk levels; `validate`
/// enforces that before a table is handed to strategies.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RiskPriceTable {
    ladders: HashMap<String, BTreeMap<RiskLevel, Decimal>>,
}

impl RiskPriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset's ladder from (level, price) pairs, builder style
    pub fn with_ladder(mut self, symbol: impl Into<String>, rungs: &[(u8, Decimal)]) -> Result<Self> {
        let mut ladder = BTreeMap::new();
        for &(level, price) in rungs {
            ladder.insert(RiskLevel::new(level)?, price);
        }
        self.ladders.insert(symbol.into().to_uppercase(), ladder);
        Ok(self)
    }

    /// Price of `symbol` at `level`, if the ladder has that rung
    pub fn price(&self, symbol: &str, level: RiskLevel) -> Option<Decimal> {
        self.ladders.get(symbol)?.get(&level).copied()
    }

    /// Check that every asset's ladder covers the same risk levels
    pub fn validate(&self) -> Result<()> {
        let mut expected: Option<(&String, BTreeSet<RiskLevel>)> = None;
        for (symbol, ladder) in &self.ladders {
            let levels: BTreeSet<RiskLevel> = ladder.keys().copied().collect();
            match &expected {
                None => expected = Some((symbol, levels)),
                Some((first, first_levels)) if *first_levels != levels => {
                    return Err(PlannerError::InvalidConfiguration(format!(
                        "price ladders for {first} and {symbol} cover different risk levels"
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ladders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ladders.is_empty()
    }
}

/// Band-entry price adjustment per risk level
///
/// A hand-wavy bullishness scalar: prices drift up before a level is hit, and
/// stop-loss exits land mid-band rather than at the threshold. Higher
/// multipliers favor more aggressive strategies.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RiskMultiplierTable {
    multipliers: BTreeMap<RiskLevel, Decimal>,
}

impl RiskMultiplierTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (level, multiplier) pairs
    pub fn from_pairs(pairs: &[(u8, Decimal)]) -> Result<Self> {
        let mut table = Self::new();
        for &(level, multiplier) in pairs {
            table.multipliers.insert(RiskLevel::new(level)?, multiplier);
        }
        Ok(table)
    }

    pub fn multiplier(&self, level: RiskLevel) -> Option<Decimal> {
        self.multipliers.get(&level).copied()
    }
}

/// One engine output record: proceeds from one asset in one risk band
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProceedsRow {
    /// Strategy that produced this row
    pub strategy: String,

    /// Asset sold
    pub symbol: String,

    /// Risk band entered
    pub risk: RiskLevel,

    /// Dollar amount realized selling this band's fraction
    pub proceeds: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn risk_level_bounds() {
        assert_eq!(RiskLevel::new(0).unwrap(), RiskLevel::MIN);
        assert_eq!(RiskLevel::new(9).unwrap(), RiskLevel::MAX);
        assert!(matches!(
            RiskLevel::new(10),
            Err(PlannerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn holdings_preserve_insertion_order() {
        let holdings = AssetHoldings::new()
            .with("btc", dec!(0.1))
            .with("ETH", dec!(5))
            .with("LINK", dec!(500));

        let symbols: Vec<_> = holdings.iter().map(|h| h.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BTC", "ETH", "LINK"]);
    }

    #[test]
    fn holdings_insert_replaces_in_place() {
        let mut holdings = AssetHoldings::new().with("BTC", dec!(0.1)).with("ETH", dec!(5));
        holdings.insert("BTC", dec!(0.2));

        assert_eq!(holdings.len(), 2);
        let first = holdings.iter().next().unwrap();
        assert_eq!(first.symbol, "BTC");
        assert_eq!(first.quantity, dec!(0.2));
    }

    #[test]
    fn price_table_validates_matching_levels() {
        let table = RiskPriceTable::new()
            .with_ladder("BTC", &[(5, dec!(47676)), (6, dec!(62318))])
            .unwrap()
            .with_ladder("ETH", &[(5, dec!(3502)), (6, dec!(5383))])
            .unwrap();
        assert!(table.validate().is_ok());
    }

    #[test]
    fn price_table_rejects_mismatched_levels() {
        let table = RiskPriceTable::new()
            .with_ladder("BTC", &[(5, dec!(47676)), (6, dec!(62318))])
            .unwrap()
            .with_ladder("ETH", &[(5, dec!(3502))])
            .unwrap();
        assert!(matches!(
            table.validate(),
            Err(PlannerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn price_lookup() {
        let table = RiskPriceTable::new()
            .with_ladder("BTC", &[(5, dec!(47676))])
            .unwrap();
        let level = RiskLevel::new(5).unwrap();

        assert_eq!(table.price("BTC", level), Some(dec!(47676)));
        assert_eq!(table.price("BTC", RiskLevel::new(6).unwrap()), None);
        assert_eq!(table.price("DOGE", level), None);
    }
}

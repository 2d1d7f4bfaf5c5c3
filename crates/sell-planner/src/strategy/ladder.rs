//! Risk-Band Sell Ladder
//!
//! Splits holdings into per-band sell fractions and prices each fraction at
//! the band's ladder price, adjusted by the band multiplier.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::model::{AssetHoldings, ProceedsRow, RiskLevel, RiskMultiplierTable, RiskPriceTable};

/// How holdings are split across a strategy's bands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightScheme {
    /// Equal fraction per band
    Uniform,

    /// Fractions grow linearly with the band index, selling more into strength
    Increasing,
}

impl fmt::Display for WeightScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Increasing => write!(f, "increasing"),
        }
    }
}

impl FromStr for WeightScheme {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            "increasing" => Ok(Self::Increasing),
            other => Err(PlannerError::InvalidConfiguration(format!(
                "unknown weighting scheme: {other}"
            ))),
        }
    }
}

/// A sell plan covering every risk band from a starting level up to 9
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SellStrategy {
    /// Display name (e.g., "Conservative DDCA")
    name: String,

    /// First risk level at which anything is sold
    start_risk: RiskLevel,

    /// Weighting scheme the weights were derived from
    scheme: WeightScheme,

    /// Per-band sell weights, one per covered level
    weights: Vec<u32>,

    /// Covered risk levels, `start_risk..=9`
    risk_levels: Vec<RiskLevel>,

    /// Sum of weights, the normalization denominator
    total_weight: u32,
}

impl SellStrategy {
    /// Build a strategy covering `10 - start_risk` bands
    ///
    /// Fails with `InvalidConfiguration` when `start_risk` is above 9, which
    /// would leave no bands to sell into.
    pub fn new(name: impl Into<String>, start_risk: u8, scheme: WeightScheme) -> Result<Self> {
        let start_risk = RiskLevel::new(start_risk).map_err(|_| {
            PlannerError::InvalidConfiguration(format!(
                "start risk {start_risk} leaves no sell bands"
            ))
        })?;

        let num_bands = usize::from(RiskLevel::MAX.get() - start_risk.get() + 1);
        let weights: Vec<u32> = match scheme {
            WeightScheme::Uniform => vec![1; num_bands],
            WeightScheme::Increasing => (1..=num_bands as u32).collect(),
        };
        let total_weight = weights.iter().sum();
        let risk_levels = (start_risk.get()..=RiskLevel::MAX.get())
            .map(RiskLevel::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: name.into(),
            start_risk,
            scheme,
            weights,
            risk_levels,
            total_weight,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_risk(&self) -> RiskLevel {
        self.start_risk
    }

    pub fn scheme(&self) -> WeightScheme {
        self.scheme
    }

    pub fn num_bands(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    pub fn risk_levels(&self) -> &[RiskLevel] {
        &self.risk_levels
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Compute proceeds per (asset, band) pair
    ///
    /// Pure: one row per holding per covered band, holdings in insertion
    /// order, bands in increasing risk order. The fraction of a holding sold
    /// in band `i` is `weights[i] / total_weight`, priced at the asset's
    /// ladder price for that level times the level's multiplier.
    pub fn run(
        &self,
        holdings: &AssetHoldings,
        prices: &RiskPriceTable,
        multipliers: &RiskMultiplierTable,
    ) -> Result<Vec<ProceedsRow>> {
        let total = Decimal::from(self.total_weight);
        let mut rows = Vec::with_capacity(holdings.len() * self.num_bands());

        for holding in holdings.iter() {
            for (&weight, &level) in self.weights.iter().zip(&self.risk_levels) {
                let price = prices.price(&holding.symbol, level).ok_or_else(|| {
                    PlannerError::MissingPriceLevel {
                        symbol: holding.symbol.clone(),
                        level,
                    }
                })?;
                let multiplier = multipliers
                    .multiplier(level)
                    .ok_or(PlannerError::MissingMultiplier(level))?;

                let fraction = Decimal::from(weight) / total;
                rows.push(ProceedsRow {
                    strategy: self.name.clone(),
                    symbol: holding.symbol.clone(),
                    risk: level,
                    proceeds: fraction * holding.quantity * price * multiplier,
                });
            }
        }

        tracing::debug!(
            strategy = %self.name,
            assets = holdings.len(),
            rows = rows.len(),
            "computed sell ladder"
        );
        Ok(rows)
    }
}

impl fmt::Display for SellStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  First Stop Loss: {}", self.start_risk)?;
        writeln!(f, "  Sell Fractions:")?;
        for (i, weight) in self.weights.iter().enumerate() {
            let tail = self.start_risk.get() + i as u8;
            writeln!(
                f,
                "    [{:^2} - {:>2}] : {} / {}",
                tail,
                tail + 1,
                weight,
                self.total_weight
            )?;
        }
        Ok(())
    }
}

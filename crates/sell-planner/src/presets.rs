//! Configuration Presets
//!
//! Hand-edited holdings, price ladders, and multipliers, plus the strategy
//! rosters to evaluate against them. Edit these values to fit your personal
//! situation; holdings are the maximum you would sell, not what you own.

use rust_decimal_macros::dec;

use crate::error::Result;
use crate::model::{AssetHoldings, RiskMultiplierTable, RiskPriceTable};
use crate::strategy::{SellStrategy, WeightScheme};

/// A ready-to-run bundle of configuration and strategies
#[derive(Clone, Debug)]
pub struct PlannerPreset {
    pub name: &'static str,
    pub holdings: AssetHoldings,
    pub prices: RiskPriceTable,
    pub multipliers: RiskMultiplierTable,
    pub strategies: Vec<SellStrategy>,
}

fn holdings() -> AssetHoldings {
    AssetHoldings::new()
        .with("BTC", dec!(0.1))
        .with("ETH", dec!(5))
        .with("LINK", dec!(500))
}

// Accounts for price drift before a level is hit and for stop-loss exits
// landing mid-band. Raise these to favor the aggressive strategies.
fn multipliers() -> Result<RiskMultiplierTable> {
    RiskMultiplierTable::from_pairs(&[
        (5, dec!(1.0)),
        (6, dec!(1.05)),
        (7, dec!(1.1)),
        (8, dec!(1.15)),
        (9, dec!(1.2)),
    ])
}

/// Uniform and increasing ladders side by side, four risk appetites each
pub fn sell_ladder() -> Result<PlannerPreset> {
    let prices = RiskPriceTable::new()
        .with_ladder(
            "BTC",
            &[
                (5, dec!(47676)),
                (6, dec!(62318)),
                (7, dec!(79383)),
                (8, dec!(98839)),
                (9, dec!(120659)),
            ],
        )?
        .with_ladder(
            "ETH",
            &[
                (5, dec!(3502)),
                (6, dec!(5383)),
                (7, dec!(7818)),
                (8, dec!(10863)),
                (9, dec!(14580)),
            ],
        )?
        .with_ladder(
            "LINK",
            &[
                (5, dec!(51.1)),
                (6, dec!(70.9)),
                (7, dec!(95.5)),
                (8, dec!(125.4)),
                (9, dec!(161.0)),
            ],
        )?;
    prices.validate()?;

    let strategies = vec![
        SellStrategy::new("Conservative Linear", 5, WeightScheme::Uniform)?,
        SellStrategy::new("Moderate Linear", 6, WeightScheme::Uniform)?,
        SellStrategy::new("Aggressive Linear", 7, WeightScheme::Uniform)?,
        SellStrategy::new("YOLO Linear", 8, WeightScheme::Uniform)?,
        SellStrategy::new("Conservative DDCA", 5, WeightScheme::Increasing)?,
        SellStrategy::new("Moderate DDCA", 6, WeightScheme::Increasing)?,
        SellStrategy::new("Aggressive DDCA", 7, WeightScheme::Increasing)?,
        SellStrategy::new("YOLO DDCA", 8, WeightScheme::Increasing)?,
    ];

    Ok(PlannerPreset {
        name: "sell-ladder",
        holdings: holdings(),
        prices,
        multipliers: multipliers()?,
        strategies,
    })
}

/// Increasing-only roster over a more cautious LINK ladder
pub fn dynamic_dca() -> Result<PlannerPreset> {
    let prices = RiskPriceTable::new()
        .with_ladder(
            "BTC",
            &[
                (5, dec!(47676)),
                (6, dec!(62318)),
                (7, dec!(79383)),
                (8, dec!(98839)),
                (9, dec!(120659)),
            ],
        )?
        .with_ladder(
            "ETH",
            &[
                (5, dec!(3502)),
                (6, dec!(5383)),
                (7, dec!(7818)),
                (8, dec!(10863)),
                (9, dec!(14580)),
            ],
        )?
        .with_ladder(
            "LINK",
            &[
                (5, dec!(35.8)),
                (6, dec!(51.1)),
                (7, dec!(70.9)),
                (8, dec!(95.5)),
                (9, dec!(125.4)),
            ],
        )?;
    prices.validate()?;

    let strategies = vec![
        SellStrategy::new("Conservative", 5, WeightScheme::Increasing)?,
        SellStrategy::new("Moderate", 6, WeightScheme::Increasing)?,
        SellStrategy::new("Aggressive", 7, WeightScheme::Increasing)?,
        SellStrategy::new("YOLO", 8, WeightScheme::Increasing)?,
    ];

    Ok(PlannerPreset {
        name: "dynamic-dca",
        holdings: holdings(),
        prices,
        multipliers: multipliers()?,
        strategies,
    })
}

/// All presets, in display order
pub fn all() -> Result<Vec<PlannerPreset>> {
    Ok(vec![sell_ladder()?, dynamic_dca()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report;
    use rust_decimal::Decimal;

    #[test]
    fn presets_construct_and_validate() {
        for preset in all().unwrap() {
            assert!(preset.prices.validate().is_ok());
            assert_eq!(preset.holdings.len(), 3);
            assert!(!preset.strategies.is_empty());
        }
    }

    #[test]
    fn every_preset_strategy_runs() {
        for preset in all().unwrap() {
            for strategy in &preset.strategies {
                let rows = strategy
                    .run(&preset.holdings, &preset.prices, &preset.multipliers)
                    .unwrap();
                assert_eq!(rows.len(), preset.holdings.len() * strategy.num_bands());
                assert!(rows.iter().all(|r| r.proceeds > Decimal::ZERO));
            }
        }
    }

    #[test]
    fn sell_ladder_has_both_schemes() {
        let preset = sell_ladder().unwrap();
        assert_eq!(preset.strategies.len(), 8);
        let uniform = preset
            .strategies
            .iter()
            .filter(|s| s.scheme() == WeightScheme::Uniform)
            .count();
        assert_eq!(uniform, 4);
    }

    #[test]
    fn dynamic_dca_is_increasing_only() {
        let preset = dynamic_dca().unwrap();
        assert_eq!(preset.strategies.len(), 4);
        assert!(preset
            .strategies
            .iter()
            .all(|s| s.scheme() == WeightScheme::Increasing));
    }

    #[test]
    fn aggregated_preset_output_covers_every_band() {
        let preset = dynamic_dca().unwrap();
        let strategy = &preset.strategies[0];
        let rows = strategy
            .run(&preset.holdings, &preset.prices, &preset.multipliers)
            .unwrap();

        let agg = report::aggregate_by_risk(&rows);
        assert_eq!(agg.len(), strategy.num_bands());
        let levels: Vec<u8> = agg.iter().map(|a| a.risk.get()).collect();
        assert_eq!(levels, vec![5, 6, 7, 8, 9]);
    }
}

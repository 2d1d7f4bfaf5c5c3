//! # sell-planner
//!
//! Plans proceeds from selling crypto holdings across risk bands, using
//! hand-edited price ladders instead of live feeds.
//!
//! ## How it works
//!
//! A [`SellStrategy`] covers every risk band from its starting level up to 9
//! and assigns each band a sell weight - equal weights, or weights that grow
//! into strength. Running it against holdings, a price ladder, and a band
//! multiplier table yields one proceeds row per (asset, band) pair:
//!
//! ```text
//! proceeds = (weight / total_weight) * quantity * ladder_price * multiplier
//! ```
//!
//! The report layer then sums rows across assets and draws them:
//!
//! ```text
//! Conservative DDCA
//!   risk 5  ▒▒▒▒▒▒                                    $1,163
//!   risk 6  ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒                         $3,342
//!   risk 7  ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓         $6,478
//!   risk 9  ████████████████████████████████████████  $17,424
//! ```
//!
//! ## Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use sell_planner::{
//!     AssetHoldings, RiskMultiplierTable, RiskPriceTable, SellStrategy, WeightScheme,
//! };
//!
//! let holdings = AssetHoldings::new().with("BTC", dec!(0.1));
//! let prices = RiskPriceTable::new()
//!     .with_ladder("BTC", &[(8, dec!(98839)), (9, dec!(120659))])?;
//! let multipliers = RiskMultiplierTable::from_pairs(&[(8, dec!(1.15)), (9, dec!(1.2))])?;
//!
//! let yolo = SellStrategy::new("YOLO", 8, WeightScheme::Increasing)?;
//! let rows = yolo.run(&holdings, &prices, &multipliers)?;
//! assert_eq!(rows.len(), 2);
//! # Ok::<(), sell_planner::PlannerError>(())
//! ```

pub mod error;
pub mod model;
pub mod presets;
pub mod report;
pub mod strategy;

pub use error::{PlannerError, Result};
pub use model::{
    AssetHoldings, Holding, ProceedsRow, RiskLevel, RiskMultiplierTable, RiskPriceTable,
};
pub use presets::PlannerPreset;
pub use report::AggregateRow;
pub use strategy::{SellStrategy, WeightScheme};

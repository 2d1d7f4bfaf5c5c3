//! Sell Strategies
//!
//! Allocation of holdings across risk bands.

mod ladder;

pub use ladder::{SellStrategy, WeightScheme};

//! Error Types for the Sell Planner

use thiserror::Error;

use crate::model::RiskLevel;

pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("no price for {symbol} at risk level {level}")]
    MissingPriceLevel { symbol: String, level: RiskLevel },

    #[error("no multiplier at risk level {0}")]
    MissingMultiplier(RiskLevel),
}

use thiserror::Error;

use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};

/// Reasons an input form is rejected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PayoutError {
    #[error("player count {0} is outside {min}..={max}", min = MIN_PLAYERS, max = MAX_PLAYERS)]
    PlayerCountOutOfRange(u32),

    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: &'static str },

    #[error("at least one payout weight is required")]
    EmptyWeights,

    #[error("weight for position {position} must be a non-negative number, got {value}")]
    InvalidWeight { position: usize, value: f64 },

    #[error("could not read weight {entry:?}")]
    UnparsableWeight { entry: String },
}

pub type Result<T> = std::result::Result<T, PayoutError>;

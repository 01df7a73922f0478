//! Payout Core - poker tournament prize distribution.
//!
//! Splits the buy-in pool across the top finishers using an editable
//! weight table, and totals the food and bounty side pools. Python
//! bindings are available behind the `python` feature.

pub mod calculator;
pub mod config;
pub mod constants;
pub mod error;
pub mod payout;
pub mod report;
pub mod tournament;
pub mod weights;

#[cfg(feature = "python")]
mod python;

pub use calculator::Calculator;
pub use config::{load as load_config, ConfigError, PayoutConfig};
pub use constants::{DEFAULT_WEIGHTS, MAX_PLAYERS, MIN_PLAYERS};
pub use error::PayoutError;
pub use payout::{compute_payouts, paid_positions, payout_table, round_currency, Payout, PayoutResult};
pub use report::{ordinal, render_report, render_table};
pub use tournament::TournamentInput;
pub use weights::PayoutWeights;

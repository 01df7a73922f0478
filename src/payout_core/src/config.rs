use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::constants::{
    default_weights, DEFAULT_BOUNTY_PER_PLAYER, DEFAULT_BUY_IN, DEFAULT_FOOD_PER_PLAYER,
    DEFAULT_PLAYERS,
};
use crate::error::PayoutError;
use crate::tournament::TournamentInput;
use crate::weights::PayoutWeights;

/// Environment variable naming a TOML config file
pub const CONFIG_ENV: &str = "PAYOUT_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoutConfig {
    pub players: u32,
    pub buy_in: f64,
    pub food_per_player: f64,
    pub bounty_per_player: f64,
    pub weights: Vec<f64>,
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            buy_in: DEFAULT_BUY_IN,
            food_per_player: DEFAULT_FOOD_PER_PLAYER,
            bounty_per_player: DEFAULT_BOUNTY_PER_PLAYER,
            weights: default_weights(),
        }
    }
}

impl PayoutConfig {
    /// Validate and convert into a calculator input.
    pub fn into_input(self) -> Result<TournamentInput, ConfigError> {
        let weights = PayoutWeights::new(self.weights)?;
        let input = TournamentInput::new(
            self.players,
            self.buy_in,
            self.food_per_player,
            self.bounty_per_player,
            weights,
        );
        input.validate()?;
        Ok(input)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("invalid configuration: {0}")]
    Payout(#[from] PayoutError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    players: Option<u32>,
    buy_in: Option<f64>,
    food_per_player: Option<f64>,
    bounty_per_player: Option<f64>,
    weights: Option<Vec<f64>>,
}

/// Load configuration: defaults, then the TOML file (explicit `path`, else
/// `PAYOUT_CONFIG`), then `PAYOUT_*` environment overrides.
pub fn load(path: Option<&Path>) -> Result<PayoutConfig, ConfigError> {
    load_from(path, |key| std::env::var(key).ok())
}

/// Same as [`load`] with an injectable environment lookup.
pub fn load_from<F>(path: Option<&Path>, env: F) -> Result<PayoutConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = PayoutConfig::default();

    let file_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => env(CONFIG_ENV).filter(|s| !s.is_empty()).map(Into::into),
    };
    if let Some(file_path) = file_path {
        let s = fs::read_to_string(&file_path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
        }
        if let Some(v) = f.buy_in {
            cfg.buy_in = v;
        }
        if let Some(v) = f.food_per_player {
            cfg.food_per_player = v;
        }
        if let Some(v) = f.bounty_per_player {
            cfg.bounty_per_player = v;
        }
        if let Some(v) = f.weights {
            cfg.weights = v;
        }
    }

    if let Some(v) = non_empty(&env, "PAYOUT_PLAYERS") {
        cfg.players = v
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("invalid PAYOUT_PLAYERS: {v}")))?;
    }
    if let Some(v) = non_empty(&env, "PAYOUT_BUY_IN") {
        cfg.buy_in = parse_amount("PAYOUT_BUY_IN", &v)?;
    }
    if let Some(v) = non_empty(&env, "PAYOUT_FOOD") {
        cfg.food_per_player = parse_amount("PAYOUT_FOOD", &v)?;
    }
    if let Some(v) = non_empty(&env, "PAYOUT_BOUNTY") {
        cfg.bounty_per_player = parse_amount("PAYOUT_BOUNTY", &v)?;
    }
    if let Some(v) = non_empty(&env, "PAYOUT_WEIGHTS") {
        cfg.weights = PayoutWeights::parse(&v)?.into();
    }

    validate(&cfg)?;
    Ok(cfg)
}

fn non_empty<F>(env: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env(key).filter(|s| !s.trim().is_empty())
}

fn parse_amount(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("invalid {key}: {value}")))
}

fn validate(cfg: &PayoutConfig) -> Result<(), ConfigError> {
    cfg.clone().into_input().map(|_| ())
}

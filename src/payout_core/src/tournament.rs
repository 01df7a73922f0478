use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BOUNTY_PER_PLAYER, DEFAULT_BUY_IN, DEFAULT_FOOD_PER_PLAYER, DEFAULT_PLAYERS,
    MAX_PLAYERS, MIN_PLAYERS,
};
use crate::error::{PayoutError, Result};
use crate::payout::{compute_payouts, PayoutResult};
use crate::weights::PayoutWeights;

/// Everything entered on the input form for one tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentInput {
    /// Number of entrants
    pub player_count: u32,

    /// Buy-in per player, paid out by position
    pub buy_in: f64,

    /// Food contribution per player
    pub food_per_player: f64,

    /// Bounty contribution per player
    pub bounty_per_player: f64,

    /// Payout weight table
    pub weights: PayoutWeights,
}

impl TournamentInput {
    pub fn new(
        player_count: u32,
        buy_in: f64,
        food_per_player: f64,
        bounty_per_player: f64,
        weights: PayoutWeights,
    ) -> Self {
        TournamentInput {
            player_count,
            buy_in,
            food_per_player,
            bounty_per_player,
            weights,
        }
    }

    /// Check the player count and money fields.
    ///
    /// The weight table is validated when it is built, so only the scalar
    /// fields are checked here.
    pub fn validate(&self) -> Result<()> {
        validate_player_count(self.player_count)?;
        validate_amount("buy-in", self.buy_in)?;
        validate_amount("food per player", self.food_per_player)?;
        validate_amount("bounty per player", self.bounty_per_player)?;
        Ok(())
    }

    /// Compute pools and per-position payouts for this input.
    pub fn compute(&self) -> Result<PayoutResult> {
        compute_payouts(
            self.player_count,
            self.buy_in,
            self.food_per_player,
            self.bounty_per_player,
            self.weights.as_slice(),
        )
    }

    /// Create a modified copy with a different field size
    pub fn with_player_count(&self, player_count: u32) -> Self {
        let mut new_input = self.clone();
        new_input.player_count = player_count;
        new_input
    }

    /// Create a modified copy with a different weight table
    pub fn with_weights(&self, weights: PayoutWeights) -> Self {
        let mut new_input = self.clone();
        new_input.weights = weights;
        new_input
    }
}

impl Default for TournamentInput {
    fn default() -> Self {
        TournamentInput {
            player_count: DEFAULT_PLAYERS,
            buy_in: DEFAULT_BUY_IN,
            food_per_player: DEFAULT_FOOD_PER_PLAYER,
            bounty_per_player: DEFAULT_BOUNTY_PER_PLAYER,
            weights: PayoutWeights::default(),
        }
    }
}

pub fn validate_player_count(player_count: u32) -> Result<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(PayoutError::PlayerCountOutOfRange(player_count))
    }
}

pub fn validate_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PayoutError::NonFiniteAmount { field });
    }
    if value < 0.0 {
        return Err(PayoutError::NegativeAmount { field, value });
    }
    Ok(())
}

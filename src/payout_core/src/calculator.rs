use tracing::{debug, warn};

use crate::error::Result;
use crate::payout::{paid_positions, PayoutResult};
use crate::tournament::TournamentInput;
use crate::weights::PayoutWeights;

/// Live input form that recomputes on every change.
///
/// A rejected change is rolled back and the last valid result stays
/// available, so a front end never has to clear its display on bad input.
#[derive(Clone, Debug)]
pub struct Calculator {
    input: TournamentInput,
    result: PayoutResult,
}

impl Calculator {
    /// Start from a valid input.
    pub fn new(input: TournamentInput) -> Result<Self> {
        let result = input.compute()?;
        Ok(Calculator { input, result })
    }

    pub fn input(&self) -> &TournamentInput {
        &self.input
    }

    /// Last successfully computed result.
    pub fn result(&self) -> &PayoutResult {
        &self.result
    }

    /// How many weights will be used at the current field size.
    pub fn positions_hint(&self) -> usize {
        paid_positions(self.input.player_count, self.input.weights.len())
    }

    pub fn set_player_count(&mut self, player_count: u32) -> Result<&PayoutResult> {
        self.apply(|input| input.player_count = player_count)
    }

    pub fn set_buy_in(&mut self, buy_in: f64) -> Result<&PayoutResult> {
        self.apply(|input| input.buy_in = buy_in)
    }

    pub fn set_food(&mut self, food_per_player: f64) -> Result<&PayoutResult> {
        self.apply(|input| input.food_per_player = food_per_player)
    }

    pub fn set_bounty(&mut self, bounty_per_player: f64) -> Result<&PayoutResult> {
        self.apply(|input| input.bounty_per_player = bounty_per_player)
    }

    pub fn set_weights(&mut self, weights: PayoutWeights) -> Result<&PayoutResult> {
        self.apply(|input| input.weights = weights)
    }

    /// Replace the weight table from comma-separated text.
    pub fn set_weights_text(&mut self, text: &str) -> Result<&PayoutResult> {
        match PayoutWeights::parse(text) {
            Ok(weights) => self.set_weights(weights),
            Err(e) => {
                warn!(error = %e, "ignoring weight table edit");
                Err(e)
            }
        }
    }

    pub fn reset_weights(&mut self) -> Result<&PayoutResult> {
        self.apply(|input| input.weights.reset())
    }

    fn apply<F>(&mut self, edit: F) -> Result<&PayoutResult>
    where
        F: FnOnce(&mut TournamentInput),
    {
        let mut candidate = self.input.clone();
        edit(&mut candidate);

        match candidate.compute() {
            Ok(result) => {
                debug!(player_count = candidate.player_count, "input accepted");
                self.input = candidate;
                self.result = result;
                Ok(&self.result)
            }
            Err(e) => {
                warn!(error = %e, "ignoring invalid input, keeping previous result");
                Err(e)
            }
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        let input = TournamentInput::default();
        let result = input.compute().expect("default input is valid");
        Calculator { input, result }
    }
}

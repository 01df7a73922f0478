use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{MAX_PLAYERS, MIN_PLAYERS, PLAYERS_PER_PAID_POSITION};
use crate::error::{PayoutError, Result};
use crate::tournament::{validate_amount, validate_player_count};
use crate::weights::validate_weights;

/// Prize for a single finishing position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    /// 1-based finishing position
    pub position: usize,

    /// Amount in currency units, rounded to cents
    pub amount: f64,
}

/// Pool totals and per-position prizes for one tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoutResult {
    pub player_count: u32,
    pub total_buy_in_pool: f64,
    pub total_food_pool: f64,
    pub total_bounty_pool: f64,
    pub paid_positions: usize,
    pub payouts: Vec<Payout>,
}

impl PayoutResult {
    /// Everything collected at the door: buy-ins, food and bounties.
    pub fn total_collected(&self) -> f64 {
        round_currency(self.total_buy_in_pool + self.total_food_pool + self.total_bounty_pool)
    }

    /// Sum of the rounded position payouts.
    pub fn total_paid(&self) -> f64 {
        round_currency(self.payouts.iter().map(|p| p.amount).sum())
    }

    /// Rounding residual left in the buy-in pool. Usually zero, may be off
    /// by a few cents.
    pub fn remaining(&self) -> f64 {
        round_currency(self.total_buy_in_pool - self.total_paid())
    }

    /// Bounty collected per entrant, i.e. the value of one knockout.
    pub fn bounty_per_player(&self) -> f64 {
        if self.player_count == 0 {
            return 0.0;
        }
        round_currency(self.total_bounty_pool / self.player_count as f64)
    }
}

/// Number of places paid: one per three entrants rounded up, capped by the
/// length of the weight table.
pub fn paid_positions(player_count: u32, weight_count: usize) -> usize {
    let by_field = player_count.div_ceil(PLAYERS_PER_PAID_POSITION) as usize;
    by_field.min(weight_count)
}

/// Round to cents, half away from zero.
///
/// Amounts too large to scale to cents are returned unchanged; at that
/// magnitude an f64 cannot hold a cent anyway.
pub fn round_currency(amount: f64) -> f64 {
    let cents = amount * 100.0;
    if !cents.is_finite() {
        return amount;
    }
    cents.round() / 100.0
}

/// Compute pool totals and the per-position split of the buy-in pool.
///
/// Each paid position receives `weight / sum(used weights)` of the buy-in
/// pool. If every used weight is zero the pool is split evenly. Amounts are
/// rounded to cents and the rounding residual is left in the pool.
///
/// Pool totals that do not fit in an f64 are rejected as
/// [`PayoutError::NonFiniteAmount`].
///
/// # Arguments
/// * `player_count` - Number of entrants, 3 to 30
/// * `buy_in` - Buy-in per player
/// * `food_per_player` - Food contribution per player
/// * `bounty_per_player` - Bounty contribution per player
/// * `weights` - Payout weight table, first entry is first place
pub fn compute_payouts(
    player_count: u32,
    buy_in: f64,
    food_per_player: f64,
    bounty_per_player: f64,
    weights: &[f64],
) -> Result<PayoutResult> {
    validate_player_count(player_count)?;
    validate_amount("buy-in", buy_in)?;
    validate_amount("food per player", food_per_player)?;
    validate_amount("bounty per player", bounty_per_player)?;
    validate_weights(weights)?;

    let players = player_count as f64;
    let total_buy_in_pool = round_currency(players * buy_in);
    let total_food_pool = round_currency(players * food_per_player);
    let total_bounty_pool = round_currency(players * bounty_per_player);
    ensure_finite("buy-in pool", total_buy_in_pool)?;
    ensure_finite("food pool", total_food_pool)?;
    ensure_finite("bounty pool", total_bounty_pool)?;
    ensure_finite(
        "total collected",
        total_buy_in_pool + total_food_pool + total_bounty_pool,
    )?;

    let paid = paid_positions(player_count, weights.len());
    let used = &weights[..paid];

    // Normalise by the largest weight so the sum stays finite for any
    // table of finite weights.
    let max_weight = used.iter().copied().fold(0.0, f64::max);
    let total_weight: f64 = if max_weight > 0.0 {
        used.iter().map(|w| w / max_weight).sum()
    } else {
        0.0
    };

    let payouts: Vec<Payout> = used
        .iter()
        .enumerate()
        .map(|(i, &weight)| {
            let share = if total_weight > 0.0 {
                (weight / max_weight) / total_weight
            } else {
                1.0 / paid as f64
            };
            Payout {
                position: i + 1,
                amount: round_currency(share * total_buy_in_pool),
            }
        })
        .collect();
    ensure_finite("buy-in pool", payouts.iter().map(|p| p.amount).sum())?;

    debug!(
        player_count,
        paid_positions = paid,
        total_buy_in_pool,
        even_split = total_weight <= 0.0,
        "computed payouts"
    );

    Ok(PayoutResult {
        player_count,
        total_buy_in_pool,
        total_food_pool,
        total_bounty_pool,
        paid_positions: paid,
        payouts,
    })
}

fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PayoutError::NonFiniteAmount { field })
    }
}

/// Compute payouts for every supported field size.
///
/// Uses parallel processing; results are ordered by player count.
pub fn payout_table(
    buy_in: f64,
    food_per_player: f64,
    bounty_per_player: f64,
    weights: &[f64],
) -> Result<Vec<PayoutResult>> {
    (MIN_PLAYERS..=MAX_PLAYERS)
        .into_par_iter()
        .map(|players| compute_payouts(players, buy_in, food_per_player, bounty_per_player, weights))
        .collect()
}

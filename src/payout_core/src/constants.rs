/// Default payout weights for the top 9 finishing positions
pub const DEFAULT_WEIGHTS: [f64; 9] = [35.0, 20.0, 15.0, 10.0, 8.0, 6.0, 3.0, 2.0, 1.0];

/// Smallest supported field
pub const MIN_PLAYERS: u32 = 3;

/// Largest supported field
pub const MAX_PLAYERS: u32 = 30;

/// One paid position for every this many entrants (rounded up)
pub const PLAYERS_PER_PAID_POSITION: u32 = 3;

/// Default field size
pub const DEFAULT_PLAYERS: u32 = 9;

/// Default buy-in per player
pub const DEFAULT_BUY_IN: f64 = 20.0;

/// Default food contribution per player
pub const DEFAULT_FOOD_PER_PLAYER: f64 = 5.0;

/// Default bounty contribution per player
pub const DEFAULT_BOUNTY_PER_PLAYER: f64 = 2.0;

/// Get the default weights as an owned table
pub fn default_weights() -> Vec<f64> {
    DEFAULT_WEIGHTS.to_vec()
}

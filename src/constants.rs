//! Default simulation parameters.

/// Players in the population.
pub const NUM_PLAYERS: u32 = 1000;

/// Rounds every player plays.
pub const ROUNDS_PER_PLAYER: u32 = 52;

/// Balance each player starts with (the buy-in).
pub const STARTING_BALANCE: f64 = 10_000.0;

/// Amount wagered per round, capped at the player's balance.
pub const BET_SIZE: f64 = 10_000.0;

pub const WIN_PROBABILITY: f64 = 0.5;
pub const WIN_MULTIPLIER: f64 = 1.5;
pub const LOSS_MULTIPLIER: f64 = 0.6;

/// Balances below this are treated as ruin and snapped to zero.
pub const RUIN_THRESHOLD: f64 = 0.01;

//! Simulation configuration.

use crate::constants::*;
use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Odds and payouts of the game being played. Constant for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Chance a single round is won, in [0, 1]
    pub win_probability: f64,

    /// Multiplier applied to the wager on a win
    pub win_multiplier: f64,

    /// Multiplier applied to the wager on a loss
    pub loss_multiplier: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_probability: WIN_PROBABILITY,
            win_multiplier: WIN_MULTIPLIER,
            loss_multiplier: LOSS_MULTIPLIER,
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of independent players
    pub num_players: u32,

    /// Rounds each player plays
    pub rounds_per_player: u32,

    /// Balance every player starts with
    pub starting_balance: f64,

    /// Wager per round (players with less bet everything they have)
    pub bet_size: f64,

    pub game: GameConfig,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_players: NUM_PLAYERS,
            rounds_per_player: ROUNDS_PER_PLAYER,
            starting_balance: STARTING_BALANCE,
            bet_size: BET_SIZE,
            game: GameConfig::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Quick config for a smaller population
    pub fn quick() -> Self {
        Self {
            num_players: 100,
            ..Default::default()
        }
    }

    /// Fair double-or-nothing game
    pub fn coin_flip(num_players: u32, rounds_per_player: u32) -> Self {
        Self {
            num_players,
            rounds_per_player,
            game: GameConfig {
                win_probability: 0.5,
                win_multiplier: 2.0,
                loss_multiplier: 0.0,
            },
            ..Default::default()
        }
    }

    /// Check every numeric parameter is within its documented range.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_players == 0 {
            return Err(invalid("num_players", "must be greater than 0"));
        }
        non_negative("starting_balance", self.starting_balance)?;
        non_negative("bet_size", self.bet_size)?;
        non_negative("win_multiplier", self.game.win_multiplier)?;
        non_negative("loss_multiplier", self.game.loss_multiplier)?;

        let p = self.game.win_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(invalid("win_probability", "must be within [0, 1]"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> SimError {
    SimError::InvalidConfig { field, reason }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), SimError> {
    if !value.is_finite() {
        return Err(invalid(field, "must be finite"));
    }
    if value < 0.0 {
        return Err(invalid(field, "must not be negative"));
    }
    Ok(())
}

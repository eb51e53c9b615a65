//! Gambler's ruin simulator for Monte Carlo analysis.
//!
//! A population of independent players each start with the same balance and
//! repeatedly wager on a game with fixed odds and payouts. After every round
//! has been played the final balances are summarized:
//! - Min, max, mean and median holdings
//! - How many players ended ahead of their buy-in
//! - How many were ruined (balance reached zero, which is absorbing)

mod config;
mod game;
mod player;
mod report;
mod runner;

pub use config::{GameConfig, SimConfig};
pub use game::{Game, RoundOutcome};
pub use player::Gambler;
pub use report::SimReport;
pub use runner::{play_tournament, run_seeded, run_simulation};

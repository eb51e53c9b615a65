//! Gambler's Ruin - Monte Carlo betting simulation library
//!
//! Simulates a population of independent players repeatedly betting on a
//! fixed-edge game and summarizes how their balances disperse.

pub mod constants;
pub mod error;
pub mod simulator;

pub use error::SimError;

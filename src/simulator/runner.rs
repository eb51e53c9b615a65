//! Main simulation runner.
//!
//! Every round, each player in turn plays one game against the shared random
//! source. Rounds are the outer loop and players the inner loop, so a seeded
//! source always yields the same sequence of outcomes.

use super::config::SimConfig;
use super::game::Game;
use super::player::Gambler;
use super::report::SimReport;
use crate::error::SimError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig, rng: &mut impl Rng) -> Result<SimReport, SimError> {
    config.validate()?;

    info!(
        players = config.num_players,
        rounds = config.rounds_per_player,
        starting_balance = config.starting_balance,
        bet_size = config.bet_size,
        "Starting simulation"
    );

    let gamblers = play_tournament(config, rng);
    let final_balances: Vec<f64> = gamblers.iter().map(Gambler::balance).collect();
    let report = SimReport::from_final_balances(final_balances, config.starting_balance)?;

    info!(
        mean = report.mean,
        median = report.median,
        players_ahead = report.players_ahead,
        players_ruined = report.players_ruined,
        "Simulation complete"
    );

    Ok(report)
}

/// Run the simulation with a ChaCha source seeded from `config.seed`, or
/// from entropy when no seed is set.
pub fn run_seeded(config: &SimConfig) -> Result<SimReport, SimError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    run_simulation(config, &mut rng)
}

/// Play every round for every player and hand back the population.
pub fn play_tournament(config: &SimConfig, rng: &mut impl Rng) -> Vec<Gambler> {
    let game = Game::new(config.game);
    let mut gamblers: Vec<Gambler> = (0..config.num_players)
        .map(|_| Gambler::new(config.starting_balance))
        .collect();

    for round in 0..config.rounds_per_player {
        for gambler in gamblers.iter_mut() {
            game.play(gambler, config.bet_size, rng);
        }

        if tracing::enabled!(tracing::Level::DEBUG) {
            let ruined = gamblers.iter().filter(|g| g.is_ruined()).count();
            debug!(round = round + 1, ruined, "Round complete");
        }
    }

    gamblers
}

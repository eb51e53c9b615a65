//! Single-round betting logic.

use super::config::GameConfig;
use super::player::Gambler;
use crate::constants::RUIN_THRESHOLD;
use rand::Rng;

/// What happened in one round for one player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOutcome {
    pub won: bool,
    /// Amount actually put at risk
    pub wagered: f64,
    /// Balance after the round
    pub balance: f64,
}

/// Applies one bet-and-outcome transition to a player.
#[derive(Debug, Clone, Copy)]
pub struct Game {
    config: GameConfig,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play one round, appending the new balance to the player's history.
    ///
    /// The wager is capped at the player's current balance, so a player at
    /// zero wagers nothing and stays at zero. Consumes exactly one `f64`
    /// sample from `rng`.
    pub fn play(&self, gambler: &mut Gambler, bet_size: f64, rng: &mut impl Rng) -> RoundOutcome {
        let balance = gambler.balance();
        let wagered = balance.min(bet_size);

        let won = rng.gen::<f64>() < self.config.win_probability;
        let multiplier = if won {
            self.config.win_multiplier
        } else {
            self.config.loss_multiplier
        };

        // balance - wager + wager * multiplier
        let mut new_balance = balance + wagered * (multiplier - 1.0);
        if new_balance < RUIN_THRESHOLD {
            new_balance = 0.0;
        }

        gambler.record(new_balance);

        RoundOutcome {
            won,
            wagered,
            balance: new_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn always_win() -> StepRng {
        StepRng::new(0, 0)
    }

    fn always_lose() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn game(win_probability: f64, win_multiplier: f64, loss_multiplier: f64) -> Game {
        Game::new(GameConfig {
            win_probability,
            win_multiplier,
            loss_multiplier,
        })
    }

    #[test]
    fn test_full_balance_win_multiplies() {
        let mut g = Gambler::new(100.0);
        let outcome = game(0.5, 1.5, 0.6).play(&mut g, 100.0, &mut always_win());
        assert!(outcome.won);
        assert_eq!(outcome.wagered, 100.0);
        assert_eq!(g.balance(), 150.0);
    }

    #[test]
    fn test_full_balance_loss_multiplies() {
        let mut g = Gambler::new(100.0);
        let outcome = game(0.5, 1.5, 0.5).play(&mut g, 100.0, &mut always_lose());
        assert!(!outcome.won);
        assert_eq!(g.balance(), 50.0);
    }

    #[test]
    fn test_partial_bet_only_risks_wager() {
        let mut g = Gambler::new(100.0);
        game(0.5, 2.0, 0.0).play(&mut g, 10.0, &mut always_win());
        assert_eq!(g.balance(), 110.0);
        game(0.5, 2.0, 0.0).play(&mut g, 10.0, &mut always_lose());
        assert_eq!(g.balance(), 100.0);
    }

    #[test]
    fn test_bet_capped_at_balance() {
        let mut g = Gambler::new(40.0);
        let outcome = game(0.5, 2.0, 0.5).play(&mut g, 1000.0, &mut always_lose());
        assert_eq!(outcome.wagered, 40.0);
        assert_eq!(g.balance(), 20.0);
    }

    #[test]
    fn test_tiny_balance_clamped_to_zero() {
        let mut g = Gambler::new(1.0);
        let outcome = game(0.5, 1.5, 0.005).play(&mut g, 1.0, &mut always_lose());
        assert_eq!(outcome.balance, 0.0);
        assert!(g.is_ruined());
    }

    #[test]
    fn test_ruin_is_absorbing() {
        let mut g = Gambler::new(100.0);
        let engine = game(0.5, 1.5, 0.0);
        engine.play(&mut g, 100.0, &mut always_lose());
        assert_eq!(g.balance(), 0.0);

        for _ in 0..5 {
            let outcome = engine.play(&mut g, 100.0, &mut always_win());
            assert_eq!(outcome.wagered, 0.0);
            assert_eq!(g.balance(), 0.0);
        }
        assert_eq!(g.history().len(), 7);
    }

    #[test]
    fn test_zero_bet_leaves_balance() {
        let mut g = Gambler::new(100.0);
        game(0.5, 3.0, 0.0).play(&mut g, 0.0, &mut always_win());
        assert_eq!(g.balance(), 100.0);
    }

    #[test]
    fn test_probability_edges() {
        let mut g = Gambler::new(10.0);
        // u is always < 1.0, so p = 1 always wins
        assert!(game(1.0, 2.0, 0.0).play(&mut g, 10.0, &mut always_lose()).won);
        // u >= 0.0, so p = 0 never wins
        assert!(!game(0.0, 2.0, 1.0).play(&mut g, 10.0, &mut always_win()).won);
    }

    #[test]
    fn test_each_play_appends_once() {
        let mut g = Gambler::new(10.0);
        let engine = game(0.5, 1.5, 0.6);
        let mut rng = always_win();
        for round in 1..=4 {
            engine.play(&mut g, 10.0, &mut rng);
            assert_eq!(g.history().len(), round + 1);
        }
    }
}

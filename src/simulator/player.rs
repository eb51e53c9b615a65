//! Per-player balance tracking.

/// A single participant and the full time series of their balance.
#[derive(Debug, Clone)]
pub struct Gambler {
    starting_balance: f64,
    history: Vec<f64>, // never empty, first entry is the starting balance
}

impl Gambler {
    pub fn new(starting_balance: f64) -> Self {
        Self {
            starting_balance,
            history: vec![starting_balance],
        }
    }

    /// Current balance (the latest entry in the history).
    pub fn balance(&self) -> f64 {
        self.history[self.history.len() - 1]
    }

    pub fn starting_balance(&self) -> f64 {
        self.starting_balance
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len() - 1
    }

    pub fn is_ruined(&self) -> bool {
        self.balance() == 0.0
    }

    pub(crate) fn record(&mut self, balance: f64) {
        self.history.push(balance);
    }
}

//! Simulation report generation.

use super::config::SimConfig;
use crate::error::SimError;
use serde::Serialize;

/// Aggregated outcome of a completed simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    /// Each player's final balance, ascending
    pub final_balances: Vec<f64>,

    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Lower-middle element for even populations
    pub median: f64,

    /// Players ending strictly above the starting balance
    pub players_ahead: u32,
    pub players_ahead_percentage: f64,

    /// Players ending at zero
    pub players_ruined: u32,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a SimConfig,
    result: &'a SimReport,
}

impl SimReport {
    /// Build a report from every player's final balance.
    pub fn from_final_balances(
        mut final_balances: Vec<f64>,
        starting_balance: f64,
    ) -> Result<Self, SimError> {
        if final_balances.is_empty() {
            return Err(SimError::EmptyPopulation);
        }
        final_balances.sort_by(f64::total_cmp);

        let n = final_balances.len();
        let min = final_balances[0];
        let max = final_balances[n - 1];
        let mean = final_balances.iter().sum::<f64>() / n as f64;

        // 1-indexed position ceil(n / 2): for 8 players take the 4th, for 9 the 5th
        let median = final_balances[n.div_ceil(2) - 1];

        let players_ahead = final_balances
            .iter()
            .filter(|&&b| b > starting_balance)
            .count() as u32;
        let players_ahead_percentage = players_ahead as f64 / n as f64 * 100.0;
        let players_ruined = final_balances.iter().filter(|&&b| b == 0.0).count() as u32;

        Ok(Self {
            final_balances,
            min,
            max,
            mean,
            median,
            players_ahead,
            players_ahead_percentage,
            players_ruined,
        })
    }

    pub fn num_players(&self) -> usize {
        self.final_balances.len()
    }

    /// Generate the text summary: setup echo followed by outcomes.
    pub fn to_text(&self, config: &SimConfig) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                       GAMBLER'S RUIN\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str("── CASINO SETUP ─────────────────────────────────────────────────\n");
        report.push_str(&format!("  Player Count:      {}\n", config.num_players));
        report.push_str(&format!(
            "  Games Per Player:  {}\n",
            config.rounds_per_player
        ));
        report.push_str(&format!(
            "  Player Buy In:     {:.2}\n",
            config.starting_balance
        ));
        report.push_str(&format!("  Bet Size:          {:.2}\n", config.bet_size));
        report.push_str(&format!(
            "  Win Probability:   {}\n",
            config.game.win_probability
        ));
        report.push_str(&format!(
            "  Win Multiplier:    {}\n",
            config.game.win_multiplier
        ));
        report.push_str(&format!(
            "  Loss Multiplier:   {}\n",
            config.game.loss_multiplier
        ));
        if let Some(seed) = config.seed {
            report.push_str(&format!("  Seed:              {}\n", seed));
        }
        report.push('\n');

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Players Ending Ahead:    {} ({:.1}%)\n",
            self.players_ahead, self.players_ahead_percentage
        ));
        report.push_str(&format!(
            "  Players Ruined:          {}\n",
            self.players_ruined
        ));
        report.push_str(&format!("  Average Final Holdings:  {:.2}\n", self.mean));
        report.push_str(&format!("  Median Final Holdings:   {:.2}\n", self.median));
        report.push_str(&format!("  Min Final Holdings:      {:.2}\n", self.min));
        report.push_str(&format!("  Max Final Holdings:      {:.2}\n", self.max));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Every player's final balance, one per line, ascending.
    pub fn holdings_text(&self) -> String {
        let mut report = String::new();
        report.push_str("── END OF GAME HOLDINGS PER PLAYER ──────────────────────────────\n");
        for balance in &self.final_balances {
            report.push_str(&format!("  {}\n", balance));
        }
        report
    }

    /// Generate a JSON report (config and results) for further analysis.
    pub fn to_json(&self, config: &SimConfig) -> Result<String, SimError> {
        let json = serde_json::to_string_pretty(&JsonReport {
            config,
            result: self,
        })?;
        Ok(json)
    }
}

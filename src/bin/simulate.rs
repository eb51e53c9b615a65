//! Gambler's ruin simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                           # 1000 players, 52 games each
//!   cargo run --bin simulate -- --n-players 50 -s 42   # Reproducible small run
//!   cargo run --bin simulate -- --show-eog-holdings    # List every final balance

use gamblers_ruin::simulator::{run_seeded, SimConfig, SimReport};
use gamblers_ruin::SimError;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct CliArgs {
    config: SimConfig,
    show_holdings: bool,
    json: bool,
    verbose: bool,
    help: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Run with --help for usage.");
            return ExitCode::from(2);
        }
    };

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ SimError::InvalidConfig { .. }) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &CliArgs) -> Result<(), SimError> {
    let report = run_seeded(&cli.config)?;

    println!("{}", report.to_text(&cli.config));

    if cli.show_holdings {
        println!("{}", report.holdings_text());
    }

    if cli.json {
        save_json(&report, &cli.config)?;
    }

    Ok(())
}

fn save_json(report: &SimReport, config: &SimConfig) -> Result<(), SimError> {
    let json = report.to_json(config)?;
    let filename = format!(
        "sim_report_{}.json",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    std::fs::write(&filename, json)?;
    println!("JSON report saved to: {}", filename);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "gamblers_ruin=debug"
    } else {
        "gamblers_ruin=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args(args: &[String]) -> Result<CliArgs, SimError> {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--n-players" => cli.config.num_players = value(args, &mut i)?,
            "--games-per-player" => cli.config.rounds_per_player = value(args, &mut i)?,
            "--player-bank" => cli.config.starting_balance = value(args, &mut i)?,
            "--betsize" => cli.config.bet_size = value(args, &mut i)?,
            "--win-probability" => cli.config.game.win_probability = value(args, &mut i)?,
            "--win-multiplier" => cli.config.game.win_multiplier = value(args, &mut i)?,
            "--loss-multiplier" => cli.config.game.loss_multiplier = value(args, &mut i)?,
            "-s" | "--seed" => cli.config.seed = Some(value(args, &mut i)?),
            "--show-eog-holdings" => cli.show_holdings = true,
            "--json" => cli.json = true,
            "-v" | "--verbose" => cli.verbose = true,
            "-h" | "--help" => cli.help = true,
            _ => return Err(SimError::InvalidArgument(format!("unknown option '{flag}'"))),
        }
        i += 1;
    }

    if !cli.help {
        cli.config.validate()?;
    }
    Ok(cli)
}

/// Parse the value following the flag at `args[*i]`, advancing past it.
fn value<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, SimError> {
    let flag = &args[*i];
    let raw = args
        .get(*i + 1)
        .ok_or_else(|| SimError::InvalidArgument(format!("{flag} requires a value")))?;
    *i += 1;
    raw.parse()
        .map_err(|_| SimError::InvalidArgument(format!("invalid value '{raw}' for {flag}")))
}

fn print_help() {
    println!("Gambler's Ruin Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --n-players <N>          Number of players (default: 1000)");
    println!("    --games-per-player <N>   Games each player plays (default: 52)");
    println!("    --player-bank <X>        Starting balance (default: 10000)");
    println!("    --betsize <X>            Bet per game, capped at balance (default: 10000)");
    println!("    --win-probability <P>    Chance to win a game (default: 0.5)");
    println!("    --win-multiplier <M>     Payout multiplier on a win (default: 1.5)");
    println!("    --loss-multiplier <M>    Payout multiplier on a loss (default: 0.6)");
    println!("    --show-eog-holdings      List every player's final balance");
    println!("    -s, --seed <S>           Random seed for reproducibility");
    println!("    --json                   Save JSON report");
    println!("    -v, --verbose            Debug logging to stderr");
    println!("    -h, --help               Show this help");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("simulate")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let cli = parse_args(&args(&[])).unwrap();
        assert_eq!(cli.config, SimConfig::default());
        assert!(!cli.show_holdings);
        assert!(!cli.json);
    }

    #[test]
    fn test_all_options() {
        let cli = parse_args(&args(&[
            "--n-players",
            "10",
            "--games-per-player",
            "5",
            "--player-bank",
            "100",
            "--betsize",
            "25.5",
            "--win-probability",
            "0.4",
            "--win-multiplier",
            "2",
            "--loss-multiplier",
            "0",
            "--seed",
            "42",
            "--show-eog-holdings",
            "-v",
        ]))
        .unwrap();

        assert_eq!(cli.config.num_players, 10);
        assert_eq!(cli.config.rounds_per_player, 5);
        assert_eq!(cli.config.starting_balance, 100.0);
        assert_eq!(cli.config.bet_size, 25.5);
        assert_eq!(cli.config.game.win_probability, 0.4);
        assert_eq!(cli.config.game.win_multiplier, 2.0);
        assert_eq!(cli.config.game.loss_multiplier, 0.0);
        assert_eq!(cli.config.seed, Some(42));
        assert!(cli.show_holdings);
        assert!(cli.verbose);
    }

    #[test]
    fn test_bad_value_is_error() {
        let err = parse_args(&args(&["--n-players", "lots"])).unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument(_)));
    }

    #[test]
    fn test_missing_value_is_error() {
        assert!(parse_args(&args(&["--betsize"])).is_err());
    }

    #[test]
    fn test_unknown_option_is_error() {
        assert!(parse_args(&args(&["--turbo"])).is_err());
    }

    #[test]
    fn test_out_of_range_config_is_error() {
        let err = parse_args(&args(&["--win-probability", "1.5"])).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { .. }));
    }
}

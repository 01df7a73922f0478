use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use payout_core::{load_config, payout_table, render_report, render_table, PayoutWeights};

/// Poker tournament payout calculator
#[derive(Parser, Debug)]
#[command(name = "payout", version, about)]
struct Cli {
    /// TOML config file (defaults to $PAYOUT_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of players (3-30)
    #[arg(long)]
    players: Option<u32>,

    /// Buy-in per player
    #[arg(long)]
    buy_in: Option<f64>,

    /// Food pool contribution per player
    #[arg(long)]
    food: Option<f64>,

    /// Bounty per player
    #[arg(long)]
    bounty: Option<f64>,

    /// Comma-separated payout weights, first place first
    #[arg(long)]
    weights: Option<String>,

    /// Print payouts for every field size instead of a single report
    #[arg(long)]
    table: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("Error: {msg}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<String, String> {
    let mut cfg = load_config(cli.config.as_deref()).map_err(|e| e.to_string())?;
    if let Some(v) = cli.players {
        cfg.players = v;
    }
    if let Some(v) = cli.buy_in {
        cfg.buy_in = v;
    }
    if let Some(v) = cli.food {
        cfg.food_per_player = v;
    }
    if let Some(v) = cli.bounty {
        cfg.bounty_per_player = v;
    }
    if let Some(text) = cli.weights {
        cfg.weights = PayoutWeights::parse(&text).map_err(|e| e.to_string())?.into();
    }

    let input = cfg.into_input().map_err(|e| e.to_string())?;
    if cli.table {
        let rows = payout_table(
            input.buy_in,
            input.food_per_player,
            input.bounty_per_player,
            input.weights.as_slice(),
        )
        .map_err(|e| e.to_string())?;
        return Ok(render_table(&rows));
    }

    let result = input.compute().map_err(|e| e.to_string())?;
    Ok(render_report(&result))
}

//! # 2048 CLI
//!
//! Command-line interface for playing 2048 interactively or running
//! headless simulations with configurable policies.

mod headless;
mod terminal;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use game_2048_engine::EngineConfig;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "game-2048")]
#[command(author, version, about = "Play 2048 in the terminal or run simulations")]
pub struct Args {
    /// Number of episodes to run in headless mode (interactive if omitted)
    #[arg(short, long)]
    episodes: Option<u32>,

    /// Random seed for deterministic runs (OS entropy if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with scoring settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum steps per episode (0 = unlimited)
    #[arg(short, long, default_value = "10000")]
    max_steps: u32,

    /// Policy for headless mode
    #[arg(short, long, value_enum, default_value = "random")]
    policy: Policy,

    /// Show board after each move in headless mode
    #[arg(long)]
    show_boards: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Policy {
    /// Random legal moves
    Random,
    /// Cycle through directions: Left, Down, Right, Up
    Cycle,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Logs go to stderr so they do not interleave with the board on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(path) => {
            let config = EngineConfig::from_toml(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            info!(path = %path.display(), ?config, "loaded config");
            Ok(config)
        }
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_ref())?;

    if let Some(episodes) = args.episodes {
        let seed = args.seed.unwrap_or_else(rand::random);
        let summary = headless::run(&args, config, seed, episodes);
        print!("{summary}");
        Ok(())
    } else {
        terminal::run_interactive(args.seed, config)
    }
}

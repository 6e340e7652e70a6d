//! Command-line interface for strictly_autoplay.

use crate::config::AutoplayConfig;
use crate::strategy::StrategyKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Autoplay - headless 2048 games driven by simple strategies
#[derive(Parser, Debug)]
#[command(name = "strictly_autoplay")]
#[command(about = "Play 2048 games unattended and report the outcome", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a batch of games and print a summary
    Run {
        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,

        /// Base seed; game i uses seed + i
        #[arg(short, long)]
        seed: Option<u64>,

        /// Strategy that picks each move
        #[arg(long, value_enum)]
        strategy: Option<StrategyKind>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play one seeded game and print its final board
    Play {
        /// Seed for the game
        #[arg(short, long)]
        seed: u64,

        /// Strategy that picks each move
        #[arg(long, value_enum)]
        strategy: Option<StrategyKind>,
    },
}

impl Command {
    /// Applies command-line overrides on top of a loaded config.
    pub fn apply(&self, config: AutoplayConfig) -> AutoplayConfig {
        match self {
            Command::Run {
                games,
                seed,
                strategy,
                ..
            } => {
                let config = match games {
                    Some(games) => config.with_games(*games),
                    None => config,
                };
                let config = match seed {
                    Some(seed) => config.with_seed(Some(*seed)),
                    None => config,
                };
                match strategy {
                    Some(strategy) => config.with_strategy(*strategy),
                    None => config,
                }
            }
            Command::Play { seed, strategy } => {
                let config = config.with_games(1).with_seed(Some(*seed));
                match strategy {
                    Some(strategy) => config.with_strategy(*strategy),
                    None => config,
                }
            }
        }
    }
}

//! Strictly Autoplay - plays strictly_2048 games without a human.
//!
//! A strategy picks each direction, the engine applies it, and the driver
//! records how far each game got.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;
mod strategy;

pub use cli::{Cli, Command};
pub use config::{AutoplayConfig, ConfigError};
pub use driver::{AutoplayError, GameReport, RunSummary, play_game, run};
pub use strategy::{CycleStrategy, GreedyStrategy, RandomStrategy, Strategy, StrategyKind};

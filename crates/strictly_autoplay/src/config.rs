//! Autoplay configuration.

use crate::strategy::StrategyKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_2048::{DEFAULT_INITIAL_TILES, GameRules, Spawner, rules::DEFAULT_FOUR_PROBABILITY};
use tracing::{debug, info, instrument};

/// Configuration for an autoplay run.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct AutoplayConfig {
    /// Number of games per run.
    #[serde(default = "default_games")]
    games: u32,

    /// Base seed; game `i` is seeded with `seed + i`. Random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Strategy that picks each move.
    #[serde(default)]
    strategy: StrategyKind,

    /// Tiles placed before the first move.
    #[serde(default = "default_initial_tiles")]
    initial_tiles: usize,

    /// Chance that a spawned tile is a 4.
    #[serde(default = "default_four_probability")]
    four_probability: f64,

    /// Moves after which a game is abandoned.
    #[serde(default = "default_max_moves")]
    max_moves: u64,
}

fn default_games() -> u32 {
    10
}

fn default_initial_tiles() -> usize {
    DEFAULT_INITIAL_TILES
}

fn default_four_probability() -> f64 {
    DEFAULT_FOUR_PROBABILITY
}

fn default_max_moves() -> u64 {
    100_000
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            games: default_games(),
            seed: None,
            strategy: StrategyKind::default(),
            initial_tiles: default_initial_tiles(),
            four_probability: default_four_probability(),
            max_moves: default_max_moves(),
        }
    }
}

impl AutoplayConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(games = config.games, strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Checks every value is in range.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        if self.max_moves == 0 {
            return Err(ConfigError::new("max_moves must be at least 1".to_string()));
        }
        self.game_rules().map(|_| ())
    }

    /// Builds the game rules described by this config.
    #[instrument(
        skip(self),
        fields(initial_tiles = self.initial_tiles, four_probability = self.four_probability)
    )]
    pub fn game_rules(&self) -> Result<GameRules, ConfigError> {
        Spawner::new(self.four_probability)
            .and_then(|spawner| GameRules::new(self.initial_tiles, spawner))
            .map_err(|e| ConfigError::new(e.to_string()))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AutoplayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(*config.games(), 10);
        assert_eq!(*config.strategy(), StrategyKind::Random);
        assert_eq!(config.game_rules().unwrap(), GameRules::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AutoplayConfig = toml::from_str("games = 3\nstrategy = \"greedy\"\n").unwrap();
        assert_eq!(*config.games(), 3);
        assert_eq!(*config.strategy(), StrategyKind::Greedy);
        assert_eq!(*config.initial_tiles(), 2);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_setters_override() {
        let config = AutoplayConfig::default()
            .with_games(4)
            .with_seed(Some(7))
            .with_strategy(StrategyKind::Cycle);
        assert_eq!(*config.games(), 4);
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(*config.strategy(), StrategyKind::Cycle);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(AutoplayConfig::default().with_games(0).validate().is_err());
        assert!(AutoplayConfig::default().with_max_moves(0).validate().is_err());
        assert!(AutoplayConfig::default().with_initial_tiles(0).validate().is_err());

        let err = AutoplayConfig::default()
            .with_four_probability(2.0)
            .validate()
            .unwrap_err();
        assert!(err.message.contains("four_probability"));
    }
}

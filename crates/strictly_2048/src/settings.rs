//! Game rules: tunable parameters fixed for the lifetime of a session.

use crate::error::GameError;
use crate::rules::Spawner;
use crate::types::GRID_SIZE;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Tiles placed on the empty board before the first move.
pub const DEFAULT_INITIAL_TILES: usize = 2;

/// Parameters a session is started with.
///
/// Defaults to the classic game: two starting tiles, 10% fours.
/// Deserialization goes through [`GameRules::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameRules")]
pub struct GameRules {
    initial_tiles: usize,
    spawner: Spawner,
}

/// Unvalidated wire form of [`GameRules`].
#[derive(Deserialize)]
struct RawGameRules {
    initial_tiles: usize,
    spawner: Spawner,
}

impl TryFrom<RawGameRules> for GameRules {
    type Error = GameError;

    fn try_from(raw: RawGameRules) -> Result<Self, Self::Error> {
        GameRules::new(raw.initial_tiles, raw.spawner)
    }
}

impl GameRules {
    /// Creates rules with the given starting tile count and spawner.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidRules` unless `1 <= initial_tiles <= 16`.
    #[instrument]
    pub fn new(initial_tiles: usize, spawner: Spawner) -> Result<Self, GameError> {
        if !(1..=GRID_SIZE * GRID_SIZE).contains(&initial_tiles) {
            return Err(GameError::InvalidRules(format!(
                "initial_tiles must be within 1..={}, got {}",
                GRID_SIZE * GRID_SIZE,
                initial_tiles
            )));
        }
        Ok(Self {
            initial_tiles,
            spawner,
        })
    }

    /// Number of tiles seeded at the start.
    pub fn initial_tiles(&self) -> usize {
        self.initial_tiles
    }

    /// The tile spawner.
    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            initial_tiles: DEFAULT_INITIAL_TILES,
            spawner: Spawner::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = GameRules::default();
        assert_eq!(rules.initial_tiles(), 2);
        assert_eq!(rules.spawner().four_probability(), 0.1);
    }

    #[test]
    fn test_initial_tiles_bounds() {
        assert!(GameRules::new(0, Spawner::default()).is_err());
        assert!(GameRules::new(17, Spawner::default()).is_err());
        assert!(GameRules::new(16, Spawner::default()).is_ok());
    }

    #[test]
    fn test_deserialize_validates_initial_tiles() {
        let json = r#"{"initial_tiles": 3, "spawner": {"four_probability": 0.1}}"#;
        let rules: GameRules = serde_json::from_str(json).unwrap();
        assert_eq!(rules.initial_tiles(), 3);

        let json = r#"{"initial_tiles": 0, "spawner": {"four_probability": 0.1}}"#;
        assert!(serde_json::from_str::<GameRules>(json).is_err());
    }
}

//! Random tile spawning.

use crate::error::GameError;
use crate::types::Board;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Chance that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Places new tiles on uniformly chosen empty cells.
///
/// Deserialization goes through [`Spawner::new`], so an out-of-range
/// probability is rejected on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpawner")]
pub struct Spawner {
    four_probability: f64,
}

/// Unvalidated wire form of [`Spawner`].
#[derive(Deserialize)]
struct RawSpawner {
    four_probability: f64,
}

impl TryFrom<RawSpawner> for Spawner {
    type Error = GameError;

    fn try_from(raw: RawSpawner) -> Result<Self, Self::Error> {
        Spawner::new(raw.four_probability)
    }
}

impl Spawner {
    /// Creates a spawner that yields a 4 with the given probability.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidRules` unless `0.0 <= four_probability <= 1.0`.
    #[instrument]
    pub fn new(four_probability: f64) -> Result<Self, GameError> {
        if !(0.0..=1.0).contains(&four_probability) {
            return Err(GameError::InvalidRules(format!(
                "four_probability must be within 0..=1, got {}",
                four_probability
            )));
        }
        Ok(Self { four_probability })
    }

    /// Probability that a spawned tile is a 4.
    pub fn four_probability(&self) -> f64 {
        self.four_probability
    }

    /// Returns `board` with one new tile on a random empty cell.
    ///
    /// A full board comes back unchanged. The session only spawns after a
    /// move that changed the board, which always leaves a free cell, so this
    /// is logged as a broken contract.
    #[instrument(level = "debug", skip(self, board, rng))]
    pub fn spawn<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Board {
        let empties = board.empty_cells();
        let Some(&(row, col)) = empties.choose(rng) else {
            error!("Spawn requested on a full board");
            return *board;
        };

        let value = if rng.random_bool(self.four_probability) {
            4
        } else {
            2
        };
        debug!(row, col, value, "Spawned tile");
        board.with_tile(row, col, value)
    }

    /// Spawns `count` tiles in sequence.
    #[instrument(level = "debug", skip(self, board, rng))]
    pub fn seed<R: Rng + ?Sized>(&self, board: &Board, count: usize, rng: &mut R) -> Board {
        (0..count).fold(*board, |acc, _| self.spawn(&acc, rng))
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            four_probability: DEFAULT_FOUR_PROBABILITY,
        }
    }
}

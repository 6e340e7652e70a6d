//! Move-picking strategies for unattended play.

use rand::RngCore;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use strictly_2048::{Direction, GameActive, slide};
use tracing::{debug, instrument};

/// Which strategy drives a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrategyKind {
    /// Uniformly random among moves that change the board.
    #[default]
    Random,
    /// Up, right, down, left in turn, skipping moves that change nothing.
    Cycle,
    /// Highest immediate merge score, then most empty cells.
    Greedy,
}

impl StrategyKind {
    /// Builds a fresh strategy of this kind.
    #[instrument]
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy),
            StrategyKind::Cycle => Box::new(CycleStrategy::default()),
            StrategyKind::Greedy => Box::new(GreedyStrategy),
        }
    }
}

/// Picks the next direction for an active game.
pub trait Strategy {
    /// Strategy name for logs.
    fn name(&self) -> &'static str;

    /// Returns a direction that changes the board, or `None` to give up.
    fn choose(&mut self, game: &GameActive, rng: &mut dyn RngCore) -> Option<Direction>;
}

/// Random player.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, game: &GameActive, rng: &mut dyn RngCore) -> Option<Direction> {
        game.available_directions().choose(rng).copied()
    }
}

/// Rotates through the directions clockwise.
#[derive(Debug, Clone, Default)]
pub struct CycleStrategy {
    next: usize,
}

impl CycleStrategy {
    const ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

impl Strategy for CycleStrategy {
    fn name(&self) -> &'static str {
        "cycle"
    }

    fn choose(&mut self, game: &GameActive, _rng: &mut dyn RngCore) -> Option<Direction> {
        let available = game.available_directions();
        for offset in 0..Self::ORDER.len() {
            let index = (self.next + offset) % Self::ORDER.len();
            let direction = Self::ORDER[index];
            if available.contains(&direction) {
                self.next = (index + 1) % Self::ORDER.len();
                return Some(direction);
            }
        }
        None
    }
}

/// One-ply lookahead on merge score.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&mut self, game: &GameActive, _rng: &mut dyn RngCore) -> Option<Direction> {
        let mut best: Option<(Direction, u32, usize)> = None;
        for direction in Direction::ALL {
            let result = slide(game.board(), direction);
            if !result.changed() {
                continue;
            }
            let empties = result.board().empty_cells().len();
            let better = match best {
                None => true,
                Some((_, score, free)) => (result.score_delta(), empties) > (score, free),
            };
            if better {
                best = Some((direction, result.score_delta(), empties));
            }
        }
        if let Some((direction, score, empties)) = best {
            debug!(%direction, score, empties, "Greedy pick");
        }
        best.map(|(direction, _, _)| direction)
    }
}

//! Score invariant: the score is a sum of merged values.

use super::Invariant;
use crate::types::GameView;

/// Invariant: the cumulative score is a multiple of 4.
///
/// Each merge scores the value it creates, and the smallest merge (2 + 2)
/// creates a 4; every larger merged value is a multiple of it.
pub struct ScoreMultipleInvariant;

impl<S: GameView> Invariant<S> for ScoreMultipleInvariant {
    fn holds(state: &S) -> bool {
        state.score() % 4 == 0
    }

    fn description() -> &'static str {
        "Score is a sum of merged tile values"
    }
}

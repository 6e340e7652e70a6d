//! Contract-based validation for 2048 moves.
//!
//! Contracts formalize the Hoare-style reasoning: {P} move {Q}

use crate::direction::Direction;
use crate::error::GameError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::types::GameView;
use crate::wrapper::Snapshot;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game still accepts moves.
pub struct NotTerminal;

impl NotTerminal {
    /// Fails with `GameError::GameOver` on a terminal state.
    pub fn check(state: &Snapshot) -> Result<(), GameError> {
        if state.terminal() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Checks the full invariant set, folding violations into one error.
#[instrument(skip(state))]
pub fn check_invariants<S: GameView>(state: &S) -> Result<(), GameError> {
    GameInvariants::check_all(state).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Invariant check failed");
        GameError::InvariantViolation(descriptions)
    })
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: the score never decreases.
pub struct ScoreMonotonic;

impl ScoreMonotonic {
    /// Fails if `after` scored less than `before`.
    pub fn check(before: &Snapshot, after: &Snapshot) -> Result<(), GameError> {
        if after.score() < before.score() {
            warn!(before = before.score(), after = after.score(), "Score decreased");
            return Err(GameError::InvariantViolation(format!(
                "Score decreased from {} to {}",
                before.score(),
                after.score()
            )));
        }
        Ok(())
    }
}

/// Postcondition: a move adds at most the one spawned tile.
pub struct SingleSpawn;

impl SingleSpawn {
    /// Fails if more than one tile appeared.
    pub fn check(before: &Snapshot, after: &Snapshot) -> Result<(), GameError> {
        let (was, now) = (before.board().tile_count(), after.board().tile_count());
        if now > was + 1 {
            warn!(was, now, "More than one tile spawned");
            return Err(GameError::InvariantViolation(format!(
                "Tile count grew from {} to {}",
                was, now
            )));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not over
/// - State invariants hold
///
/// Postconditions:
/// - State invariants hold
/// - Score did not decrease
/// - At most one tile was added
pub struct MoveContract;

impl Contract<Snapshot, Direction> for MoveContract {
    fn pre(state: &Snapshot, _action: &Direction) -> Result<(), GameError> {
        NotTerminal::check(state)?;
        check_invariants(state)
    }

    fn post(before: &Snapshot, after: &Snapshot) -> Result<(), GameError> {
        check_invariants(after)?;
        ScoreMonotonic::check(before, after)?;
        SingleSpawn::check(before, after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    fn snapshot(cells: [[u32; 4]; 4], score: u64, terminal: bool) -> Snapshot {
        Snapshot::new(Board::from_cells_unchecked(cells), score, terminal)
    }

    #[test]
    fn test_precondition_active_state() {
        let state = snapshot([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0, false);
        assert!(MoveContract::pre(&state, &Direction::Left).is_ok());
    }

    #[test]
    fn test_precondition_terminal_state() {
        let state = snapshot([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]], 0, true);
        assert_eq!(
            MoveContract::pre(&state, &Direction::Up),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_merge() {
        let before = snapshot([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0, false);
        let after = snapshot([[4, 0, 0, 0], [0, 0, 2, 0], [0; 4], [0; 4]], 4, false);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_score_loss() {
        let before = snapshot([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 8, false);
        let after = snapshot([[4, 0, 0, 0], [0, 0, 2, 0], [0; 4], [0; 4]], 4, false);
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_double_spawn() {
        let before = snapshot([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]], 0, false);
        let after = snapshot([[2, 4, 2, 2], [0; 4], [0; 4], [0; 4]], 0, false);
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(GameError::InvariantViolation(_))
        ));
    }
}

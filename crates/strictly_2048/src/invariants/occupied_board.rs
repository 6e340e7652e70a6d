//! Occupancy invariant: a started game never has an empty board.

use super::Invariant;
use crate::types::GameView;

/// Invariant: at least one tile is on the board.
///
/// Seeding places at least one tile and a merge turns two tiles into one,
/// so the count never reaches zero.
pub struct OccupiedBoardInvariant;

impl<S: GameView> Invariant<S> for OccupiedBoardInvariant {
    fn holds(state: &S) -> bool {
        state.board().tile_count() > 0
    }

    fn description() -> &'static str {
        "Board holds at least one tile"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Snapshot};

    #[test]
    fn test_empty_board_violates() {
        assert!(!OccupiedBoardInvariant::holds(&Snapshot::new(Board::new(), 0, false)));
    }
}

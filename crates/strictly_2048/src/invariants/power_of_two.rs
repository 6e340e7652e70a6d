//! Tile value invariant: every tile is a power of two.

use super::Invariant;
use crate::types::{GameView, is_valid_tile};

/// Invariant: every non-empty cell holds a power of two ≥ 2.
///
/// Tiles only come from spawning (2 or 4) or from doubling two equal tiles,
/// so no other value is reachable.
pub struct PowerOfTwoInvariant;

impl<S: GameView> Invariant<S> for PowerOfTwoInvariant {
    fn holds(state: &S) -> bool {
        state.board().cells().iter().flatten().all(|&v| is_valid_tile(v))
    }

    fn description() -> &'static str {
        "Every tile is a power of two"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Snapshot};

    #[test]
    fn test_valid_tiles_hold() {
        let board = Board::from_cells([[2, 4, 8, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]).unwrap();
        assert!(PowerOfTwoInvariant::holds(&Snapshot::new(board, 0, false)));
    }

    #[test]
    fn test_corrupted_tile_violates() {
        let board = Board::from_cells_unchecked([[2, 6, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(!PowerOfTwoInvariant::holds(&Snapshot::new(board, 0, false)));
    }
}

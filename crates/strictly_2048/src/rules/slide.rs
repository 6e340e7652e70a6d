//! Move engine: slides a whole board in one direction.

use super::orientation::{orient, restore};
use super::reduce::reduce_row;
use crate::direction::Direction;
use crate::types::{Board, GRID_SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of sliding a board, before any tile is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    board: Board,
    score_delta: u32,
    changed: bool,
}

impl MoveResult {
    /// The board after sliding and merging.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Sum of every tile created by a merge during this move.
    pub fn score_delta(&self) -> u32 {
        self.score_delta
    }

    /// False when the move left every cell as it was.
    pub fn changed(&self) -> bool {
        self.changed
    }
}

/// Slides every row of `board` toward `direction`.
///
/// Rows are reduced independently. The result is compared cell by cell with
/// the input to detect a no-op; deciding what to do with a no-op is up to the
/// caller.
#[instrument(level = "debug", skip(board), fields(direction = %direction))]
pub fn slide(board: &Board, direction: Direction) -> MoveResult {
    let oriented = orient(board, direction);

    let mut cells = [[0; GRID_SIZE]; GRID_SIZE];
    let mut score_delta = 0;
    for (target, row) in cells.iter_mut().zip(oriented.cells()) {
        let (reduced, delta) = reduce_row(*row);
        *target = reduced;
        score_delta += delta;
    }

    let result = restore(&Board::from_cells_unchecked(cells), direction);
    MoveResult {
        changed: result != *board,
        board: result,
        score_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [[u32; GRID_SIZE]; GRID_SIZE]) -> Board {
        Board::from_cells(cells).unwrap()
    }

    #[test]
    fn test_single_tile_right() {
        let start = board([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let result = slide(&start, Direction::Right);
        assert_eq!(result.board().cells()[0], [0, 0, 0, 2]);
        assert_eq!(result.score_delta(), 0);
        assert!(result.changed());
    }

    #[test]
    fn test_columns_merge_up_and_down() {
        let start = board([[2, 0, 0, 4], [2, 0, 0, 0], [2, 0, 0, 4], [0, 0, 0, 8]]);

        let up = slide(&start, Direction::Up);
        assert_eq!(
            *up.board().cells(),
            [[4, 0, 0, 8], [2, 0, 0, 8], [0; 4], [0; 4]]
        );
        assert_eq!(up.score_delta(), 12);

        let down = slide(&start, Direction::Down);
        assert_eq!(
            *down.board().cells(),
            [[0; 4], [0; 4], [2, 0, 0, 8], [4, 0, 0, 8]]
        );
        assert_eq!(down.score_delta(), 12);
    }

    #[test]
    fn test_right_merges_from_the_right() {
        let start = board([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
        let result = slide(&start, Direction::Right);
        assert_eq!(result.board().cells()[0], [0, 0, 2, 4]);
        assert_eq!(result.score_delta(), 4);
    }

    #[test]
    fn test_blocked_move_is_noop() {
        let start = board([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
        let result = slide(&start, Direction::Left);
        assert!(!result.changed());
        assert_eq!(*result.board(), start);
        assert_eq!(result.score_delta(), 0);
    }

    #[test]
    fn test_merge_conserves_sum() {
        let start = board([[2, 2, 4, 4], [8, 0, 8, 0], [0, 16, 0, 16], [2, 4, 2, 4]]);
        for direction in Direction::ALL {
            let result = slide(&start, direction);
            assert_eq!(result.board().sum(), start.sum(), "{direction}");
        }
    }
}

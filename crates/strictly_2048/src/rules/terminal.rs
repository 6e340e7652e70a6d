//! Terminal-state detection for 2048.

use super::slide::slide;
use crate::direction::Direction;
use crate::types::{Board, GRID_SIZE};
use tracing::instrument;

/// Checks if any move can still change the board.
///
/// True when some cell is empty or two horizontally or vertically adjacent
/// cells hold the same value.
#[instrument(level = "debug", skip(board))]
pub fn has_moves(board: &Board) -> bool {
    let cells = board.cells();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let value = cells[row][col];
            if value == 0 {
                return true;
            }
            if col + 1 < GRID_SIZE && value == cells[row][col + 1] {
                return true;
            }
            if row + 1 < GRID_SIZE && value == cells[row + 1][col] {
                return true;
            }
        }
    }
    false
}

/// Checks if the game is over: board full and no equal neighbours.
pub fn is_terminal(board: &Board) -> bool {
    !has_moves(board)
}

/// Directions whose move would change the board.
#[instrument(level = "debug", skip(board))]
pub fn available_directions(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|&direction| slide(board, direction).changed())
        .collect()
}

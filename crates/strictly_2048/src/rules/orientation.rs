//! Orientation adapter.
//!
//! Every direction is reduced as "left" on a transformed board. `orient`
//! brings the slide direction to column 0; `restore` undoes it.

use crate::direction::Direction;
use crate::types::{Board, GRID_SIZE};

/// Swaps rows and columns.
pub fn transpose(board: &Board) -> Board {
    let src = board.cells();
    let mut cells = [[0; GRID_SIZE]; GRID_SIZE];
    for (row, values) in cells.iter_mut().enumerate() {
        for (col, cell) in values.iter_mut().enumerate() {
            *cell = src[col][row];
        }
    }
    Board::from_cells_unchecked(cells)
}

/// Reverses the cell order within every row.
pub fn reverse_rows(board: &Board) -> Board {
    let mut cells = *board.cells();
    for row in cells.iter_mut() {
        row.reverse();
    }
    Board::from_cells_unchecked(cells)
}

/// Forward transform: after it, sliding `direction` means sliding left.
pub fn orient(board: &Board, direction: Direction) -> Board {
    match direction {
        Direction::Left => *board,
        Direction::Right => reverse_rows(board),
        Direction::Up => transpose(board),
        Direction::Down => reverse_rows(&transpose(board)),
    }
}

/// Inverse of [`orient`] for the same direction.
pub fn restore(board: &Board, direction: Direction) -> Board {
    match direction {
        Direction::Left => *board,
        Direction::Right => reverse_rows(board),
        Direction::Up => transpose(board),
        Direction::Down => transpose(&reverse_rows(board)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Board {
        Board::from_cells([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 4096],
            [8192, 16384, 32768, 65536],
        ])
        .unwrap()
    }

    #[test]
    fn test_transpose() {
        let t = transpose(&numbered());
        assert_eq!(t.cells()[0], [2, 32, 512, 8192]);
        assert_eq!(t.cells()[3], [16, 256, 4096, 65536]);
    }

    #[test]
    fn test_down_brings_bottom_to_front() {
        let oriented = orient(&numbered(), Direction::Down);
        // First oriented row is column 0 read bottom to top.
        assert_eq!(oriented.cells()[0], [8192, 512, 32, 2]);
    }

    #[test]
    fn test_restore_inverts_orient() {
        let board = numbered();
        for direction in Direction::ALL {
            assert_eq!(restore(&orient(&board, direction), direction), board);
        }
    }
}

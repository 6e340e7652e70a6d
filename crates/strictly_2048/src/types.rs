//! Core domain types for 2048.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const GRID_SIZE: usize = 4;

/// Raw cell storage, row-major. `0` is an empty cell.
pub type Cells = [[u32; GRID_SIZE]; GRID_SIZE];

/// Largest tile a 4x4 game can reach: 4-spawns merged all the way up.
pub const MAX_TILE: u32 = 1 << 17;

/// Returns true if `value` may appear on a board: empty, or a power of two
/// from 2 up to [`MAX_TILE`].
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

/// Reasons an externally supplied board is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The input does not have `GRID_SIZE` rows.
    #[display("Expected {} rows, found {}", GRID_SIZE, _0)]
    WrongRowCount(usize),

    /// A row does not have `GRID_SIZE` cells.
    #[display("Row {} has {} cells, expected {}", row, len, GRID_SIZE)]
    WrongRowLength {
        /// Offending row index.
        row: usize,
        /// Its length.
        len: usize,
    },

    /// A cell holds something other than zero or a power of two ≥ 2.
    #[display("Cell ({}, {}) holds {}, which is not a tile value", row, col, value)]
    NotPowerOfTwo {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The rejected value.
        value: u32,
    },

    /// A cell holds a power of two above [`MAX_TILE`].
    #[display("Cell ({}, {}) holds {}, above the largest tile {}", row, col, value, MAX_TILE)]
    TileTooLarge {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The rejected value.
        value: u32,
    },

    /// A game in progress needs at least one tile.
    #[display("Board holds no tiles")]
    NoTiles,
}

impl std::error::Error for BoardError {}

/// 4x4 2048 board.
///
/// Boards are values: every operation that changes tiles returns a new board,
/// so the previous board stays available for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: Cells,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Builds a board from raw cells, validating every value.
    #[instrument]
    pub fn from_cells(cells: Cells) -> Result<Self, BoardError> {
        for (row, values) in cells.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value > MAX_TILE && value.is_power_of_two() {
                    return Err(BoardError::TileTooLarge { row, col, value });
                }
                if !is_valid_tile(value) {
                    return Err(BoardError::NotPowerOfTwo { row, col, value });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Builds a board from rows of arbitrary shape, as handed over by a caller
    /// that does not share our array types.
    #[instrument(skip(rows), fields(row_count = rows.len()))]
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        if rows.len() != GRID_SIZE {
            return Err(BoardError::WrongRowCount(rows.len()));
        }

        let mut cells = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, (target, source)) in cells.iter_mut().zip(rows).enumerate() {
            let source = source.as_ref();
            if source.len() != GRID_SIZE {
                return Err(BoardError::WrongRowLength {
                    row,
                    len: source.len(),
                });
            }
            target.copy_from_slice(source);
        }

        Self::from_cells(cells)
    }

    /// Wraps cells produced by our own transforms, which preserve tile validity.
    pub(crate) fn from_cells_unchecked(cells: Cells) -> Self {
        Self { cells }
    }

    /// Returns the value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns a copy of this board with `value` at `(row, col)`.
    pub(crate) fn with_tile(mut self, row: usize, col: usize, value: u32) -> Self {
        self.cells[row][col] = value;
        self
    }

    /// Returns all cells.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.coordinates()
            .filter(|&(row, col)| self.cells[row][col] == 0)
            .collect()
    }

    /// Checks if every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Sum of every tile on the board.
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(|&v| match v {
                    0 => format!("{:>width$}", "."),
                    v => format!("{:>width$}", v),
                })
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Read access shared by every game phase.
pub trait GameView {
    /// The current board.
    fn board(&self) -> &Board;

    /// Cumulative score.
    fn score(&self) -> u64;
}

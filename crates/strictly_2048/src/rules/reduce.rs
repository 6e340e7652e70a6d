//! Row reduction: slide toward index 0, merge equal neighbours once.

use crate::types::GRID_SIZE;
use tracing::instrument;

/// Collapses one row toward index 0.
///
/// Zeros are dropped, then equal neighbours merge left to right. A merged
/// tile never merges again in the same pass, so `[2, 2, 2, 0]` becomes
/// `[4, 2, 0, 0]`. Returns the new row and the sum of merged values.
#[instrument(level = "trace")]
pub fn reduce_row(row: [u32; GRID_SIZE]) -> ([u32; GRID_SIZE], u32) {
    let mut tiles = row.iter().copied().filter(|&v| v != 0).peekable();
    let mut reduced = [0; GRID_SIZE];
    let mut score_delta = 0;

    for slot in reduced.iter_mut() {
        let Some(tile) = tiles.next() else {
            break;
        };
        if tiles.next_if_eq(&tile).is_some() {
            let merged = tile * 2;
            score_delta += merged;
            *slot = merged;
        } else {
            *slot = tile;
        }
    }

    (reduced, score_delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_equal_merge_first_pair() {
        assert_eq!(reduce_row([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
    }

    #[test]
    fn test_gap_does_not_block_merge() {
        assert_eq!(reduce_row([2, 0, 2, 2]), ([4, 2, 0, 0], 4));
    }

    #[test]
    fn test_two_pairs() {
        assert_eq!(reduce_row([4, 4, 8, 8]), ([8, 16, 0, 0], 24));
    }

    #[test]
    fn test_merged_tile_not_remerged() {
        assert_eq!(reduce_row([2, 2, 4, 0]), ([4, 4, 0, 0], 4));
    }

    #[test]
    fn test_slide_only() {
        assert_eq!(reduce_row([0, 0, 0, 2]), ([2, 0, 0, 0], 0));
        assert_eq!(reduce_row([0, 2, 0, 4]), ([2, 4, 0, 0], 0));
    }

    #[test]
    fn test_largest_tiles_merge_without_overflow() {
        let top = crate::types::MAX_TILE;
        assert_eq!(reduce_row([top, top, top, top]), ([top * 2, top * 2, 0, 0], top * 4));
    }

    #[test]
    fn test_unmergeable_row_unchanged() {
        assert_eq!(reduce_row([2, 4, 8, 16]), ([2, 4, 8, 16], 0));
        assert_eq!(reduce_row([0; GRID_SIZE]), ([0; GRID_SIZE], 0));
    }
}

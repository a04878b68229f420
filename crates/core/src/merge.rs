//! Merge module - the single slide/merge rule for one line of tiles
//!
//! Every move direction reduces to "merge a 1-D sequence toward index 0".
//! The grid engine reframes rows and columns through [`Direction::cell`]
//! and feeds them here, so this is the only place the rule lives.
//!
//! Rule, for a line of `GRID_SIZE` values:
//! 1. drop empty cells, keeping relative order
//! 2. scan left to right; two adjacent equal values become one doubled value
//!    (each tile merges at most once per move, and tiles at `MAX_TILE` never merge)
//! 3. drop the emptied slots again
//! 4. right-pad with zeros
//!
//! [`Direction::cell`]: crate::types::Direction::cell

use crate::types::{GRID_SIZE, MAX_TILE};

/// A line of tile values, ordered from the edge tiles slide toward.
pub type Line = [u32; GRID_SIZE];

/// Result of merging one line, with provenance for animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeTrace {
    /// The merged line.
    pub line: Line,
    /// For each occupied output slot, the input index of the tile that ends up
    /// there. A merged tile reports its leftmost contributor.
    pub sources: [Option<usize>; GRID_SIZE],
    /// Sum of the values created by merges in this line.
    pub gained: u32,
}

/// Slide and merge one line toward index 0.
///
/// # Examples
///
/// ```
/// use tui_2048_core::merge_sequence;
///
/// assert_eq!(merge_sequence([2, 2, 4, 0]), [4, 4, 0, 0]);
/// assert_eq!(merge_sequence([2, 2, 2, 2]), [4, 4, 0, 0]);
/// assert_eq!(merge_sequence([0, 0, 0, 8]), [8, 0, 0, 0]);
/// ```
pub fn merge_sequence(line: Line) -> Line {
    merge_sequence_traced(line).line
}

/// Slide and merge one line, reporting where each output tile came from.
pub fn merge_sequence_traced(line: Line) -> MergeTrace {
    // Compaction: (value, input index) of every occupied cell.
    let mut packed = [(0u32, 0usize); GRID_SIZE];
    let mut len = 0;
    for (i, &value) in line.iter().enumerate() {
        if value != 0 {
            packed[len] = (value, i);
            len += 1;
        }
    }

    // Merge pass. Zeroing the right partner keeps the doubled value from
    // being compared against its new neighbor.
    let mut gained = 0;
    for i in 0..len.saturating_sub(1) {
        let (left, _) = packed[i];
        if left != 0 && left < MAX_TILE && left == packed[i + 1].0 {
            packed[i].0 = left * 2;
            packed[i + 1].0 = 0;
            gained += left * 2;
        }
    }

    // Second compaction plus padding.
    let mut out = MergeTrace {
        line: [0; GRID_SIZE],
        sources: [None; GRID_SIZE],
        gained,
    };
    let mut w = 0;
    for &(value, src) in packed.iter().take(len) {
        if value != 0 {
            out.line[w] = value;
            out.sources[w] = Some(src);
            w += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compacts_without_merging() {
        assert_eq!(merge_sequence([0, 2, 0, 4]), [2, 4, 0, 0]);
        assert_eq!(merge_sequence([2, 4, 8, 16]), [2, 4, 8, 16]);
        assert_eq!(merge_sequence([0, 0, 0, 0]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_merges_across_gaps() {
        assert_eq!(merge_sequence([2, 0, 0, 2]), [4, 0, 0, 0]);
        assert_eq!(merge_sequence([0, 4, 0, 4]), [8, 0, 0, 0]);
    }

    #[test]
    fn test_merges_each_tile_once() {
        assert_eq!(merge_sequence([2, 2, 4, 0]), [4, 4, 0, 0]);
        assert_eq!(merge_sequence([2, 2, 2, 2]), [4, 4, 0, 0]);
        assert_eq!(merge_sequence([4, 4, 8, 0]), [8, 8, 0, 0]);
        assert_eq!(merge_sequence([2, 2, 2, 0]), [4, 2, 0, 0]);
    }

    #[test]
    fn test_leftmost_pair_wins() {
        assert_eq!(merge_sequence([4, 2, 2, 2]), [4, 4, 2, 0]);
    }

    #[test]
    fn test_trace_sources_and_gain() {
        let t = merge_sequence_traced([0, 2, 2, 8]);
        assert_eq!(t.line, [4, 8, 0, 0]);
        assert_eq!(t.sources, [Some(1), Some(3), None, None]);
        assert_eq!(t.gained, 4);

        let t = merge_sequence_traced([2, 2, 2, 2]);
        assert_eq!(t.sources, [Some(0), Some(2), None, None]);
        assert_eq!(t.gained, 8);
    }

    #[test]
    fn test_trace_no_gain_without_merge() {
        let t = merge_sequence_traced([2, 0, 4, 0]);
        assert_eq!(t.gained, 0);
        assert_eq!(t.sources, [Some(0), Some(2), None, None]);
    }

    #[test]
    fn test_capped_tiles_do_not_merge() {
        assert_eq!(merge_sequence([MAX_TILE, MAX_TILE, 0, 0]), [MAX_TILE, MAX_TILE, 0, 0]);
        assert_eq!(merge_sequence([0, MAX_TILE, 0, MAX_TILE]), [MAX_TILE, MAX_TILE, 0, 0]);

        let half = MAX_TILE / 2;
        let t = merge_sequence_traced([half, half, MAX_TILE, 0]);
        assert_eq!(t.line, [MAX_TILE, MAX_TILE, 0, 0]);
        assert_eq!(t.gained, MAX_TILE);
    }
}

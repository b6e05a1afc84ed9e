//! Horizontal match detection
//!
//! Matching is strictly horizontal: a run of at least `MIN_MATCH_LENGTH`
//! same-type tiles on one row. Vertical runs never match.

use crate::io::configuration::MIN_MATCH_LENGTH;
use crate::spatial::grid::{Grid, Position, TileType};

/// Horizontal run of identical tiles found from an origin slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    /// Row of the run
    pub y: usize,
    /// Shared tile type
    pub tile: TileType,
    /// Columns of the run in removal order: origin, left walk, right walk
    pub columns: Vec<usize>,
}

impl Match {
    /// Number of tiles in the run
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the run holds no tiles
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column the scan started from
    pub fn origin_x(&self) -> Option<usize> {
        self.columns.first().copied()
    }

    /// Leftmost column of the run
    pub fn first_x(&self) -> usize {
        self.columns.iter().copied().min().unwrap_or(0)
    }

    /// Rightmost column of the run
    pub fn last_x(&self) -> usize {
        self.columns.iter().copied().max().unwrap_or(0)
    }

    /// Positions of the run in removal order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.columns.iter().map(|&x| Position::new(x, self.y))
    }
}

/// Collect the horizontal run through `(x, y)`
///
/// Walks left then right from the origin while the neighbour holds the
/// origin's type, stopping at the first mismatch, empty slot or grid edge.
/// Returns `None` if the slot is empty or the run is shorter than
/// `MIN_MATCH_LENGTH`.
pub fn match_at(grid: &Grid, x: usize, y: usize) -> Option<Match> {
    let tile = grid.tile_type(x, y)?;
    let same = |column: &usize| grid.tile_type(*column, y) == Some(tile);

    let mut columns = vec![x];
    columns.extend((0..x).rev().take_while(same));
    columns.extend((x + 1..grid.width()).take_while(same));

    (columns.len() >= MIN_MATCH_LENGTH).then(|| Match { y, tile, columns })
}

/// Find the first match anchored in column `x`, scanning bottom to top
///
/// Only the first match is reported; further runs in the same column are
/// left for a later scan.
pub fn scan_column(grid: &Grid, x: usize) -> Option<Match> {
    (0..grid.height()).find_map(|y| match_at(grid, x, y))
}

//! Tile removal and the column collapse it triggers

use crate::algorithm::events::{CascadeEvent, RemovalCause};
use crate::spatial::grid::{Grid, TileType};

/// Shift the tiles above a freshly emptied slot down by one row
///
/// Walks column `x` upward from `removed_y`, moving each tile into the slot
/// directly below it and recording one `TileRelocated` per move. The topmost
/// slot ends up empty. Removing from the top row moves nothing.
///
/// Returns the number of tiles moved.
pub fn collapse_column(
    grid: &mut Grid,
    x: usize,
    removed_y: usize,
    events: &mut Vec<CascadeEvent>,
) -> usize {
    debug_assert!(grid.contains(x, removed_y), "collapse outside the grid");
    debug_assert!(!grid.is_occupied(x, removed_y), "collapse into an occupied slot");

    let mut moved = 0;
    for from_y in (removed_y + 1)..grid.height() {
        if grid.lower(x, from_y) {
            events.push(CascadeEvent::TileRelocated {
                x,
                from_y,
                to_y: from_y - 1,
            });
            moved += 1;
        }
    }
    moved
}

/// Empty the slot at `(x, y)` and collapse its column
///
/// Emits `TileRemoved` followed by the relocations of the collapse. An empty
/// slot is left alone and nothing is emitted.
pub fn remove_and_collapse(
    grid: &mut Grid,
    x: usize,
    y: usize,
    cause: RemovalCause,
    events: &mut Vec<CascadeEvent>,
) -> Option<TileType> {
    let tile = grid.take(x, y)?;
    events.push(CascadeEvent::TileRemoved {
        x,
        y,
        tile: tile.kind(),
        cause,
    });
    collapse_column(grid, x, y, events);
    Some(tile.kind())
}

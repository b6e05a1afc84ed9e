//! Ordered state-change log produced by a cascade

use std::fmt;

use crate::spatial::grid::TileType;

/// Why a tile left the grid
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RemovalCause {
    /// Picked directly by the caller
    Selected,
    /// Part of a horizontal match
    Matched {
        /// Rescan generation that found the match, starting at 1
        chain: usize,
    },
}

/// A single logical step of a cascade, in the order it happened
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CascadeEvent {
    /// A horizontal run was detected; its removals follow
    MatchFound {
        /// Row of the run
        y: usize,
        /// Leftmost column of the run
        first_x: usize,
        /// Rightmost column of the run
        last_x: usize,
        /// Shared tile type
        tile: TileType,
        /// Rescan generation that found the match, starting at 1
        chain: usize,
    },
    /// The slot at `(x, y)` was emptied
    TileRemoved {
        /// Column of the removed tile
        x: usize,
        /// Row of the removed tile
        y: usize,
        /// Type of the removed tile
        tile: TileType,
        /// What triggered the removal
        cause: RemovalCause,
    },
    /// A tile moved within column `x`
    TileRelocated {
        /// Column of the move
        x: usize,
        /// Row before the move
        from_y: usize,
        /// Row after the move
        to_y: usize,
    },
    /// The cascade ran to completion and the grid is stable
    CascadeSettled,
}

impl fmt::Display for CascadeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchFound {
                y,
                first_x,
                last_x,
                tile,
                chain,
            } => write!(
                f,
                "match {} x{} on row {y} columns {first_x}..={last_x} (chain {chain})",
                tile.glyph(),
                last_x - first_x + 1
            ),
            Self::TileRemoved { x, y, tile, cause } => match cause {
                RemovalCause::Selected => write!(f, "remove {} at ({x}, {y}) selected", tile.glyph()),
                RemovalCause::Matched { chain } => {
                    write!(f, "remove {} at ({x}, {y}) chain {chain}", tile.glyph())
                }
            },
            Self::TileRelocated { x, from_y, to_y } => {
                write!(f, "relocate column {x} row {from_y} -> {to_y}")
            }
            Self::CascadeSettled => write!(f, "settled"),
        }
    }
}

/// Event log of one `select_tile` call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CascadeResult {
    /// Events in the order the operations occurred
    pub events: Vec<CascadeEvent>,
}

impl CascadeResult {
    /// Result of a selection that changed nothing
    pub const fn noop() -> Self {
        Self { events: Vec::new() }
    }

    /// Check if the selection left the grid untouched
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of tiles removed, selected and matched
    pub fn removed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, CascadeEvent::TileRemoved { .. }))
            .count()
    }

    /// Number of tiles removed as part of a match
    pub fn matched_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| {
                matches!(
                    event,
                    CascadeEvent::TileRemoved {
                        cause: RemovalCause::Matched { .. },
                        ..
                    }
                )
            })
            .count()
    }

    /// Number of tile moves
    pub fn relocation_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, CascadeEvent::TileRelocated { .. }))
            .count()
    }

    /// Number of matches detected
    pub fn match_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, CascadeEvent::MatchFound { .. }))
            .count()
    }

    /// Highest rescan generation that found a match, 0 when none did
    pub fn longest_chain(&self) -> usize {
        self.events
            .iter()
            .filter_map(|event| match event {
                CascadeEvent::MatchFound { chain, .. } => Some(*chain),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Check if the log ends with `CascadeSettled`
    pub fn is_settled(&self) -> bool {
        matches!(self.events.last(), Some(CascadeEvent::CascadeSettled))
    }
}

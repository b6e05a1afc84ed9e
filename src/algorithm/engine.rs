//! Stateful cascade engine
//!
//! The engine owns the live grid and exposes a single mutating entry point,
//! [`GridEngine::select_tile`]. A selection removes one tile, collapses its
//! column and rescans it for horizontal matches. Each match removes all of
//! its tiles (collapsing every affected column) and queues the affected
//! columns for a rescan in removal order. Rescans run first in, first out:
//! every rescan queued by one generation of matches runs before any rescan
//! queued by the next, and the generation number is the chain level.
//!
//! Cascades run synchronously to completion. Every match removes at least
//! `MIN_MATCH_LENGTH` tiles, so a cascade finds at most
//! `occupied / MIN_MATCH_LENGTH` matches and its chain level cannot exceed
//! that count.

use std::collections::VecDeque;

use crate::algorithm::collapse::remove_and_collapse;
use crate::algorithm::events::{CascadeEvent, CascadeResult, RemovalCause};
use crate::algorithm::generator::GridSource;
use crate::algorithm::matching::scan_column;
use crate::io::error::{CascadeError, Result, out_of_range};
use crate::spatial::grid::Grid;

/// Lifecycle of an engine session
///
/// A cascade resolves inside a single `select_tile` call, so callers only
/// ever observe the settled phases.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Ready for the next selection
    #[default]
    Stable,
    /// Logically settled, waiting for the caller to finish replaying events
    AwaitingPlayback,
}

/// Engine behaviour switches
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Reject selections after a cascade until `finish_playback` is called
    pub await_playback: bool,
}

/// Owner of the live grid and executor of removal cascades
#[derive(Clone, Debug)]
pub struct GridEngine {
    grid: Grid,
    config: EngineConfig,
    phase: Phase,
}

impl GridEngine {
    /// Start a session on an existing grid
    pub fn new(grid: Grid) -> Self {
        Self::with_config(grid, EngineConfig::default())
    }

    /// Start a session on an existing grid with explicit configuration
    pub const fn with_config(grid: Grid, config: EngineConfig) -> Self {
        Self {
            grid,
            config,
            phase: Phase::Stable,
        }
    }

    /// Start a session on a grid produced by `source`
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the grid source
    pub fn from_source<S>(
        source: &mut S,
        width: usize,
        height: usize,
        palette_size: usize,
    ) -> Result<Self>
    where
        S: GridSource + ?Sized,
    {
        let grid = source.create_grid(width, height, palette_size)?;
        Ok(Self::new(grid))
    }

    /// Read-only view of the live grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Active configuration
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Current lifecycle phase
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the previous cascade is still awaiting playback
    pub const fn is_cascading(&self) -> bool {
        matches!(self.phase, Phase::AwaitingPlayback)
    }

    /// Release the playback gate set by the previous cascade
    ///
    /// Returns `true` if the engine was waiting for playback.
    pub fn finish_playback(&mut self) -> bool {
        let waiting = self.phase == Phase::AwaitingPlayback;
        if waiting {
            self.phase = Phase::Stable;
        }
        waiting
    }

    /// Remove the tile at `(x, y)` and resolve the resulting cascade
    ///
    /// Selecting an empty slot is a no-op returning an empty log. Otherwise
    /// the log starts with the `TileRemoved` of the selection and ends with
    /// `CascadeSettled`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for coordinates outside the grid and
    /// `CascadeInProgress` while awaiting playback; the grid is untouched in
    /// both cases
    pub fn select_tile(&mut self, x: usize, y: usize) -> Result<CascadeResult> {
        if self.phase == Phase::AwaitingPlayback {
            return Err(CascadeError::CascadeInProgress);
        }
        if !self.grid.contains(x, y) {
            return Err(out_of_range(x, y, self.grid.dimensions()));
        }
        if !self.grid.is_occupied(x, y) {
            return Ok(CascadeResult::noop());
        }

        let mut events = Vec::new();
        remove_and_collapse(&mut self.grid, x, y, RemovalCause::Selected, &mut events);
        self.resolve_matches(x, &mut events);
        events.push(CascadeEvent::CascadeSettled);
        debug_assert!(self.grid.positions_consistent(), "tile position drifted");

        self.phase = if self.config.await_playback {
            Phase::AwaitingPlayback
        } else {
            Phase::Stable
        };
        Ok(CascadeResult { events })
    }

    /// Consume the engine, returning the grid in its current state
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Rescan `column` and every column touched by the matches it sets off
    fn resolve_matches(&mut self, column: usize, events: &mut Vec<CascadeEvent>) {
        let mut pending = VecDeque::from([(column, 1_usize)]);

        while let Some((x, chain)) = pending.pop_front() {
            let Some(found) = scan_column(&self.grid, x) else {
                continue;
            };

            events.push(CascadeEvent::MatchFound {
                y: found.y,
                first_x: found.first_x(),
                last_x: found.last_x(),
                tile: found.tile,
                chain,
            });

            for position in found.positions() {
                let removed = remove_and_collapse(
                    &mut self.grid,
                    position.x,
                    position.y,
                    RemovalCause::Matched { chain },
                    events,
                );
                debug_assert!(removed.is_some(), "matched slot already empty");
            }

            pending.extend(found.columns.iter().map(|&next| (next, chain + 1)));
        }
    }
}

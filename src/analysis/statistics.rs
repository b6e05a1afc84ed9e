//! Aggregate counters over the cascades of one or more sessions

use std::fmt;

use crate::algorithm::events::CascadeResult;
use crate::spatial::grid::Grid;

/// Running totals collected from cascade results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStatistics {
    /// Number of sessions folded into these totals
    pub sessions: usize,
    /// Selections issued, including no-ops
    pub selections: usize,
    /// Selections that hit an empty slot
    pub noop_selections: usize,
    /// Tiles removed for any reason
    pub tiles_removed: usize,
    /// Tiles removed as part of a match
    pub tiles_matched: usize,
    /// Tile moves performed by collapses
    pub relocations: usize,
    /// Matches detected
    pub matches: usize,
    /// Highest rescan generation that found a match in any cascade
    pub longest_chain: usize,
    /// Checks that found a tile whose stored position disagreed with its slot
    pub consistency_violations: usize,
}

impl SessionStatistics {
    /// Fold a single cascade into the totals
    pub fn record(&mut self, result: &CascadeResult) {
        self.selections += 1;
        if result.is_noop() {
            self.noop_selections += 1;
            return;
        }
        self.tiles_removed += result.removed_count();
        self.tiles_matched += result.matched_count();
        self.relocations += result.relocation_count();
        self.matches += result.match_count();
        self.longest_chain = self.longest_chain.max(result.longest_chain());
    }

    /// Check the position invariant of `grid`, counting a failure
    ///
    /// Returns `true` when the grid is consistent.
    pub fn record_consistency(&mut self, grid: &Grid) -> bool {
        let consistent = grid.positions_consistent();
        if !consistent {
            self.consistency_violations += 1;
        }
        consistent
    }

    /// Add the totals of another set of statistics
    pub fn merge(&mut self, other: &Self) {
        self.sessions += other.sessions;
        self.selections += other.selections;
        self.noop_selections += other.noop_selections;
        self.tiles_removed += other.tiles_removed;
        self.tiles_matched += other.tiles_matched;
        self.relocations += other.relocations;
        self.matches += other.matches;
        self.longest_chain = self.longest_chain.max(other.longest_chain);
        self.consistency_violations += other.consistency_violations;
    }

    /// Average number of tiles removed per effective selection
    pub fn removed_per_selection(&self) -> f64 {
        let effective = self.selections.saturating_sub(self.noop_selections);
        if effective == 0 {
            return 0.0;
        }
        self.tiles_removed as f64 / effective as f64
    }
}

impl fmt::Display for SessionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sessions:        {}", self.sessions)?;
        writeln!(
            f,
            "selections:      {} ({} no-op)",
            self.selections, self.noop_selections
        )?;
        writeln!(
            f,
            "tiles removed:   {} ({} matched, {:.2} per selection)",
            self.tiles_removed,
            self.tiles_matched,
            self.removed_per_selection()
        )?;
        writeln!(f, "relocations:     {}", self.relocations)?;
        writeln!(f, "matches:         {}", self.matches)?;
        writeln!(f, "longest chain:   {}", self.longest_chain)?;
        write!(f, "violations:      {}", self.consistency_violations)
    }
}

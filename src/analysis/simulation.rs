//! Headless session driver
//!
//! Plays the role of a presentation layer: picks grid coordinates, forwards
//! them to the engine and treats event playback as instantaneous.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::engine::GridEngine;
use crate::algorithm::events::CascadeResult;
use crate::analysis::statistics::SessionStatistics;
use crate::io::configuration::DEFAULT_MAX_SELECTIONS;
use crate::io::error::Result;
use crate::spatial::grid::{Grid, Position};

/// Seeded uniform choice among the occupied slots of a grid
#[derive(Clone, Debug)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Create a deterministic picker
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose an occupied slot, `None` once the grid is empty
    pub fn pick(&mut self, grid: &Grid) -> Option<Position> {
        let occupied = grid.occupied_positions();
        if occupied.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..occupied.len());
        occupied.get(index).copied()
    }
}

/// Where the next selection comes from
#[derive(Clone, Debug)]
enum PickSource {
    Random(RandomPicker),
    Scripted(VecDeque<Position>),
}

/// Engine session driven by random or scripted picks
#[derive(Clone, Debug)]
pub struct Simulation {
    engine: GridEngine,
    picks: PickSource,
    max_selections: usize,
    statistics: SessionStatistics,
}

impl Simulation {
    /// Drive `engine` with seeded random picks among occupied slots
    pub fn random(engine: GridEngine, seed: u64) -> Self {
        Self::with_source(engine, PickSource::Random(RandomPicker::new(seed)))
    }

    /// Drive `engine` with a fixed list of picks, in order
    pub fn scripted(engine: GridEngine, picks: Vec<Position>) -> Self {
        Self::with_source(engine, PickSource::Scripted(picks.into()))
    }

    fn with_source(engine: GridEngine, picks: PickSource) -> Self {
        Self {
            engine,
            picks,
            max_selections: DEFAULT_MAX_SELECTIONS,
            statistics: SessionStatistics {
                sessions: 1,
                ..SessionStatistics::default()
            },
        }
    }

    /// Cap the number of selections issued by [`Simulation::run`]
    #[must_use]
    pub fn with_max_selections(mut self, max_selections: usize) -> Self {
        self.max_selections = max_selections;
        self
    }

    /// Engine being driven
    pub const fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Totals collected so far
    pub const fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    /// Issue the next selection
    ///
    /// Returns `Ok(None)` once the picks are exhausted, the grid is empty or
    /// the selection cap is reached.
    ///
    /// # Errors
    ///
    /// Propagates engine errors such as out-of-range scripted picks
    pub fn step(&mut self) -> Result<Option<CascadeResult>> {
        if self.statistics.selections >= self.max_selections {
            return Ok(None);
        }

        let next = match &mut self.picks {
            PickSource::Random(picker) => picker.pick(self.engine.grid()),
            PickSource::Scripted(queue) => queue.pop_front(),
        };
        let Some(position) = next else {
            return Ok(None);
        };

        let result = self.engine.select_tile(position.x, position.y)?;
        // Playback is instantaneous here
        self.engine.finish_playback();

        self.statistics.record(&result);
        self.statistics.record_consistency(self.engine.grid());
        Ok(Some(result))
    }

    /// Play until [`Simulation::step`] runs out of selections
    ///
    /// # Errors
    ///
    /// Propagates the first engine error
    pub fn run(&mut self) -> Result<SessionStatistics> {
        self.run_with(|_| {})
    }

    /// Play to the end, handing every cascade to `on_cascade`
    ///
    /// # Errors
    ///
    /// Propagates the first engine error
    pub fn run_with<F>(&mut self, mut on_cascade: F) -> Result<SessionStatistics>
    where
        F: FnMut(&CascadeResult),
    {
        while let Some(result) = self.step()? {
            on_cascade(&result);
        }
        Ok(self.statistics)
    }

    /// Consume the simulation, returning the engine
    pub fn into_engine(self) -> GridEngine {
        self.engine
    }
}

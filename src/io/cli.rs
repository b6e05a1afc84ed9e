//! Command-line driver playing seeded sessions without a presentation layer

use crate::algorithm::engine::GridEngine;
use crate::algorithm::generator::{ConstraintAxis, GridGenerator};
use crate::analysis::simulation::Simulation;
use crate::analysis::statistics::SessionStatistics;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_MAX_SELECTIONS, DEFAULT_PALETTE_SIZE, DEFAULT_SEED, DEFAULT_SESSIONS,
    DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::spatial::grid::Position;
use clap::Parser;
use std::fmt;

#[derive(Parser, Debug)]
#[command(name = "tilecascade")]
#[command(
    author,
    version,
    about = "Play seeded tile-matching sessions and report cascade statistics"
)]
/// Command-line arguments for the session driver
pub struct Cli {
    /// Number of columns
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Number of rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of distinct tile types
    #[arg(short, long, default_value_t = DEFAULT_PALETTE_SIZE)]
    pub palette: usize,

    /// Random seed for reproducible grids and picks
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of sessions to play, each seeded from the previous seed plus one
    #[arg(short = 'n', long, default_value_t = DEFAULT_SESSIONS)]
    pub sessions: usize,

    /// Selection cap per session
    #[arg(short, long, default_value_t = DEFAULT_MAX_SELECTIONS)]
    pub max_selections: usize,

    /// Avoid horizontal instead of vertical runs when generating
    #[arg(long)]
    pub horizontal: bool,

    /// Scripted selection, repeatable; replaces random picks for a single session
    #[arg(long = "pick", value_name = "X,Y", value_parser = parse_pick)]
    pub picks: Vec<Position>,

    /// Include the event log of the first session in the report
    #[arg(short, long)]
    pub trace: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation constraint selected by the flags
    pub const fn constraint_axis(&self) -> ConstraintAxis {
        if self.horizontal {
            ConstraintAxis::Horizontal
        } else {
            ConstraintAxis::Vertical
        }
    }

    /// Number of sessions actually played
    pub fn effective_sessions(&self) -> usize {
        if self.picks.is_empty() {
            self.sessions
        } else {
            1
        }
    }
}

/// Parse a scripted pick written as `x,y`
///
/// # Errors
///
/// Returns a message if the value is not two comma-separated integers
pub fn parse_pick(value: &str) -> std::result::Result<Position, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let x = x
        .trim()
        .parse()
        .map_err(|error| format!("invalid column '{x}': {error}"))?;
    let y = y
        .trim()
        .parse()
        .map_err(|error| format!("invalid row '{y}': {error}"))?;
    Ok(Position::new(x, y))
}

/// Outcome of a driver run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Text rendering of the first session's starting grid
    pub initial_grid: String,
    /// Text rendering of the first session's final grid
    pub final_grid: String,
    /// Event lines of the first session, empty unless tracing
    pub trace: Vec<String>,
    /// Totals across all sessions
    pub statistics: SessionStatistics,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "initial grid:")?;
        write!(f, "{}", self.initial_grid)?;
        for line in &self.trace {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "final grid:")?;
        write!(f, "{}", self.final_grid)?;
        write!(f, "{}", self.statistics)
    }
}

/// Plays the sessions described by the CLI arguments
pub struct SessionRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SessionRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Play every session and collect the report
    ///
    /// # Errors
    ///
    /// Returns an error if the grid parameters are invalid, no session is
    /// requested, or a scripted pick falls outside the grid
    pub fn run(&mut self) -> Result<RunReport> {
        let sessions = self.cli.effective_sessions();
        if sessions == 0 {
            return Err(invalid_parameter(
                "sessions",
                &sessions,
                &"at least one session is required",
            ));
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(sessions);
        }

        let mut totals = SessionStatistics::default();
        let mut report = None;

        for index in 0..sessions {
            let seed = self.cli.seed.wrapping_add(index as u64);
            let mut simulation = self.build_simulation(seed)?;
            let initial_grid = simulation.engine().grid().to_string();

            let trace_enabled = self.cli.trace && index == 0;
            let mut trace = Vec::new();
            let mut selection = 0;
            let statistics = simulation.run_with(|result| {
                selection += 1;
                if trace_enabled {
                    trace.push(format!("# selection {selection}"));
                    trace.extend(result.events.iter().map(ToString::to_string));
                }
            })?;
            totals.merge(&statistics);

            if report.is_none() {
                report = Some(RunReport {
                    initial_grid,
                    final_grid: simulation.engine().grid().to_string(),
                    trace,
                    statistics: SessionStatistics::default(),
                });
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_session(&totals);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let mut report = report.ok_or_else(|| {
            invalid_parameter("sessions", &sessions, &"no session was played")
        })?;
        report.statistics = totals;
        Ok(report)
    }

    fn build_simulation(&self, seed: u64) -> Result<Simulation> {
        let mut generator = GridGenerator::new(seed).with_axis(self.cli.constraint_axis());
        let engine = GridEngine::from_source(
            &mut generator,
            self.cli.width,
            self.cli.height,
            self.cli.palette,
        )?;

        let simulation = if self.cli.picks.is_empty() {
            Simulation::random(engine, !seed)
        } else {
            Simulation::scripted(engine, self.cli.picks.clone())
        };
        Ok(simulation.with_max_selections(self.cli.max_selections))
    }
}

//! Tile-matching grid engine with removal, collapse and chained horizontal matches
//!
//! A [`GridGenerator`](algorithm::GridGenerator) builds a starting grid free of
//! runs of three along its constraint axis. A [`GridEngine`](algorithm::GridEngine)
//! owns that grid and resolves each selection into an ordered event log that a
//! presentation layer can replay.

#![forbid(unsafe_code)]

/// Grid generation, collapse, matching and the cascade engine
pub mod algorithm;
/// Session statistics and simulated play
pub mod analysis;
/// Errors, configuration and the command-line driver
pub mod io;
/// Grid storage and tile value types
pub mod spatial;

pub use algorithm::{CascadeEvent, CascadeResult, GridEngine, GridGenerator};
pub use io::error::{CascadeError, Result};
pub use spatial::{Grid, Position, TileType};

//! Engine constants and runtime configuration defaults

/// Minimum horizontal run length treated as a match
pub const MIN_MATCH_LENGTH: usize = 3;

// Generation never places a third identical tile after this many
/// Longest run of identical tiles the generator allows along its constraint axis
pub const MAX_GENERATED_RUN: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Largest palette a `TileType` can index
pub const MAX_PALETTE_SIZE: usize = 256;

// Default values for configurable parameters
/// Default number of columns
pub const DEFAULT_WIDTH: usize = 10;

/// Default number of rows
pub const DEFAULT_HEIGHT: usize = 10;

/// Default number of distinct tile types
pub const DEFAULT_PALETTE_SIZE: usize = 4;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of simulated sessions
pub const DEFAULT_SESSIONS: usize = 1;

/// Default selection cap per simulated session
pub const DEFAULT_MAX_SELECTIONS: usize = 1000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Sessions below this count are run without a progress bar
pub const MIN_SESSIONS_FOR_PROGRESS: usize = 2;

// Text rendering
/// Glyph used for empty cells in text output
pub const EMPTY_GLYPH: char = '.';

/// Tile removal and column collapse
pub mod collapse;
/// Stateful cascade engine
pub mod engine;
/// Event log emitted by cascades
pub mod events;
/// Initial grid generation and the grid source seam
pub mod generator;
/// Horizontal match detection
pub mod matching;

pub use engine::{EngineConfig, GridEngine, Phase};
pub use events::{CascadeEvent, CascadeResult, RemovalCause};
pub use generator::{ConstraintAxis, GridGenerator, GridSource, create_grid};

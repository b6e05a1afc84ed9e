/// Seeded session driver standing in for a presentation layer
pub mod simulation;
/// Aggregate counters over cascade results
pub mod statistics;

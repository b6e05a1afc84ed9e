/// Command-line driver for simulated sessions
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress display for multi-session runs
pub mod progress;

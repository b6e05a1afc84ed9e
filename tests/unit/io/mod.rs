pub mod cli;
pub mod progress;

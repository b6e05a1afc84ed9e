//! CLI entry point for headless tile-matching sessions

use clap::Parser;
use tilecascade::io::cli::{Cli, SessionRunner};

// The report is the program's output
#[allow(clippy::print_stdout)]
fn main() -> tilecascade::Result<()> {
    let cli = Cli::parse();
    let mut runner = SessionRunner::new(cli);
    let report = runner.run()?;
    println!("{report}");
    Ok(())
}

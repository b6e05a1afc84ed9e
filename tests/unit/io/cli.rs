//! Tests for command-line parsing and the session runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tilecascade::algorithm::generator::ConstraintAxis;
    use tilecascade::io::cli::{Cli, SessionRunner, parse_pick};
    use tilecascade::io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_MAX_SELECTIONS, DEFAULT_PALETTE_SIZE, DEFAULT_SEED,
        DEFAULT_SESSIONS, DEFAULT_WIDTH,
    };
    use tilecascade::spatial::grid::Position;
    use tilecascade::CascadeError;

    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert_eq!(cli.palette, DEFAULT_PALETTE_SIZE);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.sessions, DEFAULT_SESSIONS);
        assert_eq!(cli.max_selections, DEFAULT_MAX_SELECTIONS);
        assert!(cli.picks.is_empty());
        assert!(!cli.trace);
        assert!(cli.should_show_progress());
        assert_eq!(cli.constraint_axis(), ConstraintAxis::Vertical);
    }

    // Verified by modifying parse_pick to ensure it is invoked
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--width",
            "6",
            "-H",
            "4",
            "--palette",
            "5",
            "--seed",
            "123",
            "--sessions",
            "3",
            "--max-selections",
            "50",
            "--horizontal",
            "--pick",
            "1,2",
            "--pick",
            "0, 3",
            "--trace",
            "--quiet",
        ]);

        assert_eq!((cli.width, cli.height, cli.palette), (6, 4, 5));
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.max_selections, 50);
        assert_eq!(cli.picks, vec![Position::new(1, 2), Position::new(0, 3)]);
        assert_eq!(cli.constraint_axis(), ConstraintAxis::Horizontal);
        assert_eq!(cli.effective_sessions(), 1);
        assert!(cli.trace);
        assert!(!cli.should_show_progress());
    }

    #[test]
    fn test_parse_pick_rejects_malformed_values() {
        assert_eq!(parse_pick("4,7"), Ok(Position::new(4, 7)));
        assert!(parse_pick("4").is_err());
        assert!(parse_pick("a,1").is_err());
        assert!(parse_pick("1,-1").is_err());
        assert!(Cli::try_parse_from(["program", "--pick", "x"]).is_err());
    }

    #[test]
    fn test_runner_aggregates_sessions() {
        let cli = Cli::parse_from([
            "program", "-W", "4", "-H", "4", "-p", "3", "-n", "3", "--quiet",
        ]);
        let mut runner = SessionRunner::new(cli);

        let report = runner.run().expect("valid parameters");

        assert_eq!(report.statistics.sessions, 3);
        assert_eq!(report.statistics.tiles_removed, 48);
        assert_eq!(report.statistics.consistency_violations, 0);
        assert!(report.trace.is_empty());
        assert_eq!(report.initial_grid.lines().count(), 4);
        assert_eq!(report.final_grid, "....\n....\n....\n....\n");
    }

    // Verified by tracing every session instead of the first
    #[test]
    fn test_runner_traces_scripted_picks() {
        let cli = Cli::parse_from([
            "program", "-W", "3", "-H", "3", "--pick", "0,2", "--pick", "0,2", "--trace", "-q",
        ]);
        let mut runner = SessionRunner::new(cli);

        let report = runner.run().expect("valid parameters");

        assert_eq!(report.statistics.selections, 2);
        assert_eq!(report.statistics.noop_selections, 1);
        assert_eq!(report.trace.first().map(String::as_str), Some("# selection 1"));
        assert!(report.trace.iter().any(|line| line == "# selection 2"));
        assert!(report.to_string().starts_with("initial grid:\n"));
    }

    #[test]
    fn test_runner_rejects_invalid_parameters() {
        let no_sessions = Cli::parse_from(["program", "-n", "0", "-q"]);
        assert!(matches!(
            SessionRunner::new(no_sessions).run(),
            Err(CascadeError::InvalidParameter {
                parameter: "sessions",
                ..
            })
        ));

        let no_palette = Cli::parse_from(["program", "-p", "0", "-q"]);
        assert!(SessionRunner::new(no_palette).run().is_err());

        let no_width = Cli::parse_from(["program", "-W", "0", "-q"]);
        assert!(matches!(
            SessionRunner::new(no_width).run(),
            Err(CascadeError::InvalidDimensions { .. })
        ));
    }
}

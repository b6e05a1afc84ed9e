//! Tests for horizontal match detection and column scans

#[cfg(test)]
mod tests {
    use tilecascade::algorithm::matching::{match_at, scan_column};
    use tilecascade::spatial::grid::{Grid, Position, TileType};

    const A: TileType = TileType::new(0);
    const B: TileType = TileType::new(1);
    const C: TileType = TileType::new(2);

    fn grid(text: &str) -> Grid {
        text.parse().expect("valid grid text")
    }

    // Verified by skipping the left walk
    #[test]
    fn test_match_walks_left_then_right() {
        let row = grid("AAABA");

        let from_left = match_at(&row, 0, 0).expect("run of three");
        assert_eq!(from_left.columns, vec![0, 1, 2]);

        let from_right = match_at(&row, 2, 0).expect("run of three");
        assert_eq!(from_right.columns, vec![2, 1, 0]);
        assert_eq!(from_right.tile, A);
        assert_eq!(from_right.origin_x(), Some(2));
    }

    // Verified by capping the walk at MIN_MATCH_LENGTH tiles
    #[test]
    fn test_match_collects_entire_run() {
        let row = grid("AAAAA");

        let found = match_at(&row, 2, 0).expect("run of five");
        assert_eq!(found.len(), 5);
        assert_eq!(found.columns, vec![2, 1, 0, 3, 4]);
        assert_eq!((found.first_x(), found.last_x()), (0, 4));
        assert_eq!(
            found.positions().collect::<Vec<_>>(),
            vec![
                Position::new(2, 0),
                Position::new(1, 0),
                Position::new(0, 0),
                Position::new(3, 0),
                Position::new(4, 0),
            ]
        );
    }

    #[test]
    fn test_short_runs_do_not_match() {
        let row = grid("AAABA");

        assert_eq!(match_at(&row, 3, 0), None);
        assert_eq!(match_at(&row, 4, 0), None);
    }

    // Verified by treating empty slots as wildcards
    #[test]
    fn test_empty_slot_breaks_run() {
        let row = grid("A.AA");

        assert_eq!(match_at(&row, 2, 0), None);
        assert_eq!(match_at(&row, 1, 0), None);
    }

    // Vertical runs never match
    // Verified by adding a vertical walk to match_at
    #[test]
    fn test_vertical_runs_are_ignored() {
        let column = grid("A\nA\nA");
        assert_eq!(scan_column(&column, 0), None);
    }

    // Verified by scanning the column top to bottom
    #[test]
    fn test_scan_reports_lowest_match_only() {
        let board = grid("BBB\nAAA");

        let found = scan_column(&board, 1).expect("two stacked runs");
        assert_eq!(found.y, 0);
        assert_eq!(found.tile, A);
        assert_eq!(found.columns, vec![1, 0, 2]);
    }

    #[test]
    fn test_scan_moves_past_rows_without_match() {
        let board = grid("CCC\nABA");

        let found = scan_column(&board, 0).expect("run on the top row");
        assert_eq!(found.y, 1);
        assert_eq!(found.tile, C);
    }

    #[test]
    fn test_scan_outside_grid_finds_nothing() {
        let board = grid("BBB");
        assert_eq!(scan_column(&board, 3), None);
        assert!(scan_column(&board, 0).is_some_and(|found| found.tile == B));
    }
}

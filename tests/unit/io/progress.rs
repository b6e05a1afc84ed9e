//! Tests for session progress display

#[cfg(test)]
mod tests {
    use tilecascade::analysis::statistics::SessionStatistics;
    use tilecascade::io::configuration::MIN_SESSIONS_FOR_PROGRESS;
    use tilecascade::io::progress::ProgressManager;

    #[test]
    fn test_new_manager_is_idle() {
        let pm = ProgressManager::default();
        assert!(!pm.is_active());
    }

    // Verified by always creating the bar in initialize
    #[test]
    fn test_single_session_shows_no_bar() {
        let mut pm = ProgressManager::new();
        pm.initialize(MIN_SESSIONS_FOR_PROGRESS - 1);
        assert!(!pm.is_active());
    }

    #[test]
    fn test_batch_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(MIN_SESSIONS_FOR_PROGRESS + 3);
        assert!(pm.is_active());

        let totals = SessionStatistics::default();
        for _ in 0..MIN_SESSIONS_FOR_PROGRESS + 3 {
            pm.complete_session(&totals);
        }
        pm.finish();
        assert!(pm.is_active());
    }
}

//! Progress display for multi-session runs

use crate::analysis::statistics::SessionStatistics;
use crate::io::configuration::{MIN_SESSIONS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SESSION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Sessions: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Session progress bar, shown only for batches large enough to need one
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an idle progress manager
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Prepare the bar for `sessions` sessions
    pub fn initialize(&mut self, sessions: usize) {
        if sessions < MIN_SESSIONS_FOR_PROGRESS {
            return;
        }
        let bar = ProgressBar::new(sessions as u64);
        bar.set_style(SESSION_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Check if a bar is being displayed
    pub const fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Advance the bar after a session and show the running totals
    pub fn complete_session(&self, totals: &SessionStatistics) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            bar.set_message(format!(
                "{} removed, chain {}",
                totals.tiles_removed, totals.longest_chain
            ));
        }
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

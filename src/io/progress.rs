//! Progress display while column reports are computed

use crate::io::configuration::{GRID_ROWS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Columns: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many column counts have been reported
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar over `total` column counts
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a manager that draws nothing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Mark one more column count as done
    pub fn complete_column(&self, columns: usize) {
        self.bar.set_message(format!("{GRID_ROWS}x{columns}"));
        self.bar.inc(1);
    }

    /// Run `emit` with the bar temporarily cleared from the terminal
    pub fn suspend<F: FnOnce() -> R, R>(&self, emit: F) -> R {
        self.bar.suspend(emit)
    }

    /// Number of column counts completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Number of column counts the bar spans
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

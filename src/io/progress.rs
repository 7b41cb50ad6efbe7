//! Relaxation progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PASS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "Relaxing [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] pass {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the relaxation pass budget
///
/// Relaxation usually converges well before the budget, so the bar
/// finishes early with a summary message instead of filling.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar sized to the pass budget
    pub fn new(max_passes: usize) -> Self {
        let bar = ProgressBar::new(max_passes as u64);
        bar.set_style(PASS_STYLE.clone());
        Self { bar }
    }

    /// Report a completed pass
    pub fn update(&self, pass: usize) {
        self.bar.set_position(pass as u64);
    }

    /// Finish the bar with a convergence summary
    pub fn finish(&self, converged: bool) {
        if converged {
            self.bar.finish_with_message("settled");
        } else {
            self.bar.finish_with_message("pass budget exhausted");
        }
    }
}

use crate::constants::{PROGRESS_BAR_WIDTH, PROGRESS_CHARS};
use crate::logger;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Single-line progress display for a run.
///
/// Each `report` redraws the same line: a fixed-width bar, the percentage
/// rounded to one decimal, and a message.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Draws on stdout, next to the rest of the run's output, unless the
    /// logger is in quiet mode.
    pub fn new() -> Self {
        if logger::is_quiet() {
            return Self::hidden();
        }
        Self::with_target(ProgressDrawTarget::stdout())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        bar.set_style(bar_style());
        Self { bar }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn report(&self, count: usize, total: usize, message: &str) {
        self.bar.set_length(total as u64);
        self.bar.set_position(count.min(total) as u64);
        self.bar
            .set_message(format!("{:.1}% - {}", percentage(count, total), message));
    }

    /// Draws the bar at 100% and ends the line.
    pub fn finish(&self, message: &str) {
        let total = self.bar.length().unwrap_or(0).max(1);
        self.bar.set_length(total);
        self.bar.set_position(total);
        self.bar.finish_with_message(format!("{:.1}% - {}", 100.0, message));
    }

    /// Removes the bar without completing it, for aborted or failed runs.
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn bar_style() -> ProgressStyle {
    let template = format!("[{{bar:{}}}] {{msg}}", PROGRESS_BAR_WIDTH);
    ProgressStyle::with_template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(PROGRESS_CHARS)
}

/// `100 * count / total`, rounded to one decimal place.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (1000.0 * count as f64 / total as f64).round() / 10.0
}

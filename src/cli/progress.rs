use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::management::StatusReporter;

/// Shows the status lines of a collage run on a terminal spinner.
pub struct SpinnerReporter {
    pb: ProgressBar,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        Self { pb }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter for SpinnerReporter {
    fn status(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }
}

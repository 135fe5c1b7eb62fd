//! Progress bar display for the SDK clone

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for the clone transfer
pub struct CloneProgress {
    pb: ProgressBar,
}

impl CloneProgress {
    /// Create a new clone progress bar (length set on first update)
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} objects {msg}")
            .unwrap()
            .progress_chars("#>-");

        let pb = ProgressBar::new(0);
        pb.set_style(style);

        Self { pb }
    }

    /// Update from a git transfer progress callback
    pub fn update(&self, received: usize, total: usize) {
        self.pb.set_length(total as u64);
        self.pb.set_position(received as u64);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}

impl Default for CloneProgress {
    fn default() -> Self {
        Self::new()
    }
}

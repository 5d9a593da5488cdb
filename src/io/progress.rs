//! Progress display for tile loading and mosaic composition

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>9} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Creates the bars for each run phase, or hidden ones when quiet
#[derive(Debug, Clone, Copy)]
pub struct ProgressManager {
    visible: bool,
}

impl ProgressManager {
    /// Create a progress manager
    pub const fn new(visible: bool) -> Self {
        Self { visible }
    }

    /// Whether bars are drawn
    pub const fn is_visible(self) -> bool {
        self.visible
    }

    /// Bar counting tiles loaded out of `total`
    pub fn loading_bar(self, total: usize) -> ProgressBar {
        self.phase_bar("tiles", total)
    }

    /// Bar counting source columns composed out of `columns`
    pub fn compose_bar(self, columns: u32) -> ProgressBar {
        self.phase_bar("columns", columns as usize)
    }

    fn phase_bar(self, prefix: &'static str, total: usize) -> ProgressBar {
        if !self.visible {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(prefix);
        bar
    }
}

//! Acceptability rules layered over the intensity search
//!
//! The binary search in [`SortedCatalog`](crate::catalog::SortedCatalog) only
//! knows about intensities. Whether an in-tolerance tile may actually be used,
//! where to look for a substitute and what to do when the substitute window is
//! exhausted are all decided here.

use crate::catalog::tile::Tile;
use crate::io::configuration::{FALLBACK_WINDOW_RADIUS, USAGE_CAP};
use std::ops::Range;

/// Behavior when every in-tolerance tile of the local window is overused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum WindowMiss {
    /// Keep narrowing the binary search as if the midpoint had not matched
    ///
    /// A suitable tile outside the window can be missed this way, and the
    /// search may end on the index 0 fallback.
    #[default]
    KeepNarrowing,
    /// Return the closest acceptable in-tolerance tile of the whole catalog
    NearestAcceptable,
}

/// Usage cap, substitute window and window-miss strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Highest usage count a tile may have and still be selected
    pub usage_cap: usize,
    /// Distance scanned on each side of an overused midpoint
    pub window_radius: usize,
    /// What to do once the window yields nothing
    pub on_window_miss: WindowMiss,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            usage_cap: USAGE_CAP,
            window_radius: FALLBACK_WINDOW_RADIUS,
            on_window_miss: WindowMiss::KeepNarrowing,
        }
    }
}

impl SelectionPolicy {
    /// Whether `tile` has not yet exceeded the usage cap
    pub const fn accepts(&self, tile: &Tile) -> bool {
        tile.usage_count() <= self.usage_cap
    }

    /// Indices `[mid - radius, mid + radius)` clamped to `[0, len)`
    pub const fn window(&self, mid: usize, len: usize) -> Range<usize> {
        let start = mid.saturating_sub(self.window_radius);
        let end = mid.saturating_add(self.window_radius);
        let end = if end < len { end } else { len };
        start..end
    }
}

/// Whether `intensity` lies within `tolerance` of `target`
pub const fn within_tolerance(target: f64, intensity: f64, tolerance: f64) -> bool {
    (target - intensity).abs() <= tolerance
}

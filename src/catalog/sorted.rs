//! Frozen, intensity-ordered catalog queried during composition

use crate::catalog::policy::{SelectionPolicy, WindowMiss, within_tolerance};
use crate::catalog::tile::Tile;
use crate::io::error::{Result, out_of_range};

/// Tiles in ascending intensity order with a selection policy
///
/// Only reachable through [`TileCatalog::into_sorted`](crate::catalog::TileCatalog::into_sorted),
/// so the order the search relies on always holds. Usage counters are the
/// only mutable state.
#[derive(Debug, Clone)]
pub struct SortedCatalog {
    tiles: Vec<Tile>,
    capacity: usize,
    width: u32,
    height: u32,
    policy: SelectionPolicy,
}

impl SortedCatalog {
    pub(crate) fn from_sorted_parts(
        tiles: Vec<Tile>,
        capacity: usize,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            tiles,
            capacity,
            width,
            height,
            policy: SelectionPolicy::default(),
        }
    }

    /// Replace the selection policy
    #[must_use]
    pub const fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active selection policy
    pub const fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    /// Index of the tile to place for a pixel of intensity `target`
    ///
    /// Binary search for a tile within `tolerance`. An overused midpoint is
    /// replaced by the first acceptable in-tolerance tile of its local window;
    /// when the window has none, [`WindowMiss`] decides how to continue.
    /// Falls back to index 0 when the search is exhausted.
    pub fn nearest_match(&self, target: f64, tolerance: f64) -> usize {
        let mut lo = 0usize;
        let mut hi = self.tiles.len();

        // `hi` is exclusive here, so `lo < hi` mirrors an inclusive `lo <= hi - 1`
        while lo < hi {
            let mid = lo + (hi - 1 - lo) / 2;
            let Some(tile) = self.tiles.get(mid) else {
                break;
            };
            let intensity = tile.average_intensity();

            if within_tolerance(target, intensity, tolerance) {
                if self.policy.accepts(tile) {
                    return mid;
                }
                if let Some(index) = self.scan_window(mid, target, tolerance) {
                    return index;
                }
                if self.policy.on_window_miss == WindowMiss::NearestAcceptable {
                    return self.nearest_acceptable(target, tolerance).unwrap_or(0);
                }
            }

            if intensity > target {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }

        0
    }

    fn scan_window(&self, mid: usize, target: f64, tolerance: f64) -> Option<usize> {
        let window = self.policy.window(mid, self.tiles.len());
        let start = window.start;
        self.tiles
            .get(window)?
            .iter()
            .position(|tile| self.is_candidate(tile, target, tolerance))
            .map(|offset| start + offset)
    }

    fn nearest_acceptable(&self, target: f64, tolerance: f64) -> Option<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| self.is_candidate(tile, target, tolerance))
            .map(|(index, tile)| (index, (target - tile.average_intensity()).abs()))
            .fold(None, |best: Option<(usize, f64)>, (index, distance)| match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((index, distance)),
            })
            .map(|(index, _)| index)
    }

    const fn is_candidate(&self, tile: &Tile, target: f64, tolerance: f64) -> bool {
        within_tolerance(target, tile.average_intensity(), tolerance) && self.policy.accepts(tile)
    }

    /// Count one placement of the tile at `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= size()`
    pub fn record_use(&mut self, index: usize) -> Result<()> {
        let len = self.tiles.len();
        let tile = self
            .tiles
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, len))?;
        tile.record_use();
        Ok(())
    }

    /// Tile at `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= size()`
    pub fn get(&self, index: usize) -> Result<&Tile> {
        self.tiles
            .get(index)
            .ok_or_else(|| out_of_range(index, self.tiles.len()))
    }

    /// All tiles in ascending intensity order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Sum of every tile's usage count
    pub fn total_usage(&self) -> usize {
        self.tiles.iter().map(Tile::usage_count).sum()
    }

    /// Number of tiles present
    pub const fn size(&self) -> usize {
        self.tiles.len()
    }

    /// Length of the backing storage
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Catalog-wide tile width
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Catalog-wide tile height
    pub const fn height(&self) -> u32 {
        self.height
    }
}

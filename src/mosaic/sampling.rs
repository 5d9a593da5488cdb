//! Catalog population from a directory of candidate tile images
//!
//! Entries are taken in file-name order. The first one is the model tile
//! fixing the catalog dimensions; the following ones fill the catalog up to
//! the sampling cap derived from the reference image's pixel count.

use crate::catalog::{SortedCatalog, Tile, TileCatalog};
use crate::io::configuration::SAMPLING_PERCENT;
use crate::io::error::{Result, out_of_range};
use crate::io::image::{list_entries, load_image};
use image::RgbImage;
use indicatif::ProgressBar;
use std::path::Path;

/// What to do when the directory holds fewer entries than the sampling cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shortage {
    /// Warn and load every available entry
    #[default]
    Clamp,
    /// Abort with `IndexOutOfRange` at the first missing entry
    Fail,
}

/// How many directory entries to load and how to handle a short directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingPolicy {
    /// Share of reference pixels, in percent, to load as tiles
    pub percent: u64,
    /// Short directory handling
    pub shortage: Shortage,
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self {
            percent: SAMPLING_PERCENT,
            shortage: Shortage::Clamp,
        }
    }
}

/// Number of tiles to load for a `width` x `height` reference image
///
/// `ceil(percent / 100 * width * height)`, computed exactly.
pub fn sampling_cap(width: u32, height: u32, percent: u64) -> usize {
    let pixels = u64::from(width) * u64::from(height);
    let cap = pixels.saturating_mul(percent).div_ceil(100);
    usize::try_from(cap).unwrap_or(usize::MAX)
}

/// Load tiles from `dir` and return them as a searchable catalog
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be read
/// - The directory is empty (`IndexOutOfRange`)
/// - The directory is shorter than the sampling cap under [`Shortage::Fail`]
/// - Any selected entry fails to decode, or decodes to an empty image
pub fn build_catalog(
    dir: &Path,
    reference: &RgbImage,
    policy: &SamplingPolicy,
) -> Result<SortedCatalog> {
    build_catalog_with_progress(dir, reference, policy, &ProgressBar::hidden())
}

/// [`build_catalog`] reporting each loaded tile on `progress`
///
/// # Errors
///
/// Same conditions as [`build_catalog`]
pub fn build_catalog_with_progress(
    dir: &Path,
    reference: &RgbImage,
    policy: &SamplingPolicy,
    progress: &ProgressBar,
) -> Result<SortedCatalog> {
    let entries = list_entries(dir)?;
    let cap = sampling_cap(reference.width(), reference.height(), policy.percent);

    let Some(model_path) = entries.first() else {
        return Err(out_of_range(0, 0));
    };

    let take = if entries.len() >= cap {
        cap.max(1)
    } else {
        match policy.shortage {
            Shortage::Fail => return Err(out_of_range(entries.len(), entries.len())),
            Shortage::Clamp => {
                tracing::warn!(
                    dir = %dir.display(),
                    available = entries.len(),
                    cap,
                    "Tiles directory is shorter than the sampling cap, using every entry"
                );
                entries.len()
            }
        }
    };

    progress.set_length(take as u64);

    let mut catalog = TileCatalog::new(Tile::new(load_image(model_path)?)?);
    progress.inc(1);

    for (index, path) in entries.iter().enumerate().take(take).skip(1) {
        catalog.insert(Tile::new(load_image(path)?)?, index)?;
        progress.inc(1);
    }

    tracing::debug!(
        tiles = catalog.size(),
        capacity = catalog.capacity(),
        width = catalog.width(),
        height = catalog.height(),
        "Tile catalog loaded"
    );
    progress.finish_and_clear();

    Ok(catalog.into_sorted())
}

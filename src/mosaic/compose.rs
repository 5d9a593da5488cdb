//! Pixel-by-pixel mosaic assembly
//!
//! The output holds one catalog-sized block per source pixel, so its memory
//! grows with source resolution times tile resolution. No ceiling is applied.

use crate::catalog::{SortedCatalog, Tile};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::mosaic::intensity::intensity_sample;
use image::{RgbImage, imageops};
use indicatif::ProgressBar;
use ndarray::Array2;

/// Assembled mosaic and the catalog index chosen for every source pixel
#[derive(Debug, Clone)]
pub struct Mosaic {
    image: RgbImage,
    assignments: Array2<usize>,
}

impl Mosaic {
    /// Output image
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Catalog indices indexed by source `(row, col)`
    pub const fn assignments(&self) -> &Array2<usize> {
        &self.assignments
    }

    /// Catalog index chosen for source pixel `(x, y)`
    pub fn assignment(&self, x: u32, y: u32) -> Option<usize> {
        self.assignments.get((y as usize, x as usize)).copied()
    }

    /// Take the output image
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

/// Replace every pixel of `source` by a catalog tile of matching intensity
///
/// # Errors
///
/// Returns an error if:
/// - `tolerance` is negative or NaN (checked before allocating)
/// - The output dimensions overflow `u32`
/// - A chosen tile is smaller than the catalog dimensions
pub fn compose_mosaic(
    source: &RgbImage,
    catalog: &mut SortedCatalog,
    tolerance: f64,
) -> Result<Mosaic> {
    compose_mosaic_with_progress(source, catalog, tolerance, &ProgressBar::hidden())
}

/// [`compose_mosaic`] advancing `progress` once per source column
///
/// # Errors
///
/// Same conditions as [`compose_mosaic`]
pub fn compose_mosaic_with_progress(
    source: &RgbImage,
    catalog: &mut SortedCatalog,
    tolerance: f64,
    progress: &ProgressBar,
) -> Result<Mosaic> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(invalid_parameter(
            "tolerance",
            &tolerance,
            &"must be a non-negative number",
        ));
    }

    let (source_width, source_height) = source.dimensions();
    let (tile_width, tile_height) = (catalog.width(), catalog.height());
    let output_width = scaled_dimension("width", source_width, tile_width)?;
    let output_height = scaled_dimension("height", source_height, tile_height)?;

    let mut output = RgbImage::new(output_width, output_height);
    let mut assignments = Array2::zeros((source_height as usize, source_width as usize));
    progress.set_length(u64::from(source_width));

    for x in 0..source_width {
        for y in 0..source_height {
            let sample = intensity_sample(source.get_pixel(x, y));
            let index = catalog.nearest_match(f64::from(sample), tolerance);

            stamp_tile(
                catalog.get(index)?,
                &mut output,
                (tile_width, tile_height),
                (x * tile_width, y * tile_height),
            )?;
            catalog.record_use(index)?;

            if let Some(cell) = assignments.get_mut((y as usize, x as usize)) {
                *cell = index;
            }
        }
        progress.inc(1);
    }

    tracing::debug!(
        width = output_width,
        height = output_height,
        placements = catalog.total_usage(),
        "Mosaic composed"
    );
    progress.finish_and_clear();

    Ok(Mosaic {
        image: output,
        assignments,
    })
}

fn scaled_dimension(axis: &'static str, source: u32, tile: u32) -> Result<u32> {
    source.checked_mul(tile).ok_or_else(|| {
        invalid_parameter(
            axis,
            &format!("{source} x {tile}"),
            &"mosaic dimension exceeds the supported image size",
        )
    })
}

// Copies the top-left `block` region of the tile; larger tiles are cropped
fn stamp_tile(
    tile: &Tile,
    output: &mut RgbImage,
    block: (u32, u32),
    offset: (u32, u32),
) -> Result<()> {
    if tile.width() < block.0 || tile.height() < block.1 {
        return Err(MosaicError::TileTooSmall {
            expected: block,
            actual: (tile.width(), tile.height()),
        });
    }

    let region = imageops::crop_imm(tile.image(), 0, 0, block.0, block.1);
    imageops::replace(output, &*region, i64::from(offset.0), i64::from(offset.1));
    Ok(())
}

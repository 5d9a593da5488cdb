//! Mosaic building block carrying its precomputed intensity and usage count

use crate::io::error::Result;
use crate::mosaic::intensity::average_intensity;
use image::RgbImage;

/// A tile image with its average intensity and the number of times it was placed
#[derive(Debug, Clone)]
pub struct Tile {
    image: RgbImage,
    average_intensity: f64,
    usage_count: usize,
}

impl Tile {
    /// Wrap an image as a tile, computing its average intensity once
    ///
    /// # Errors
    ///
    /// Returns `InvalidImage` if the image has zero area
    pub fn new(image: RgbImage) -> Result<Self> {
        let average_intensity = average_intensity(&image)?;
        Ok(Self {
            image,
            average_intensity,
            usage_count: 0,
        })
    }

    /// Pixel buffer of this tile
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Mean intensity sample over every pixel
    pub const fn average_intensity(&self) -> f64 {
        self.average_intensity
    }

    /// Number of times this tile has been placed
    pub const fn usage_count(&self) -> usize {
        self.usage_count
    }

    /// Count one more placement
    pub const fn record_use(&mut self) {
        self.usage_count += 1;
    }
}

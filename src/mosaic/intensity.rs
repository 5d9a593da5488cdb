//! Single-channel brightness proxy used to match pixels against tiles
//!
//! A pixel read as packed `0xAARRGGBB` has its blue component in the low
//! eight bits. That byte is the intensity sample; it is not a luminance.

use crate::io::error::{MosaicError, Result};
use image::{Rgb, RgbImage};

/// Pack a pixel as an opaque `0xAARRGGBB` integer
pub fn packed_argb(pixel: &Rgb<u8>) -> u32 {
    let [r, g, b] = pixel.0;
    0xFF00_0000 | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Low eight bits of the packed color
pub fn intensity_sample(pixel: &Rgb<u8>) -> u8 {
    (packed_argb(pixel) & 0xFF) as u8
}

/// Mean intensity sample over every pixel of `image`
///
/// # Errors
///
/// Returns `InvalidImage` if the image has zero area, where the mean is undefined
pub fn average_intensity(image: &RgbImage) -> Result<f64> {
    let area = u64::from(image.width()) * u64::from(image.height());
    if area == 0 {
        return Err(MosaicError::InvalidImage {
            reason: format!(
                "{}x{} image has no pixels to average",
                image.width(),
                image.height()
            ),
        });
    }

    let sum: u64 = image
        .pixels()
        .map(|pixel| u64::from(intensity_sample(pixel)))
        .sum();

    Ok(sum as f64 / area as f64)
}

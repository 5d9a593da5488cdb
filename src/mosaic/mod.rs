//! Mosaic construction from a source image and a tiles directory

/// Pixel-by-pixel tile stamping
pub mod compose;
/// Intensity samples and image averages
pub mod intensity;
/// Catalog population from a directory of tile images
pub mod sampling;

pub use compose::{Mosaic, compose_mosaic};
pub use intensity::average_intensity;
pub use sampling::{SamplingPolicy, Shortage, build_catalog};

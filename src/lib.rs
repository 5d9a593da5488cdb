//! Photo mosaic generation from a directory of tile images
//!
//! Every pixel of a source image is replaced by a tile whose average
//! intensity is within a tolerance of the pixel's intensity sample. Tiles
//! that were already placed too often are passed over in favor of nearby
//! alternatives.

#![forbid(unsafe_code)]

/// Tile storage, sorting and nearest-match search
pub mod catalog;
/// Input/output operations, configuration and error handling
pub mod io;
/// Catalog population and mosaic composition
pub mod mosaic;

pub use io::error::{ErrorKind, MosaicError, Result};

//! Image decoding, PNG export and tiles directory enumeration

use crate::io::configuration::OUTPUT_FORMAT;
use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Decode the image at `path` into an RGB buffer
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Write `image` as PNG to `output_path`, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, OUTPUT_FORMAT)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Every entry of `dir`, sorted by file name
///
/// No filtering is applied: subdirectories and non-image files are listed
/// too and fail later when decoded.
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be read
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |e: std::io::Error| MosaicError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        entries.push(entry.map_err(read_error)?.path());
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

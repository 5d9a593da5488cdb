//! Error types for catalog construction, tile search and mosaic composition

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Image cannot be used where pixel content is required
    InvalidImage {
        /// Description of what's wrong with the image
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Catalog or directory index outside the valid domain
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of elements available when the access happened
        len: usize,
    },

    /// Tile pixels do not cover the block the catalog dimensions require
    TileTooSmall {
        /// Catalog-wide tile dimensions (width, height)
        expected: (u32, u32),
        /// Dimensions of the offending tile (width, height)
        actual: (u32, u32),
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the generated mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Coarse error categories reported at the command-line boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An image was unusable
    InvalidImage,
    /// A parameter or reference was rejected
    InvalidArgument,
    /// An index fell outside its valid domain
    IndexOutOfRange,
    /// Reading, decoding, encoding or writing failed
    Io,
}

impl MosaicError {
    /// Category of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidImage { .. } => ErrorKind::InvalidImage,
            Self::InvalidParameter { .. } => ErrorKind::InvalidArgument,
            Self::IndexOutOfRange { .. } | Self::TileTooSmall { .. } => {
                ErrorKind::IndexOutOfRange
            }
            Self::ImageLoad { .. } | Self::ImageExport { .. } | Self::FileSystem { .. } => {
                ErrorKind::Io
            }
        }
    }
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidImage { reason } => {
                write!(f, "Invalid image: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} is out of range (length: {len})")
            }
            Self::TileTooSmall { expected, actual } => {
                write!(
                    f,
                    "Tile of {}x{} cannot fill a {}x{} block",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-range error for `index` against a collection of `len` elements
pub const fn out_of_range(index: usize, len: usize) -> MosaicError {
    MosaicError::IndexOutOfRange { index, len }
}

//! Search, sampling and output constants

// Selection policy defaults
/// Prior selections a tile may have and still be accepted
pub const USAGE_CAP: usize = 10;
/// Half-width of the local window scanned when the midpoint tile is overused
pub const FALLBACK_WINDOW_RADIUS: usize = 100;

// Ten uses per tile need 10% of the reference pixels; 15% leaves headroom
/// Share of reference pixels, in percent, loaded as tiles
pub const SAMPLING_PERCENT: u64 = 15;

/// Backing capacity of a freshly created catalog
pub const INITIAL_CATALOG_CAPACITY: usize = 2;

// Output settings
/// Encoding used for the mosaic regardless of the output extension
pub const OUTPUT_FORMAT: image::ImageFormat = image::ImageFormat::Png;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "tilemosaic=warn";

/// Fixed usage text printed with every failure
pub const USAGE_MESSAGE: &str = "Usage: tilemosaic <INPUT> <TILES_DIR> <TOLERANCE> <OUTPUT>\n\
    INPUT must be an existing image, TILES_DIR an existing directory of tile images,\n\
    TOLERANCE a non-negative number and OUTPUT the path of the PNG to write.";

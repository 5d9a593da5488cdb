//! Tests for search, sampling and output constants

#[cfg(test)]
mod tests {
    use tilemosaic::io::configuration::{
        DEFAULT_LOG_FILTER, FALLBACK_WINDOW_RADIUS, INITIAL_CATALOG_CAPACITY, OUTPUT_FORMAT,
        SAMPLING_PERCENT, USAGE_CAP, USAGE_MESSAGE,
    };

    // Tests the usage heuristic constants
    // Verified by changing constant values
    #[test]
    fn test_selection_constants() {
        assert_eq!(USAGE_CAP, 10);
        assert_eq!(FALLBACK_WINDOW_RADIUS, 100);
    }

    // Tests the sampling share leaves headroom above one use per cap
    // Verified by lowering the share to ten percent
    #[test]
    fn test_sampling_headroom() {
        assert_eq!(SAMPLING_PERCENT, 15);
        assert!(SAMPLING_PERCENT as usize * USAGE_CAP > 100);
    }

    // Tests a fresh catalog has room for one insert after the model
    // Verified by starting with capacity one
    #[test]
    fn test_initial_capacity() {
        assert_eq!(INITIAL_CATALOG_CAPACITY, 2);
    }

    // Tests mosaics are always PNG
    // Verified by switching to JPEG
    #[test]
    fn test_output_format() {
        assert_eq!(OUTPUT_FORMAT, image::ImageFormat::Png);
    }

    // Tests the usage text names all four positional arguments
    // Verified by dropping the tolerance from the text
    #[test]
    fn test_usage_message() {
        for name in ["INPUT", "TILES_DIR", "TOLERANCE", "OUTPUT"] {
            assert!(USAGE_MESSAGE.contains(name), "missing {name}");
        }
        assert!(DEFAULT_LOG_FILTER.starts_with("tilemosaic"));
    }
}

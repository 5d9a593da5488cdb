//! Tests for nearest-match search, overuse fallback and usage recording

#[cfg(test)]
mod tests {
    use crate::{sorted_catalog_of, use_tile};
    use tilemosaic::ErrorKind;
    use tilemosaic::catalog::{SelectionPolicy, SortedCatalog, WindowMiss};

    fn intensity_at(catalog: &SortedCatalog, index: usize) -> f64 {
        catalog.get(index).unwrap().average_intensity()
    }

    // Tests an in-tolerance tile is found in a small catalog
    // Verified by narrowing the wrong half on comparison
    #[test]
    fn test_finds_tile_within_tolerance() {
        let catalog = sorted_catalog_of(&[10, 50, 100, 150, 200]);

        for (target, expected) in [(148.0, 150.0), (12.0, 10.0), (200.0, 200.0), (97.0, 100.0)] {
            let index = catalog.nearest_match(target, 5.0);
            assert!(
                (intensity_at(&catalog, index) - expected).abs() < f64::EPSILON,
                "target {target} should match {expected}"
            );
        }
    }

    // Tests the search falls back to index 0 when nothing is within tolerance
    // Verified by returning the last probed midpoint instead
    #[test]
    fn test_fallback_to_first_tile() {
        let catalog = sorted_catalog_of(&[10, 50, 100, 150, 200]);

        assert_eq!(catalog.nearest_match(75.0, 5.0), 0);
        assert_eq!(catalog.nearest_match(255.0, 10.0), 0);
    }

    // Tests every target in a small catalog gets an in-tolerance tile when one exists
    // Verified by skipping the tolerance check at the midpoint
    #[test]
    fn test_small_catalog_exhaustive() {
        let values = [3u8, 40, 41, 90, 128, 129, 200, 250];
        let catalog = sorted_catalog_of(&values);
        let tolerance = 2.0;

        for target in 0..=255u8 {
            let target = f64::from(target);
            let index = catalog.nearest_match(target, tolerance);
            let exists = values
                .iter()
                .any(|&v| (f64::from(v) - target).abs() <= tolerance);

            if exists {
                assert!((intensity_at(&catalog, index) - target).abs() <= tolerance);
            } else {
                assert_eq!(index, 0);
            }
        }
    }

    // Tests an overused midpoint is replaced by an acceptable neighbor in its window
    // Verified by ignoring the usage cap
    #[test]
    fn test_overused_midpoint_uses_window() {
        let mut catalog = sorted_catalog_of(&[90, 100, 101]);
        use_tile(&mut catalog, 1, 11);

        assert_eq!(catalog.nearest_match(100.0, 1.0), 2);
    }

    // Tests a tile at exactly the usage cap is still returned directly
    // Verified by using a strict comparison against the cap
    #[test]
    fn test_usage_cap_is_inclusive() {
        let mut catalog = sorted_catalog_of(&[90, 100, 101]);
        use_tile(&mut catalog, 1, 10);

        assert_eq!(catalog.nearest_match(100.0, 1.0), 1);
    }

    fn crowded_catalog() -> SortedCatalog {
        // Index 1 is the only acceptable exact match and sits outside every probed window
        let mut catalog = sorted_catalog_of(&[0, 100, 100, 100, 100, 100, 200]);
        for index in 2..=5 {
            use_tile(&mut catalog, index, 11);
        }
        catalog
    }

    // Tests the default strategy keeps narrowing after a window miss
    // Verified by returning the nearest acceptable tile instead
    #[test]
    fn test_window_miss_keeps_narrowing() {
        let policy = SelectionPolicy {
            window_radius: 1,
            ..SelectionPolicy::default()
        };
        let catalog = crowded_catalog().with_policy(policy);

        assert_eq!(catalog.nearest_match(100.0, 0.0), 0);
    }

    // Tests the corrected strategy finds the acceptable tile outside the window
    // Verified by keeping the narrowing behavior
    #[test]
    fn test_window_miss_nearest_acceptable() {
        let policy = SelectionPolicy {
            window_radius: 1,
            on_window_miss: WindowMiss::NearestAcceptable,
            ..SelectionPolicy::default()
        };
        let catalog = crowded_catalog().with_policy(policy);

        assert_eq!(catalog.nearest_match(100.0, 0.0), 1);
        assert_eq!(catalog.policy().on_window_miss, WindowMiss::NearestAcceptable);
    }

    // Tests the nearest acceptable tile is the closest one, not the first one
    // Verified by returning the lowest acceptable index
    #[test]
    fn test_nearest_acceptable_prefers_closest() {
        let policy = SelectionPolicy {
            window_radius: 0,
            on_window_miss: WindowMiss::NearestAcceptable,
            ..SelectionPolicy::default()
        };
        let mut catalog = sorted_catalog_of(&[95, 100, 103]).with_policy(policy);
        use_tile(&mut catalog, 1, 11);

        assert_eq!(catalog.nearest_match(101.0, 10.0), 2);
    }

    // Tests a single-tile catalog always answers with that tile
    // Verified by returning out of range when nothing matches
    #[test]
    fn test_single_tile_catalog() {
        let mut catalog = sorted_catalog_of(&[128]);
        use_tile(&mut catalog, 0, 50);

        assert_eq!(catalog.nearest_match(128.0, 0.0), 0);
        assert_eq!(catalog.nearest_match(0.0, 0.0), 0);
    }

    // Tests usage recording and its bounds
    // Verified by incrementing every tile
    #[test]
    fn test_record_use() {
        let mut catalog = sorted_catalog_of(&[10, 20]);

        catalog.record_use(1).unwrap();
        catalog.record_use(1).unwrap();

        assert_eq!(catalog.get(0).unwrap().usage_count(), 0);
        assert_eq!(catalog.get(1).unwrap().usage_count(), 2);
        assert_eq!(catalog.total_usage(), 2);
        assert_eq!(
            catalog.record_use(2).unwrap_err().kind(),
            ErrorKind::IndexOutOfRange
        );
    }
}

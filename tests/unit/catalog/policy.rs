//! Tests for the usage cap predicate and the substitute window bounds

#[cfg(test)]
mod tests {
    use crate::solid_tile;
    use tilemosaic::catalog::policy::within_tolerance;
    use tilemosaic::catalog::{SelectionPolicy, WindowMiss};

    // Tests default values match the documented heuristic
    // Verified by changing the default cap
    #[test]
    fn test_default_policy() {
        let policy = SelectionPolicy::default();

        assert_eq!(policy.usage_cap, 10);
        assert_eq!(policy.window_radius, 100);
        assert_eq!(policy.on_window_miss, WindowMiss::KeepNarrowing);
    }

    // Tests a tile at exactly the cap is still acceptable
    // Verified by using a strict comparison
    #[test]
    fn test_accepts_up_to_cap() {
        let policy = SelectionPolicy::default();
        let mut tile = solid_tile(0);

        for _ in 0..10 {
            tile.record_use();
        }
        assert!(policy.accepts(&tile));

        tile.record_use();
        assert!(!policy.accepts(&tile));
    }

    // Tests the window is clamped on both ends
    // Verified by removing the lower clamp
    #[test]
    fn test_window_clamping() {
        let policy = SelectionPolicy::default();

        assert_eq!(policy.window(5, 50), 0..50);
        assert_eq!(policy.window(150, 1000), 50..250);
        assert_eq!(policy.window(990, 1000), 890..1000);
    }

    // Tests the window end is exclusive
    // Verified by adding one to the upper bound
    #[test]
    fn test_window_radius_one() {
        let policy = SelectionPolicy {
            window_radius: 1,
            ..SelectionPolicy::default()
        };

        assert_eq!(policy.window(3, 7), 2..4);
    }

    // Tests tolerance bound is inclusive
    // Verified by using a strict comparison
    #[test]
    fn test_within_tolerance_inclusive() {
        assert!(within_tolerance(100.0, 105.0, 5.0));
        assert!(within_tolerance(100.0, 95.0, 5.0));
        assert!(!within_tolerance(100.0, 105.5, 5.0));
        assert!(within_tolerance(7.0, 7.0, 0.0));
    }
}

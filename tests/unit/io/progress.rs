//! Tests for phase progress bars and quiet mode

#[cfg(test)]
mod tests {
    use tilemosaic::io::progress::ProgressManager;

    // Tests quiet mode hands out hidden bars
    // Verified by drawing bars regardless of visibility
    #[test]
    fn test_quiet_bars_are_hidden() {
        let manager = ProgressManager::new(false);

        assert!(!manager.is_visible());
        assert!(manager.loading_bar(10).is_hidden());
        assert!(manager.compose_bar(10).is_hidden());
    }

    // Tests visible bars are sized for their phase
    // Verified by ignoring the requested length
    #[test]
    fn test_visible_bar_lengths() {
        let manager = ProgressManager::new(true);

        assert!(manager.is_visible());
        assert_eq!(manager.loading_bar(12).length(), Some(12));
        assert_eq!(manager.compose_bar(640).length(), Some(640));
    }

    // Tests the manager stays usable after handing out bars by value
    // Verified by consuming the manager on the first bar
    #[test]
    fn test_manager_is_reusable() {
        let manager = ProgressManager::new(false);
        let copy = manager;

        let bars = [manager.loading_bar(3), copy.compose_bar(4), manager.loading_bar(5)];

        assert!(bars.iter().all(indicatif::ProgressBar::is_hidden));
        assert_eq!(manager.is_visible(), copy.is_visible());
    }
}

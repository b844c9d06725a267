//! Tests for best-solution bookkeeping

#[cfg(test)]
mod tests {
    use rookstack::algorithm::tracker::BestTracker;
    use rookstack::spatial::HeightGrid;

    // Tests a fresh tracker has nothing to report
    // Verified by starting found as true
    #[test]
    fn test_new_tracker() {
        let tracker = BestTracker::new(3, 0);
        assert_eq!(tracker.best_card(), 0);
        assert!(tracker.improves(1));
        assert!(!tracker.improves(0));
    }

    // Tests the lower bound must be strictly beaten
    // Verified by comparing with >= in improves
    #[test]
    fn test_lower_bound() {
        let tracker = BestTracker::new(3, 5);
        assert!(!tracker.improves(5));
        assert!(tracker.improves(6));
    }

    // Tests recording copies the grid rather than aliasing it
    // Verified by storing the grid only on the first update
    #[test]
    fn test_update_best_copies_grid() {
        let mut tracker = BestTracker::new(2, 0);
        let mut grid = HeightGrid::new(2);
        grid.place(1, 1, 1);
        tracker.update_best(&grid, 1);

        let first = grid.clone();
        grid.place(0, 0, 2);
        let (card, best, history) = tracker.clone().into_parts();
        assert_eq!(card, 1);
        assert_eq!(best, Some(first));
        assert_eq!(history, vec![1]);

        tracker.update_best(&grid, 2);
        assert_eq!(tracker.best_card(), 2);

        let (card, best, history) = tracker.into_parts();
        assert_eq!(card, 2);
        assert_eq!(best, Some(grid));
        assert_eq!(history, vec![1, 2]);
    }

    // Tests into_parts without a recorded grid
    // Verified by always returning the stored grid
    #[test]
    fn test_into_parts_without_grid() {
        let (card, best, history) = BestTracker::new(4, 7).into_parts();
        assert_eq!(card, 7);
        assert!(best.is_none());
        assert!(history.is_empty());
    }
}

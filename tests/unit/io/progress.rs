//! Tests for progress display state transitions

#[cfg(test)]
mod tests {

    use hexmap::io::progress::ProgressManager;

    #[test]
    fn test_small_batch_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(3);

        for index in 0..3 {
            pm.start_location(index, &format!("Place {index}"));
            pm.update_stage(index, 1, "rendering");
            pm.update_stage(index, 3, "cropping");
            pm.complete_location(index, index != 2);
        }

        pm.finish();
    }

    #[test]
    fn test_large_batch_lifecycle() {
        // Above the individual-bar threshold the batch bar takes over
        let mut pm = ProgressManager::new();
        pm.initialize(50);

        for index in 0..50 {
            pm.start_location(index, "Somewhere");
            pm.complete_location(index, true);
        }

        pm.finish();
    }

    #[test]
    fn test_out_of_order_updates_do_not_panic() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        // Stage update for a location that was never started
        pm.update_stage(5, 2, "cropping");
        pm.complete_location(5, false);
        pm.finish();
    }

    #[test]
    fn test_warn_with_and_without_bars() {
        let pm = ProgressManager::new();
        pm.warn("plain warning");

        let mut with_bars = ProgressManager::new();
        with_bars.initialize(1);
        with_bars.warn("warning above bars");
        with_bars.finish();
    }
}

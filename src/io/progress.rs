//! Batch progress display with automatic batching for large location lists

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, STAGES_PER_LOCATION};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for a batch run
///
/// Small batches get one bar per location stepping through the pipeline
/// stages; large batches collapse to a single locations-completed bar to
/// avoid terminal spam.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    location_bars: Vec<ProgressBar>,
    /// Stores (`name`, `stage`, `label`) per location for display
    states: Vec<(String, usize, &'static str)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:12} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Locations: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            location_bars: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Initialize bars for a batch of the given size
    pub fn initialize(&mut self, location_count: usize) {
        if location_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(location_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = location_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(STAGES_PER_LOCATION as u64);
            pb.set_style(STAGE_STYLE.clone());
            self.location_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Begin displaying a location
    pub fn start_location(&mut self, index: usize, name: &str) {
        if index >= self.states.len() {
            self.states.resize(index + 1, (String::new(), 0, ""));
        }
        if let Some(state) = self.states.get_mut(index) {
            *state = (name.to_string(), 0, "starting");
        }
        self.update_bars();
    }

    /// Advance the location to a named pipeline stage
    pub fn update_stage(&mut self, index: usize, stage: usize, label: &'static str) {
        if let Some(state) = self.states.get_mut(index) {
            state.1 = stage;
            state.2 = label;
        }
        self.update_bars();
    }

    /// Mark a location as finished, with an outcome symbol in its label
    pub fn complete_location(&mut self, index: usize, succeeded: bool) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.states.get_mut(index) {
            let symbol = if succeeded { "✓" } else { "✗" };
            state.0 = format!("{symbol} {}", state.0);
            state.1 = STAGES_PER_LOCATION;
            state.2 = "done";
        }
        self.update_bars();
    }

    /// Print a warning line above the bars
    pub fn warn(&self, message: &str) {
        // Routing through MultiProgress keeps bars intact; fall back to
        // stderr when the draw target is detached
        #[allow(clippy::print_stderr)]
        if self.multi_progress.println(message).is_err() {
            eprintln!("{message}");
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All locations processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update bars to show the most recent locations
    fn update_bars(&self) {
        let mut active = Vec::new();
        for (name, stage, label) in &self.states {
            if !name.is_empty() {
                active.push((name.clone(), *stage, *label));
            }
        }

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, stage, label)) in visible.iter().enumerate() {
            if let Some(bar) = self.location_bars.get(bar_idx) {
                bar.set_position(*stage as u64);
                bar.set_message((*label).to_string());
                bar.set_prefix(name.clone());
            }
        }

        for bar_idx in visible.len()..self.location_bars.len() {
            if let Some(bar) = self.location_bars.get(bar_idx) {
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}

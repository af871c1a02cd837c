//! Command-line interface for batch rendering and hex-cropping locations

use crate::geometry::hex_crop;
use crate::io::configuration::{
    DEFAULT_LOCATIONS_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_ZOOM, default_target_pixels,
};
use crate::io::error::{MapError, Result};
use crate::io::locations::{Query, load_locations};
use crate::io::output::{hex_path, render_path, save_png};
use crate::io::progress::ProgressManager;
use crate::render::tiles::MAX_ZOOM;
use crate::render::{MapRenderer, StyleConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hexmap")]
#[command(
    author,
    version,
    about = "Render map images for named locations and crop them to print-ready hexagons"
)]
/// Command-line arguments for the batch pipeline
pub struct Cli {
    /// JSON file mapping location names to addresses or coordinate pairs
    #[arg(value_name = "LOCATIONS", default_value = DEFAULT_LOCATIONS_FILE)]
    pub locations: PathBuf,

    /// Directory for rendered and cropped images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Slippy-map zoom level for rendering
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_ZOOM,
        value_parser = clap::value_parser!(u8).range(..=i64::from(MAX_ZOOM))
    )]
    pub zoom: u8,

    /// Target crop width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Target crop height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process locations even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Target crop dimensions, defaulting to the print-derived size
    pub fn target_size(&self) -> (u32, u32) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => {
                let edge = default_target_pixels();
                (edge, edge)
            }
        }
    }
}

/// Orchestrates sequential processing of the location list
pub struct BatchProcessor {
    cli: Cli,
    renderer: MapRenderer,
    style: StyleConfig,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a processor from parsed CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(cli: Cli) -> Result<Self> {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let style = StyleConfig::default().with_zoom(cli.zoom);
        let renderer = MapRenderer::new()?;

        Ok(Self {
            cli,
            renderer,
            style,
            progress_manager,
        })
    }

    /// Process every location in the file, continuing past per-entry errors
    ///
    /// # Errors
    ///
    /// Returns an error when the locations file cannot be loaded or when
    /// every attempted location fails.
    pub fn process(&mut self) -> Result<()> {
        let loaded = load_locations(&self.cli.locations)?;

        for rejection in &loaded.rejected {
            self.warn(&format!("Skipping: {rejection}"));
        }

        if loaded.entries.is_empty() && loaded.rejected.is_empty() {
            self.warn("No locations to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(loaded.entries.len());
        }

        let mut succeeded = 0usize;
        let mut skipped = 0usize;

        for (index, (name, query)) in loaded.entries.iter().enumerate() {
            if self.cli.skip_existing() && hex_path(&self.cli.output_dir, name).exists() {
                self.warn(&format!("Skipping: {name} (output exists)"));
                skipped += 1;
                continue;
            }

            match self.process_location(index, name, query) {
                Ok(()) => {
                    succeeded += 1;
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.complete_location(index, true);
                    }
                }
                Err(error) => {
                    self.warn(&format!("Failed: {error}"));
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.complete_location(index, false);
                    }
                }
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        let attempted = loaded.entries.len() + loaded.rejected.len() - skipped;
        if succeeded == 0 && skipped == 0 && attempted > 0 {
            return Err(MapError::NoLocationsProcessed { attempted });
        }

        Ok(())
    }

    fn process_location(&mut self, index: usize, name: &str, query: &Query) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_location(index, name);
            pm.update_stage(index, 1, "rendering");
        }

        let rendered = self.renderer.render(query, &self.style)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, 2, "saving map");
        }
        save_png(&rendered, &render_path(&self.cli.output_dir, name))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, 3, "cropping");
        }
        let (target_width, target_height) = self.cli.target_size();
        let cropped = hex_crop(&rendered, target_width, target_height)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, 4, "writing");
        }
        save_png(&cropped, &hex_path(&self.cli.output_dir, name))
    }

    // Warnings go above the bars when they exist, or to stderr otherwise
    #[allow(clippy::print_stderr)]
    fn warn(&self, message: &str) {
        if let Some(ref pm) = self.progress_manager {
            pm.warn(message);
        } else {
            eprintln!("{message}");
        }
    }
}

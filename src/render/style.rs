//! Map style configuration passed to the renderer

use crate::io::configuration::{CANVAS_FILL, DEFAULT_ZOOM, RENDER_PIXELS, TILE_URL_TEMPLATE};

/// Rendering parameters for one map image
///
/// Covers the slippy-map zoom, the square canvas size, the tile endpoint,
/// and the fill color for canvas regions with no tile coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Slippy-map zoom level (0 = whole world per tile)
    pub zoom: u8,
    /// Edge of the square render canvas in pixels
    pub canvas_pixels: u32,
    /// Tile URL template with `{z}`, `{x}`, `{y}` placeholders
    pub tile_url: String,
    /// RGBA fill for areas outside the fetched tile grid
    pub fill: [u8; 4],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            canvas_pixels: RENDER_PIXELS,
            tile_url: TILE_URL_TEMPLATE.to_string(),
            fill: CANVAS_FILL,
        }
    }
}

impl StyleConfig {
    /// Replace the zoom level
    #[must_use]
    pub const fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Replace the canvas edge length
    #[must_use]
    pub const fn with_canvas_pixels(mut self, pixels: u32) -> Self {
        self.canvas_pixels = pixels;
        self
    }
}

//! Map renderer: geocoding, tile fetching, and canvas compositing

/// Forward geocoding of address queries
pub mod geocode;
/// Rendering parameters
pub mod style;
/// Web Mercator tile math and compositing
pub mod tiles;

pub use style::StyleConfig;

use crate::io::configuration::{HTTP_TIMEOUT_SECS, HTTP_USER_AGENT};
use crate::io::error::{MapError, Result, tile_error};
use crate::io::locations::Query;
use image::RgbaImage;
use std::time::Duration;

/// Renders one map image per query over HTTP tile and geocoding services
pub struct MapRenderer {
    client: reqwest::blocking::Client,
}

impl MapRenderer {
    /// Create a renderer with a shared HTTP client
    ///
    /// # Errors
    ///
    /// Returns [`MapError::HttpClient`] when the client cannot be built.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(HTTP_USER_AGENT)
            .build()
            .map_err(|e| MapError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Render a square map image centered on the query
    ///
    /// Address queries are geocoded first; coordinate queries go straight
    /// to tile math.
    ///
    /// # Errors
    ///
    /// Returns a `Geocode` error when address resolution fails and a
    /// `TileFetch` error when a tile cannot be fetched or decoded.
    pub fn render(&self, query: &Query, style: &StyleConfig) -> Result<RgbaImage> {
        let (lat, lon) = match query {
            Query::Coordinates { lat, lon } => (*lat, *lon),
            Query::Address(address) => geocode::lookup(&self.client, address)?,
        };

        let center = tiles::fractional_tile(lat, lon, style.zoom);
        tiles::composite(center, style.zoom, style.canvas_pixels, style.fill, |z, x, y| {
            self.fetch_tile(&style.tile_url, z, x, y)
        })
    }

    fn fetch_tile(&self, template: &str, zoom: u8, x: u64, y: u64) -> Result<RgbaImage> {
        let url = tiles::tile_url(template, zoom, x, y);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| tile_error(&url, &e))?;

        if !response.status().is_success() {
            return Err(tile_error(
                &url,
                &format!("service returned status {}", response.status()),
            ));
        }

        let bytes = response.bytes().map_err(|e| tile_error(&url, &e))?;
        let tile = image::load_from_memory(&bytes).map_err(|e| tile_error(&url, &e))?;

        Ok(tile.to_rgba8())
    }
}

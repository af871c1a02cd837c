//! Web Mercator tile math and tile-grid compositing
//!
//! Pure coordinate conversions live here so they can be tested without a
//! network; the compositor takes the tile fetch as a closure for the same
//! reason.

use crate::io::configuration::TILE_PIXELS;
use crate::io::error::Result;
use image::imageops;
use image::{Rgba, RgbaImage};

/// Latitude bound of the Web Mercator projection in degrees
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Highest zoom level tile addressing supports
pub const MAX_ZOOM: u8 = 22;

/// Fractional tile coordinates of a point at the given zoom
///
/// Latitudes are clamped to the Web Mercator bounds. The integer parts are
/// the slippy tile indices; the fractional parts locate the point within
/// that tile.
pub fn fractional_tile(lat: f64, lon: f64, zoom: u8) -> (f64, f64) {
    let tiles = f64::from(1u32 << u32::from(zoom.min(MAX_ZOOM)));
    let lat_rad = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = (lon + 180.0) / 360.0 * tiles;
    let y = (1.0 - lat_rad.tan().asinh() / std::f64::consts::PI) / 2.0 * tiles;

    (x, y)
}

/// Expand a `{z}`/`{x}`/`{y}` URL template into a concrete tile URL
pub fn tile_url(template: &str, zoom: u8, x: u64, y: u64) -> String {
    template
        .replace("{z}", &zoom.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
}

/// Composite the tile grid around a center point into a square canvas
///
/// `center` is in fractional tile coordinates at `zoom`. Tiles are fetched
/// through `fetch(zoom, x, y)`; horizontal indices wrap around the
/// antimeridian, vertical indices outside the map leave the fill color
/// visible. Zoom is clamped to [`MAX_ZOOM`] once, so the level handed to
/// `fetch` always matches the tile indices.
///
/// # Errors
///
/// Propagates the first error returned by `fetch`.
pub fn composite<F>(
    center: (f64, f64),
    zoom: u8,
    canvas_pixels: u32,
    fill: [u8; 4],
    mut fetch: F,
) -> Result<RgbaImage>
where
    F: FnMut(u8, u64, u64) -> Result<RgbaImage>,
{
    let zoom = zoom.min(MAX_ZOOM);
    let tile_count = 1i64 << i64::from(zoom);
    let tile_px = f64::from(TILE_PIXELS);
    let canvas_f = f64::from(canvas_pixels);

    // Canvas origin in global pixel space at this zoom
    let origin_x = center.0.mul_add(tile_px, -(canvas_f / 2.0));
    let origin_y = center.1.mul_add(tile_px, -(canvas_f / 2.0));

    let mut canvas = RgbaImage::from_pixel(canvas_pixels, canvas_pixels, Rgba(fill));

    let first_col = (origin_x / tile_px).floor() as i64;
    let last_col = ((origin_x + canvas_f - 1.0) / tile_px).floor() as i64;
    let first_row = (origin_y / tile_px).floor() as i64;
    let last_row = ((origin_y + canvas_f - 1.0) / tile_px).floor() as i64;

    for row in first_row..=last_row {
        if row < 0 || row >= tile_count {
            continue;
        }

        for col in first_col..=last_col {
            let wrapped_col = col.rem_euclid(tile_count) as u64;
            let tile = fetch(zoom, wrapped_col, row as u64)?;

            let offset_x = ((col as f64) * tile_px - origin_x).round() as i64;
            let offset_y = ((row as f64) * tile_px - origin_y).round() as i64;
            imageops::overlay(&mut canvas, &tile, offset_x, offset_y);
        }
    }

    Ok(canvas)
}

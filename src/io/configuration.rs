//! Named constants and runtime configuration defaults

// Input and output defaults
/// Default locations file read from the working directory
pub const DEFAULT_LOCATIONS_FILE: &str = "locations.json";
/// Default directory for rendered and cropped images
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Suffix added to hex-cropped output filenames
pub const HEX_SUFFIX: &str = "_hex";

// Map rendering
/// Default slippy-map zoom level
pub const DEFAULT_ZOOM: u8 = 16;
/// Edge length of a single map tile in pixels
pub const TILE_PIXELS: u32 = 256;
/// Edge length of the square render canvas in pixels
pub const RENDER_PIXELS: u32 = 1536;
/// Tile server URL template with `{z}`, `{x}`, `{y}` placeholders
pub const TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Forward geocoding endpoint (Nominatim search API)
pub const GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/search";
/// User agent sent with tile and geocoding requests
pub const HTTP_USER_AGENT: &str = concat!("hexmap/", env!("CARGO_PKG_VERSION"));
/// Timeout for a single HTTP request in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 30;
/// Background fill for canvas regions outside the fetched tile grid
pub const CANVAS_FILL: [u8; 4] = [242, 244, 203, 255];

// Print sizing
/// Width of the printed hexagon artwork in centimeters
pub const PRINT_WIDTH_CM: f64 = 17.0;
/// Width of the physical page in centimeters
pub const PAGE_WIDTH_CM: f64 = 20.0;
/// Print resolution in dots per inch
pub const PRINT_DPI: f64 = 300.0;
/// Color of the page margin around the hexagon
pub const MARGIN_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Smallest source edge the hexagon mask accepts
pub const MIN_MASK_PIXELS: u32 = 8;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Number of pipeline stages reported per location
pub const STAGES_PER_LOCATION: usize = 4;

/// Default target edge in pixels derived from page width and print DPI
pub fn default_target_pixels() -> u32 {
    // 2.54 cm per inch
    let inches = PAGE_WIDTH_CM / 2.54;
    (inches * PRINT_DPI).round() as u32
}

//! Error types for location loading, map rendering, and image output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum MapError {
    /// Failed to read the locations file from the filesystem
    LocationsLoad {
        /// Path to the locations file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The locations file is not a JSON object of name-to-query entries
    LocationsParse {
        /// Path to the locations file
        path: PathBuf,
        /// Description of the parse failure
        reason: String,
    },

    /// A location value is neither an address string nor a coordinate pair
    InvalidLocationFormat {
        /// Name of the offending entry
        name: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Forward geocoding of an address failed
    Geocode {
        /// The address that was looked up
        query: String,
        /// Description of the failure
        reason: String,
    },

    /// A map tile could not be fetched or decoded
    TileFetch {
        /// URL of the tile request
        url: String,
        /// Description of the failure
        reason: String,
    },

    /// Source image too small for the hexagon mask
    InvalidImage {
        /// Source image width in pixels
        width: u32,
        /// Source image height in pixels
        height: u32,
        /// Minimum accepted edge in pixels
        minimum: u32,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The shared HTTP client could not be constructed
    HttpClient {
        /// Description of the failure
        reason: String,
    },

    /// Every location in the batch failed
    NoLocationsProcessed {
        /// Number of entries attempted
        attempted: usize,
    },
}

impl MapError {
    /// Whether this error aborts the whole batch rather than a single entry
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::LocationsLoad { .. }
                | Self::LocationsParse { .. }
                | Self::HttpClient { .. }
                | Self::NoLocationsProcessed { .. }
        )
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocationsLoad { path, source } => {
                write!(
                    f,
                    "Failed to read locations file '{}': {source}",
                    path.display()
                )
            }
            Self::LocationsParse { path, reason } => {
                write!(
                    f,
                    "Failed to parse locations file '{}': {reason}",
                    path.display()
                )
            }
            Self::InvalidLocationFormat { name, reason } => {
                write!(f, "Invalid location entry '{name}': {reason}")
            }
            Self::Geocode { query, reason } => {
                write!(f, "Geocoding failed for '{query}': {reason}")
            }
            Self::TileFetch { url, reason } => {
                write!(f, "Tile fetch failed for '{url}': {reason}")
            }
            Self::InvalidImage {
                width,
                height,
                minimum,
            } => {
                write!(
                    f,
                    "Image {width}x{height} is too small to mask (minimum edge {minimum})"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::HttpClient { reason } => {
                write!(f, "Failed to build HTTP client: {reason}")
            }
            Self::NoLocationsProcessed { attempted } => {
                write!(f, "All {attempted} location(s) failed to process")
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LocationsLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, MapError>;

/// Create a geocoding error
pub fn geocode_error(
    query: &(impl ToString + ?Sized),
    reason: &(impl ToString + ?Sized),
) -> MapError {
    MapError::Geocode {
        query: query.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a tile fetch error
pub fn tile_error(url: &(impl ToString + ?Sized), reason: &(impl ToString + ?Sized)) -> MapError {
    MapError::TileFetch {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

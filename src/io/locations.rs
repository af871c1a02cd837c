//! Location list loading and per-entry validation

use crate::io::error::{MapError, Result};
use serde_json::Value;
use std::path::Path;

/// A place to render: a free-form address or an explicit coordinate pair
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Free-form address string resolved through geocoding
    Address(String),
    /// Explicit WGS84 coordinates
    Coordinates {
        /// Latitude in degrees, south-to-north -90..90
        lat: f64,
        /// Longitude in degrees, west-to-east -180..180
        lon: f64,
    },
}

/// Result of loading a locations file
///
/// Well-formed entries and per-entry rejections are reported separately so
/// the batch layer can warn about the bad ones and continue with the rest.
#[derive(Debug, Default)]
pub struct LoadedLocations {
    /// Valid `(name, query)` pairs in file order
    pub entries: Vec<(String, Query)>,
    /// Per-entry validation failures, also in file order
    pub rejected: Vec<MapError>,
}

/// Load and validate a locations file
///
/// The file must contain a JSON object mapping location names to either an
/// address string or a two-element `[latitude, longitude]` array. Array
/// elements may be numbers or numeric strings. Entry order is preserved.
///
/// # Errors
///
/// Returns [`MapError::LocationsLoad`] when the file cannot be read and
/// [`MapError::LocationsParse`] when it is not a JSON object. Malformed
/// individual entries land in [`LoadedLocations::rejected`] instead.
pub fn load_locations(path: &Path) -> Result<LoadedLocations> {
    let raw = std::fs::read_to_string(path).map_err(|e| MapError::LocationsLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: Value = serde_json::from_str(&raw).map_err(|e| MapError::LocationsParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let Value::Object(map) = value else {
        return Err(MapError::LocationsParse {
            path: path.to_path_buf(),
            reason: "top-level value must be an object of name-to-query entries".to_string(),
        });
    };

    let mut loaded = LoadedLocations::default();
    for (name, entry) in map {
        match parse_query(&name, &entry) {
            Ok(query) => loaded.entries.push((name, query)),
            Err(error) => loaded.rejected.push(error),
        }
    }

    Ok(loaded)
}

/// Validate a single JSON value as a query
///
/// # Errors
///
/// Returns [`MapError::InvalidLocationFormat`] when the value is neither a
/// non-empty string nor a two-element numeric pair within coordinate range.
pub fn parse_query(name: &str, value: &Value) -> Result<Query> {
    match value {
        Value::String(address) if !address.trim().is_empty() => {
            Ok(Query::Address(address.clone()))
        }
        Value::String(_) => Err(invalid(name, "address string is empty")),
        Value::Array(items) => {
            if items.len() != 2 {
                return Err(invalid(
                    name,
                    &format!("expected 2 coordinates, found {}", items.len()),
                ));
            }

            let lat = coordinate(name, items.first(), "latitude")?;
            let lon = coordinate(name, items.get(1), "longitude")?;

            if !(-90.0..=90.0).contains(&lat) {
                return Err(invalid(name, &format!("latitude {lat} out of range")));
            }
            if !(-180.0..=180.0).contains(&lon) {
                return Err(invalid(name, &format!("longitude {lon} out of range")));
            }

            Ok(Query::Coordinates { lat, lon })
        }
        other => Err(invalid(
            name,
            &format!("expected a string or a coordinate pair, found {other}"),
        )),
    }
}

// Coordinates appear as JSON numbers or as decimal strings
fn coordinate(name: &str, item: Option<&Value>, which: &str) -> Result<f64> {
    match item {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| invalid(name, &format!("{which} is not a finite number"))),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|e| invalid(name, &format!("{which} '{s}' does not parse: {e}"))),
        Some(other) => Err(invalid(name, &format!("{which} has invalid type: {other}"))),
        None => Err(invalid(name, &format!("{which} is missing"))),
    }
}

fn invalid(name: &str, reason: &str) -> MapError {
    MapError::InvalidLocationFormat {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

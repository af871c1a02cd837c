//! Forward geocoding of address strings via a Nominatim-style search API

use crate::io::configuration::GEOCODE_URL;
use crate::io::error::{Result, geocode_error};
use serde::Deserialize;

/// One search hit from the geocoding service
///
/// Nominatim returns coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct GeocodeHit {
    lat: String,
    lon: String,
}

/// Resolve an address string to a (latitude, longitude) pair
///
/// Takes the first search hit, matching the original behavior of rendering
/// whatever the service considers the best match.
///
/// # Errors
///
/// Returns a [`crate::MapError::Geocode`] error when the request fails, the
/// response is not valid JSON, no hit is returned, or the coordinates do
/// not parse as numbers.
pub fn lookup(client: &reqwest::blocking::Client, address: &str) -> Result<(f64, f64)> {
    let response = client
        .get(GEOCODE_URL)
        .query(&[("q", address), ("format", "json"), ("limit", "1")])
        .send()
        .map_err(|e| geocode_error(address, &e))?;

    if !response.status().is_success() {
        return Err(geocode_error(
            address,
            &format!("service returned status {}", response.status()),
        ));
    }

    let hits: Vec<GeocodeHit> = response.json().map_err(|e| geocode_error(address, &e))?;
    let hit = hits
        .first()
        .ok_or_else(|| geocode_error(address, "no results"))?;

    parse_coordinates(address, &hit.lat, &hit.lon)
}

/// Parse the decimal-string coordinates of a search hit
///
/// # Errors
///
/// Returns a [`crate::MapError::Geocode`] error when either string does not
/// parse as a number.
pub fn parse_coordinates(address: &str, lat: &str, lon: &str) -> Result<(f64, f64)> {
    let lat: f64 = lat
        .parse()
        .map_err(|e| geocode_error(address, &format!("unparseable latitude '{lat}': {e}")))?;
    let lon: f64 = lon
        .parse()
        .map_err(|e| geocode_error(address, &format!("unparseable longitude '{lon}': {e}")))?;

    Ok((lat, lon))
}

//! Batch map rendering and hexagonal cropping for print
//!
//! Reads named locations from a JSON file, renders a map image for each one
//! from web tile and geocoding services, masks the result to a regular
//! hexagon sized for physical printing, and writes one PNG per location.

#![forbid(unsafe_code)]

/// Hexagon geometry and the mask-and-resize crop pipeline
pub mod geometry;
/// Input/output operations, orchestration, and error handling
pub mod io;
/// Map rendering against web tile and geocoding services
pub mod render;

pub use io::error::{MapError, Result};

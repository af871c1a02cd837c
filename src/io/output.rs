//! Output file naming and PNG export

use crate::io::configuration::HEX_SUFFIX;
use crate::io::error::{MapError, Result};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Turn a location name into a safe file stem
///
/// Path separators and control characters become underscores so an entry
/// like `"A/B"` cannot escape the output directory.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c == '/' || c == '\\' || c == ':' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Path of the full map render for a location
pub fn render_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{}.png", sanitize_name(name)))
}

/// Path of the hex-cropped image for a location
pub fn hex_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{}{HEX_SUFFIX}.png", sanitize_name(name)))
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns [`MapError::FileSystem`] when the parent directory cannot be
/// created and [`MapError::ImageExport`] when encoding or writing fails.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MapError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| MapError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

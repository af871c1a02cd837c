//! Crop pipeline: center-square crop, page margin, hexagon mask, resize

use crate::geometry::Hexagon;
use crate::io::configuration::{MARGIN_COLOR, MIN_MASK_PIXELS, PAGE_WIDTH_CM, PRINT_WIDTH_CM};
use crate::io::error::{MapError, Result};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Crop a non-square image to its centered square
///
/// Square inputs are returned as an unmodified copy.
pub fn center_square(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let side = width.min(height);
    let x = (width - side) / 2;
    let y = (height - side) / 2;

    imageops::crop_imm(image, x, y, side, side).to_image()
}

/// Surround an image with solid-color margins of the given widths
pub fn add_margin(
    image: &RgbaImage,
    top: u32,
    right: u32,
    bottom: u32,
    left: u32,
    color: Rgba<u8>,
) -> RgbaImage {
    let (width, height) = image.dimensions();
    let mut result = RgbaImage::from_pixel(width + left + right, height + top + bottom, color);

    imageops::overlay(&mut result, image, i64::from(left), i64::from(top));
    result
}

/// Margin in pixels that grows the artwork to the full page width
///
/// Derived from the print-to-page width ratio, applied symmetrically.
pub fn page_margin_pixels(artwork_width: u32) -> u32 {
    let ratio = PAGE_WIDTH_CM / PRINT_WIDTH_CM - 1.0;
    ((f64::from(artwork_width) * ratio) / 2.0).floor() as u32
}

/// Zero the alpha channel of every pixel outside the hexagon
///
/// Pixels are sampled at their centers, so a pixel counts as inside when
/// its center point is inside or on the hexagon boundary. The mask is hard;
/// the later downscale to target size softens the edge.
pub fn apply_hex_mask(image: &mut RgbaImage, hexagon: &Hexagon) {
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let px = f64::from(x) + 0.5;
        let py = f64::from(y) + 0.5;

        if !hexagon.contains(px, py) {
            let Rgba([r, g, b, _]) = *pixel;
            *pixel = Rgba([r, g, b, 0]);
        }
    }
}

/// Mask an image to a regular hexagon and resize it for printing
///
/// The source is center-cropped to a square, surrounded with a white page
/// margin, masked to the largest hexagon that fit the pre-margin square,
/// and resized to exactly `target_width` x `target_height`. The source
/// image is not mutated.
///
/// # Errors
///
/// Returns [`MapError::InvalidImage`] when either source edge is below the
/// minimum mask size.
pub fn hex_crop(image: &RgbaImage, target_width: u32, target_height: u32) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    if width < MIN_MASK_PIXELS || height < MIN_MASK_PIXELS {
        return Err(MapError::InvalidImage {
            width,
            height,
            minimum: MIN_MASK_PIXELS,
        });
    }

    let square = center_square(image);
    let side = square.width();

    // Radius comes from the artwork square, not the padded page
    let hexagon = Hexagon::inscribed(side, side);

    let margin = page_margin_pixels(side);
    let mut padded = add_margin(&square, margin, margin, margin, margin, Rgba(MARGIN_COLOR));

    let padded_side = f64::from(padded.width());
    let centered = hexagon.with_center(padded_side / 2.0, f64::from(padded.height()) / 2.0);
    apply_hex_mask(&mut padded, &centered);

    Ok(imageops::resize(
        &padded,
        target_width,
        target_height,
        FilterType::Triangle,
    ))
}

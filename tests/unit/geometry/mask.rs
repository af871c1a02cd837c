//! Tests for the crop pipeline: square crop, margins, masking, resizing

#[cfg(test)]
mod tests {

    use hexmap::geometry::Hexagon;
    use hexmap::geometry::mask::{
        add_margin, apply_hex_mask, center_square, hex_crop, page_margin_pixels,
    };
    use hexmap::io::error::MapError;
    use image::{Rgba, RgbaImage};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_center_square_crops_wide_image() {
        let image = RgbaImage::from_pixel(300, 100, RED);
        let square = center_square(&image);

        assert_eq!(square.dimensions(), (100, 100));
    }

    #[test]
    fn test_center_square_crops_tall_image() {
        let image = RgbaImage::from_pixel(100, 300, RED);
        let square = center_square(&image);

        assert_eq!(square.dimensions(), (100, 100));
    }

    #[test]
    fn test_center_square_keeps_square_image() {
        let image = RgbaImage::from_pixel(128, 128, RED);
        let square = center_square(&image);

        assert_eq!(square.dimensions(), (128, 128));
    }

    #[test]
    fn test_center_square_takes_middle_columns() {
        // Left third black, middle third red, right third black
        let mut image = RgbaImage::from_pixel(300, 100, Rgba([0, 0, 0, 255]));
        for x in 100..200 {
            for y in 0..100 {
                image.put_pixel(x, y, RED);
            }
        }

        let square = center_square(&image);
        assert_eq!(*square.get_pixel(0, 0), RED);
        assert_eq!(*square.get_pixel(99, 99), RED);
    }

    #[test]
    fn test_add_margin_grows_dimensions() {
        let image = RgbaImage::from_pixel(100, 100, RED);
        let white = Rgba([255, 255, 255, 255]);

        let padded = add_margin(&image, 10, 10, 10, 10, white);

        assert_eq!(padded.dimensions(), (120, 120));
        assert_eq!(*padded.get_pixel(0, 0), white);
        assert_eq!(*padded.get_pixel(60, 60), RED);
    }

    #[test]
    fn test_add_margin_asymmetric() {
        let image = RgbaImage::from_pixel(50, 40, RED);

        let padded = add_margin(&image, 1, 2, 3, 4, Rgba([0, 0, 0, 255]));

        assert_eq!(padded.dimensions(), (50 + 2 + 4, 40 + 1 + 3));
    }

    #[test]
    fn test_page_margin_ratio() {
        // 20 cm page over 17 cm artwork: (1000 * 3/17) / 2 = 88.2 -> 88
        assert_eq!(page_margin_pixels(1000), 88);
        assert_eq!(page_margin_pixels(0), 0);
    }

    #[test]
    fn test_apply_hex_mask_clears_corners_keeps_center() {
        let mut image = RgbaImage::from_pixel(200, 200, RED);
        let hexagon = Hexagon::inscribed(200, 200);

        apply_hex_mask(&mut image, &hexagon);

        assert_eq!(image.get_pixel(100, 100).0, [255, 0, 0, 255]);
        // Corners keep their color channels but lose alpha
        assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0, 0]);
        assert_eq!(image.get_pixel(199, 0).0, [255, 0, 0, 0]);
        assert_eq!(image.get_pixel(0, 199).0, [255, 0, 0, 0]);
        assert_eq!(image.get_pixel(199, 199).0, [255, 0, 0, 0]);
    }

    #[test]
    fn test_hex_crop_output_has_target_dimensions() {
        let image = RgbaImage::from_pixel(1000, 1000, RED);

        let cropped = hex_crop(&image, 500, 500).expect("crop should succeed");

        assert_eq!(cropped.dimensions(), (500, 500));
    }

    #[test]
    fn test_hex_crop_non_square_source() {
        let image = RgbaImage::from_pixel(1200, 800, RED);

        let cropped = hex_crop(&image, 400, 400).expect("crop should succeed");

        assert_eq!(cropped.dimensions(), (400, 400));
    }

    #[test]
    fn test_hex_crop_corners_transparent_center_opaque() {
        let image = RgbaImage::from_pixel(1000, 1000, RED);

        let cropped = hex_crop(&image, 500, 500).expect("crop should succeed");

        assert_eq!(cropped.get_pixel(0, 0).0[3], 0);
        assert_eq!(cropped.get_pixel(499, 0).0[3], 0);
        assert_eq!(cropped.get_pixel(0, 499).0[3], 0);
        assert_eq!(cropped.get_pixel(499, 499).0[3], 0);

        let center = cropped.get_pixel(250, 250);
        assert_eq!(center.0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_hex_crop_does_not_mutate_source() {
        let image = RgbaImage::from_pixel(100, 100, RED);
        let before = image.clone();

        let _ = hex_crop(&image, 50, 50).expect("crop should succeed");

        assert_eq!(image.as_raw(), before.as_raw());
    }

    #[test]
    fn test_hex_crop_is_deterministic() {
        let image = RgbaImage::from_pixel(640, 640, Rgba([10, 120, 200, 255]));

        let first = hex_crop(&image, 320, 320).expect("crop should succeed");
        let second = hex_crop(&image, 320, 320).expect("crop should succeed");

        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_hex_crop_rejects_tiny_image() {
        let image = RgbaImage::from_pixel(4, 4, RED);

        let result = hex_crop(&image, 100, 100);

        assert!(matches!(
            result,
            Err(MapError::InvalidImage {
                width: 4,
                height: 4,
                ..
            })
        ));
    }
}

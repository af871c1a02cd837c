//! Tests for output naming and PNG export

#[cfg(test)]
mod tests {

    use hexmap::io::output::{hex_path, render_path, sanitize_name, save_png};
    use image::{Rgba, RgbaImage};
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn test_sanitize_passes_ordinary_names() {
        assert_eq!(sanitize_name("Home"), "Home");
        assert_eq!(sanitize_name("Café de l'Ouest"), "Café de l'Ouest");
    }

    #[test]
    fn test_sanitize_replaces_separators() {
        assert_eq!(sanitize_name("a/b"), "a_b");
        assert_eq!(sanitize_name("a\\b:c"), "a_b_c");
        assert_eq!(sanitize_name("tab\there"), "tab_here");
    }

    #[test]
    fn test_output_paths() {
        let dir = Path::new("out");

        assert_eq!(render_path(dir, "Home"), dir.join("Home.png"));
        assert_eq!(hex_path(dir, "Home"), dir.join("Home_hex.png"));
    }

    #[test]
    fn test_save_png_creates_directories() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("deep").join("image.png");
        let image = RgbaImage::from_pixel(16, 16, Rgba([0, 128, 255, 255]));

        save_png(&image, &path).expect("save should succeed");

        assert!(path.exists());
        let reloaded = image::open(&path).expect("reload").to_rgba8();
        assert_eq!(reloaded.dimensions(), (16, 16));
    }

    #[test]
    fn test_save_png_preserves_transparency() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("alpha.png");
        let image = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 0]));

        save_png(&image, &path).expect("save should succeed");

        let reloaded = image::open(&path).expect("reload").to_rgba8();
        assert_eq!(reloaded.get_pixel(4, 4).0[3], 0);
    }
}

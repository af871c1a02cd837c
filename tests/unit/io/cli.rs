//! Tests for CLI argument parsing and derived settings

#[cfg(test)]
mod tests {

    use clap::Parser;
    use hexmap::io::cli::Cli;
    use hexmap::io::configuration::{DEFAULT_ZOOM, default_target_pixels};
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["hexmap"]).expect("parse should succeed");

        assert_eq!(cli.locations, Path::new("locations.json"));
        assert_eq!(cli.output_dir, Path::new("output"));
        assert_eq!(cli.zoom, DEFAULT_ZOOM);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    #[test]
    fn test_flags_invert_defaults() {
        let cli =
            Cli::try_parse_from(["hexmap", "--quiet", "--no-skip"]).expect("parse should succeed");

        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    #[test]
    fn test_explicit_locations_and_output() {
        let cli = Cli::try_parse_from(["hexmap", "places.json", "-o", "prints", "-z", "14"])
            .expect("parse should succeed");

        assert_eq!(cli.locations, Path::new("places.json"));
        assert_eq!(cli.output_dir, Path::new("prints"));
        assert_eq!(cli.zoom, 14);
    }

    #[test]
    fn test_zoom_is_bounded() {
        assert!(Cli::try_parse_from(["hexmap", "-z", "22"]).is_ok());
        assert!(Cli::try_parse_from(["hexmap", "-z", "23"]).is_err());
        assert!(Cli::try_parse_from(["hexmap", "-z", "30"]).is_err());
    }

    #[test]
    fn test_target_size_combinations() {
        let both = Cli::try_parse_from(["hexmap", "-w", "500", "-H", "400"]).expect("parse");
        assert_eq!(both.target_size(), (500, 400));

        let width_only = Cli::try_parse_from(["hexmap", "-w", "500"]).expect("parse");
        assert_eq!(width_only.target_size(), (500, 500));

        let height_only = Cli::try_parse_from(["hexmap", "-H", "400"]).expect("parse");
        assert_eq!(height_only.target_size(), (400, 400));

        let neither = Cli::try_parse_from(["hexmap"]).expect("parse");
        let edge = default_target_pixels();
        assert_eq!(neither.target_size(), (edge, edge));
    }
}

//! Tests for command-line parsing and configuration translation

#[cfg(test)]
mod tests {
    use clap::Parser;
    use lowpoly::algorithm::relaxation::ForceSampling;
    use lowpoly::io::cli::{Cli, parse_hex_color};
    use lowpoly::io::configuration::{
        DEFAULT_BORDER_PASSES, DEFAULT_HEIGHT, DEFAULT_MAX_PASSES, DEFAULT_POINT_COUNT,
        DEFAULT_WIDTH,
    };
    use image::Rgb;
    use std::path::PathBuf;

    // Tests CLI parsing with no arguments falls back to every default
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["lowpoly"]);

        assert_eq!(cli.output, PathBuf::from("wallpaper.png"));
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert_eq!(cli.point_count, DEFAULT_POINT_COUNT);
        assert_eq!(cli.border_passes, DEFAULT_BORDER_PASSES);
        assert_eq!(cli.max_passes, DEFAULT_MAX_PASSES);
        assert!(cli.seed.is_none());
        assert!(!cli.quiet);
        assert!(!cli.in_place_forces);
        assert_eq!(cli.color_left, Rgb([0xd9, 0x7f, 0x25]));
        assert_eq!(cli.color_right, Rgb([0x8c, 0x00, 0x35]));
    }

    // Tests CLI parsing with all available arguments
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "lowpoly",
            "out/background.png",
            "--width",
            "800",
            "--height",
            "600",
            "--points",
            "25",
            "--seed",
            "7",
            "--angle",
            "45",
            "--value-min",
            "10",
            "--value-max",
            "200",
            "--fuzz",
            "0.25",
            "--border-passes",
            "2",
            "--max-force",
            "1.5",
            "--epsilon",
            "5000",
            "--max-passes",
            "300",
            "--color-left",
            "#102030",
            "--color-right",
            "#a0b0c0",
            "--in-place-forces",
            "--quiet",
        ]);

        assert_eq!(cli.output, PathBuf::from("out/background.png"));
        assert_eq!(cli.width, 800);
        assert_eq!(cli.height, 600);
        assert_eq!(cli.point_count, 25);
        assert_eq!(cli.seed, Some(7));
        assert!((cli.angle - 45.0).abs() < f64::EPSILON);
        assert_eq!(cli.value_min, 10);
        assert_eq!(cli.value_max, 200);
        assert!((cli.fuzz - 0.25).abs() < f64::EPSILON);
        assert_eq!(cli.border_passes, 2);
        assert!((cli.max_force - 1.5).abs() < f64::EPSILON);
        assert!((cli.epsilon - 5000.0).abs() < f64::EPSILON);
        assert_eq!(cli.max_passes, 300);
        assert_eq!(cli.color_left, Rgb([0x10, 0x20, 0x30]));
        assert_eq!(cli.color_right, Rgb([0xa0, 0xb0, 0xc0]));
        assert!(cli.in_place_forces);
        assert!(cli.quiet);
        assert!(!cli.should_show_progress());
    }

    // Tests degrees convert to radians and flags map to sampling modes
    #[test]
    fn test_to_config_translates_units_and_modes() {
        let cli = Cli::parse_from(["lowpoly", "--angle", "30"]);
        let config = cli.to_config();

        assert!((config.angle - std::f64::consts::PI / 6.0).abs() < 1e-12);
        assert_eq!(config.force_sampling, ForceSampling::Snapshot);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert!(config.validate().is_ok());

        let in_place = Cli::parse_from(["lowpoly", "--in-place-forces"]).to_config();
        assert_eq!(in_place.force_sampling, ForceSampling::InPlace);
    }

    #[test]
    fn test_parse_hex_color_accepts_rrggbb() {
        assert_eq!(parse_hex_color("#d97f25"), Ok(Rgb([0xd9, 0x7f, 0x25])));
        assert_eq!(parse_hex_color("#000000"), Ok(Rgb([0, 0, 0])));
        assert_eq!(parse_hex_color("#FFFFFF"), Ok(Rgb([255, 255, 255])));
    }

    // Tests malformed color strings are rejected with a format hint
    #[test]
    fn test_parse_hex_color_rejects_malformed_input() {
        assert!(parse_hex_color("d97f25").is_err());
        assert!(parse_hex_color("#d97f2").is_err());
        assert!(parse_hex_color("#d97f255").is_err());
        assert!(parse_hex_color("#gggggg").is_err());
        assert!(parse_hex_color("").is_err());
    }
}

//! Tests for colorization exactness and atomic PNG export

#[cfg(test)]
mod tests {
    use image::Rgb;
    use lowpoly::io::image::{colorize, export_png};
    use lowpoly::spatial::canvas::Canvas;

    const LEFT: Rgb<u8> = Rgb([0xd9, 0x7f, 0x25]);
    const RIGHT: Rgb<u8> = Rgb([0x8c, 0x00, 0x35]);

    fn uniform_canvas(width: u32, height: u32, value: u8) -> Canvas<u8> {
        let mut canvas = Canvas::new(width, height);
        let w = f64::from(width);
        let h = f64::from(height);
        canvas.fill_polygon(&[[0.0, 0.0], [w, 0.0], [w, h], [0.0, h]], value);
        canvas
    }

    // Tests intensity zero maps exactly to the left color
    #[test]
    fn test_colorize_zero_intensity_is_left_color() {
        let canvas = Canvas::new(3, 2);
        let image = colorize(&canvas, LEFT, RIGHT);

        for pixel in image.pixels() {
            assert_eq!(*pixel, LEFT);
        }
    }

    // Tests intensity 255 maps exactly to the right color
    #[test]
    fn test_colorize_full_intensity_is_right_color() {
        let canvas = uniform_canvas(3, 2, 255);
        let image = colorize(&canvas, LEFT, RIGHT);

        for pixel in image.pixels() {
            assert_eq!(*pixel, RIGHT);
        }
    }

    // Tests intermediate intensities interpolate per channel
    // Verified against round(left + (right - left) * 51 / 255) by hand
    #[test]
    fn test_colorize_interpolates_intermediate_intensities() {
        let canvas = uniform_canvas(2, 2, 51);
        let image = colorize(&canvas, Rgb([0, 0, 0]), Rgb([255, 105, 10]));

        for pixel in image.pixels() {
            assert_eq!(*pixel, Rgb([51, 21, 2]));
        }
    }

    #[test]
    fn test_colorize_preserves_dimensions() {
        let canvas = Canvas::new(7, 3);
        let image = colorize(&canvas, LEFT, RIGHT);
        assert_eq!(image.dimensions(), (7, 3));
    }

    // Tests the exported file decodes back with no temporary left behind
    #[test]
    fn test_export_png_writes_decodable_file_and_cleans_up() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("tempdir should be creatable");
        };
        let path = dir.path().join("out.png");

        let image = colorize(&uniform_canvas(5, 4, 255), LEFT, RIGHT);
        let result = export_png(&image, &path);
        assert!(result.is_ok());

        let Ok(reloaded) = image::open(&path) else {
            unreachable!("exported file should decode");
        };
        assert_eq!(reloaded.to_rgb8().dimensions(), (5, 4));

        let Ok(entries) = std::fs::read_dir(dir.path()) else {
            unreachable!("temp dir should be listable");
        };
        assert_eq!(
            entries.count(),
            1,
            "no temporary file should remain next to the output"
        );
    }

    // Tests missing parent directories are created on demand
    #[test]
    fn test_export_png_creates_parent_directories() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("tempdir should be creatable");
        };
        let path = dir.path().join("nested/deep/out.png");

        let image = colorize(&Canvas::new(2, 2), LEFT, RIGHT);
        let result = export_png(&image, &path);

        assert!(result.is_ok());
        assert!(path.exists());
    }
}

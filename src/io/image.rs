//! Colorization and atomic PNG export

use crate::io::error::{GenerationError, Result};
use crate::math::gradient::lerp_channel;
use crate::spatial::canvas::Canvas;
use image::{ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Map a grayscale canvas onto the gradient between two colors
///
/// Pure per-channel linear interpolation: intensity 0 yields exactly
/// `left`, intensity 255 exactly `right`.
pub fn colorize(canvas: &Canvas<u8>, left: Rgb<u8>, right: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        let intensity = canvas.get(x, y).unwrap_or(0);
        let t = f64::from(intensity) / 255.0;
        Rgb([
            lerp_channel(left.0[0], right.0[0], t),
            lerp_channel(left.0[1], right.0[1], t),
            lerp_channel(left.0[2], right.0[2], t),
        ])
    })
}

/// Write an image as PNG without leaving partial files behind
///
/// The image is encoded to a temporary sibling path and renamed into
/// place, so a failed write never corrupts an existing output file.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - PNG encoding or the temporary write fails
/// - The temporary file cannot be renamed onto the output path
pub fn export_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    let temp_path = temp_sibling(output_path);
    image
        .save_with_format(&temp_path, ImageFormat::Png)
        .map_err(|source| {
            let _ = std::fs::remove_file(&temp_path);
            GenerationError::ImageExport {
                path: output_path.to_path_buf(),
                source,
            }
        })?;

    std::fs::rename(&temp_path, output_path).map_err(|source| {
        let _ = std::fs::remove_file(&temp_path);
        GenerationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "rename temporary output",
            source,
        }
    })
}

// Temporary encode target next to the final path; staying on the same
// filesystem keeps the rename atomic.
fn temp_sibling(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map_or_else(|| "output.png".to_string(), |name| {
            name.to_string_lossy().into_owned()
        });
    path.with_file_name(format!(".{file_name}.tmp"))
}

//! Command-line interface driving a single wallpaper generation

use crate::algorithm::executor::{GeneratorConfig, WallpaperGenerator};
use crate::algorithm::relaxation::ForceSampling;
use crate::io::configuration::{
    DEFAULT_ANGLE_DEGREES, DEFAULT_BORDER_PASSES, DEFAULT_EPSILON, DEFAULT_FUZZ, DEFAULT_HEIGHT,
    DEFAULT_MAX_FORCE, DEFAULT_MAX_PASSES, DEFAULT_OUTPUT, DEFAULT_POINT_COUNT, DEFAULT_VALUE_MAX,
    DEFAULT_VALUE_MIN, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::{colorize, export_png};
use crate::io::progress::ProgressManager;
use crate::spatial::triangulation::DelaunayTriangulator;
use clap::Parser;
use image::Rgb;
use rand::Rng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lowpoly")]
#[command(
    author,
    version,
    about = "Generate a low-poly gradient wallpaper from relaxed random points"
)]
/// Command-line arguments for the wallpaper generator
pub struct Cli {
    /// Output PNG file
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Number of interior points to scatter and relax
    #[arg(short = 'n', long = "points", default_value_t = DEFAULT_POINT_COUNT)]
    pub point_count: usize,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Gradient rotation in degrees, counter-clockwise from left-to-right
    #[arg(short, long, default_value_t = DEFAULT_ANGLE_DEGREES)]
    pub angle: f64,

    /// Darkest shading intensity
    #[arg(long, default_value_t = DEFAULT_VALUE_MIN)]
    pub value_min: u8,

    /// Brightest shading intensity
    #[arg(long, default_value_t = DEFAULT_VALUE_MAX)]
    pub value_max: u8,

    /// Uniform fuzz radius applied to the gradient fraction
    #[arg(short, long, default_value_t = DEFAULT_FUZZ)]
    pub fuzz: f64,

    /// Number of border augmentation passes
    #[arg(short, long, default_value_t = DEFAULT_BORDER_PASSES)]
    pub border_passes: usize,

    /// Net-force threshold for relaxation convergence
    #[arg(long, default_value_t = DEFAULT_MAX_FORCE)]
    pub max_force: f64,

    /// Proportionality constant of the repulsive force
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Maximum relaxation passes before best-effort completion
    #[arg(short = 'i', long, default_value_t = DEFAULT_MAX_PASSES)]
    pub max_passes: usize,

    /// Color of the dark gradient end, as #rrggbb
    #[arg(long, value_parser = parse_hex_color, default_value = "#d97f25")]
    pub color_left: Rgb<u8>,

    /// Color of the bright gradient end, as #rrggbb
    #[arg(long, value_parser = parse_hex_color, default_value = "#8c0035")]
    pub color_right: Rgb<u8>,

    /// Apply forces within a pass immediately instead of from a snapshot
    #[arg(long)]
    pub in_place_forces: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Translate arguments into a generator configuration
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            width: self.width,
            height: self.height,
            point_count: self.point_count,
            angle: self.angle.to_radians(),
            value_min: self.value_min,
            value_max: self.value_max,
            fuzz: self.fuzz,
            border_passes: self.border_passes,
            max_force: self.max_force,
            epsilon: self.epsilon,
            max_passes: self.max_passes,
            force_sampling: if self.in_place_forces {
                ForceSampling::InPlace
            } else {
                ForceSampling::Snapshot
            },
            color_left: self.color_left,
            color_right: self.color_right,
        }
    }
}

/// Parse a `#rrggbb` hex string into an RGB color
///
/// # Errors
///
/// Returns a description of the expected format when the string is not a
/// seven-character hex color.
pub fn parse_hex_color(input: &str) -> std::result::Result<Rgb<u8>, String> {
    let hex = input
        .strip_prefix('#')
        .ok_or_else(|| format!("'{input}' must start with '#'"))?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("'{input}' must be a #rrggbb hex color"));
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| format!("'{input}' must be a #rrggbb hex color"))
    };
    Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}

/// Orchestrates one generation from parsed arguments to a saved file
pub struct GenerationRunner {
    cli: Cli,
}

impl GenerationRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate and export the wallpaper
    ///
    /// A relaxation loop that exhausts its pass budget is reported on
    /// stderr and the best-effort positions are used; this degrades
    /// output quality but never fails the generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, triangulation
    /// fails, or the output cannot be written.
    // Allow print for user feedback on convergence and completion
    #[allow(clippy::print_stderr)]
    pub fn run(&mut self) -> Result<()> {
        let config = self.cli.to_config();
        let seed = self.cli.seed.unwrap_or_else(|| rand::rng().random());

        let mut generator = WallpaperGenerator::new(config, seed, DelaunayTriangulator)?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(config.max_passes));
        while generator.execute_pass() {
            if let Some(ref pm) = progress {
                pm.update(generator.relaxation_outcome().passes);
            }
        }
        let outcome = generator.relaxation_outcome();
        if let Some(ref pm) = progress {
            pm.finish(outcome.converged);
        }
        if !outcome.converged && !self.cli.quiet {
            eprintln!(
                "Relaxation stopped after {} passes without settling; using best-effort positions",
                outcome.passes
            );
        }

        let (canvas, report) = generator.render()?;
        let image = colorize(&canvas, config.color_left, config.color_right);
        export_png(&image, &self.cli.output)?;

        if !self.cli.quiet {
            eprintln!(
                "Wrote {} ({} triangles, seed {seed})",
                self.cli.output.display(),
                report.triangle_count
            );
        }
        Ok(())
    }
}

//! Generation pipeline configuration and orchestration

use crate::algorithm::border;
use crate::algorithm::relaxation::{ForceSampling, PointRelaxer, RelaxationOutcome};
use crate::algorithm::shading::TriangleShader;
use crate::io::configuration::{
    DEFAULT_ANGLE_DEGREES, DEFAULT_BORDER_PASSES, DEFAULT_COLOR_LEFT, DEFAULT_COLOR_RIGHT,
    DEFAULT_EPSILON, DEFAULT_FUZZ, DEFAULT_HEIGHT, DEFAULT_MAX_FORCE, DEFAULT_MAX_PASSES,
    DEFAULT_POINT_COUNT, DEFAULT_VALUE_MAX, DEFAULT_VALUE_MIN, DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::canvas::Canvas;
use crate::spatial::point::PointSet;
use crate::spatial::triangulation::Triangulator;
use image::Rgb;
use rand::{SeedableRng, rngs::StdRng};

/// Immutable configuration for one wallpaper generation
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of interior points to scatter and relax
    pub point_count: usize,
    /// Gradient rotation in radians; zero shades left to right
    pub angle: f64,
    /// Lower bound of the shading intensity range
    pub value_min: u8,
    /// Upper bound of the shading intensity range
    pub value_max: u8,
    /// Uniform fuzz radius applied to the gradient fraction, in [0, 1]
    pub fuzz: f64,
    /// Number of border augmentation passes (four points each)
    pub border_passes: usize,
    /// Net-force magnitude below which relaxation is considered settled
    pub max_force: f64,
    /// Proportionality constant of the repulsive force
    pub epsilon: f64,
    /// Hard bound on relaxation passes before best-effort completion
    pub max_passes: usize,
    /// Position visibility rule during a relaxation pass
    pub force_sampling: ForceSampling,
    /// Color the zero-intensity end of the gradient maps to
    pub color_left: Rgb<u8>,
    /// Color the full-intensity end of the gradient maps to
    pub color_right: Rgb<u8>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            point_count: DEFAULT_POINT_COUNT,
            angle: DEFAULT_ANGLE_DEGREES.to_radians(),
            value_min: DEFAULT_VALUE_MIN,
            value_max: DEFAULT_VALUE_MAX,
            fuzz: DEFAULT_FUZZ,
            border_passes: DEFAULT_BORDER_PASSES,
            max_force: DEFAULT_MAX_FORCE,
            epsilon: DEFAULT_EPSILON,
            max_passes: DEFAULT_MAX_PASSES,
            force_sampling: ForceSampling::Snapshot,
            color_left: Rgb(DEFAULT_COLOR_LEFT),
            color_right: Rgb(DEFAULT_COLOR_RIGHT),
        }
    }
}

impl GeneratorConfig {
    /// Validate parameter ranges before any simulation work
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error for non-positive dimensions, an
    /// inverted intensity range, a fuzz radius outside [0, 1], a negative
    /// or non-finite force threshold, a non-finite epsilon or angle, or a
    /// zero pass budget.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid_parameter("width", &self.width, &"must be positive"));
        }
        if self.height == 0 {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &"must be positive",
            ));
        }
        if self.value_min > self.value_max {
            return Err(invalid_parameter(
                "value_min",
                &self.value_min,
                &format!("must not exceed value_max ({})", self.value_max),
            ));
        }
        if !(0.0..=1.0).contains(&self.fuzz) {
            return Err(invalid_parameter(
                "fuzz",
                &self.fuzz,
                &"must lie within [0, 1]",
            ));
        }
        if !self.max_force.is_finite() || self.max_force < 0.0 {
            return Err(invalid_parameter(
                "max_force",
                &self.max_force,
                &"must be finite and non-negative",
            ));
        }
        if !self.epsilon.is_finite() {
            return Err(invalid_parameter("epsilon", &self.epsilon, &"must be finite"));
        }
        if !self.angle.is_finite() {
            return Err(invalid_parameter("angle", &self.angle, &"must be finite"));
        }
        if self.max_passes == 0 {
            return Err(invalid_parameter(
                "max_passes",
                &self.max_passes,
                &"need at least one relaxation pass",
            ));
        }
        Ok(())
    }
}

/// Summary of a completed generation
#[derive(Debug, Clone, Copy)]
pub struct GenerationReport {
    /// Relaxation passes executed
    pub relaxation_passes: usize,
    /// Whether relaxation satisfied the force threshold
    pub converged: bool,
    /// Number of triangles shaded
    pub triangle_count: usize,
}

/// Runs relaxation, border sampling, triangulation, and shading in order
///
/// Drivers may either call [`Self::relax`] for the full loop or step with
/// [`Self::execute_pass`] to interleave progress reporting, then finish
/// with [`Self::render`].
#[derive(Debug)]
pub struct WallpaperGenerator<T> {
    config: GeneratorConfig,
    rng: StdRng,
    relaxer: PointRelaxer,
    triangulator: T,
    points: PointSet,
    passes: usize,
    converged: bool,
}

impl<T: Triangulator> WallpaperGenerator<T> {
    /// Validate the configuration and scatter the initial interior points
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid; nothing is
    /// computed in that case.
    pub fn new(config: GeneratorConfig, seed: u64, triangulator: T) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let relaxer = PointRelaxer::new(
            config.width,
            config.height,
            config.epsilon,
            config.max_force,
            config.force_sampling,
        );
        let points = relaxer.scatter(config.point_count, &mut rng);
        Ok(Self {
            config,
            rng,
            relaxer,
            triangulator,
            points,
            passes: 0,
            converged: false,
        })
    }

    /// Run one relaxation pass; returns whether the driver should continue
    ///
    /// Continuation stops on convergence or when the pass budget is spent.
    pub fn execute_pass(&mut self) -> bool {
        if self.converged || self.passes >= self.config.max_passes {
            return false;
        }
        let peak = self.relaxer.pass(self.points.as_mut_slice());
        self.passes += 1;
        self.converged = self.relaxer.is_converged(peak);
        !self.converged && self.passes < self.config.max_passes
    }

    /// Relax to convergence or the pass budget, whichever comes first
    pub fn relax(&mut self) -> RelaxationOutcome {
        while self.execute_pass() {}
        self.relaxation_outcome()
    }

    /// Current relaxation state as an outcome snapshot
    pub const fn relaxation_outcome(&self) -> RelaxationOutcome {
        RelaxationOutcome {
            passes: self.passes,
            converged: self.converged,
        }
    }

    /// Interior points in their current positions
    pub const fn points(&self) -> &PointSet {
        &self.points
    }

    /// Configuration in effect for this generation
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Border sample, triangulate, and shade into a grayscale canvas
    ///
    /// Consumes the generator: the point set is frozen once triangulated.
    /// An empty triangulation (collinear or too few points) renders an
    /// unpainted canvas rather than failing.
    ///
    /// # Errors
    ///
    /// Returns an error when the triangulator rejects the point set or a
    /// triangle references a missing point.
    pub fn render(mut self) -> Result<(Canvas<u8>, GenerationReport)> {
        border::append_corners(&mut self.points, self.config.width, self.config.height);
        border::append_border_points(
            &mut self.points,
            self.config.width,
            self.config.height,
            self.config.border_passes,
            &mut self.rng,
        );

        let triangles = self.triangulator.triangulate(self.points.as_slice())?;

        let mut canvas = Canvas::new(self.config.width, self.config.height);
        let shader = TriangleShader::new(
            self.config.width,
            self.config.height,
            self.config.angle,
            self.config.value_min,
            self.config.value_max,
            self.config.fuzz,
        );
        shader.shade(&self.points, &triangles, &mut canvas, &mut self.rng)?;

        let report = GenerationReport {
            relaxation_passes: self.passes,
            converged: self.converged,
            triangle_count: triangles.len(),
        };
        Ok((canvas, report))
    }
}

//! Point distribution by pairwise repulsion
//!
//! Interior points repel each other under an inverse-square law until no
//! point feels a net force beyond the configured threshold, or the pass
//! budget runs out. Positions are clamped to the canvas on every update, so
//! points never leave the image.

use crate::math::force::{self, Force};
use crate::spatial::point::{Point, PointSet};
use rand::Rng;

/// Which positions a pass reads while computing forces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceSampling {
    /// All forces computed from one consistent snapshot of positions, then
    /// applied together; convergence is independent of point order
    #[default]
    Snapshot,
    /// Each point's update is immediately visible to later points in the
    /// same pass, reproducing order-dependent sequential updates
    InPlace,
}

/// Result of running the relaxation loop
#[derive(Debug, Clone, Copy)]
pub struct RelaxationOutcome {
    /// Number of passes executed
    pub passes: usize,
    /// Whether the force threshold was satisfied within the pass budget
    pub converged: bool,
}

/// Iteratively spreads interior points by mutual repulsion
#[derive(Debug, Clone)]
pub struct PointRelaxer {
    width: f64,
    height: f64,
    epsilon: f64,
    max_force_squared: f64,
    sampling: ForceSampling,
}

impl PointRelaxer {
    /// Create a relaxer for the given canvas bounds and force parameters
    pub fn new(
        width: u32,
        height: u32,
        epsilon: f64,
        max_force: f64,
        sampling: ForceSampling,
    ) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
            epsilon,
            max_force_squared: max_force * max_force,
            sampling,
        }
    }

    /// Scatter `count` points uniformly over the canvas
    pub fn scatter<R: Rng>(&self, count: usize, rng: &mut R) -> PointSet {
        let mut points = PointSet::new();
        for _ in 0..count {
            points.push([
                rng.random_range(0.0..=self.width),
                rng.random_range(0.0..=self.height),
            ]);
        }
        points
    }

    /// Run one relaxation pass
    ///
    /// Returns the largest net-force magnitude squared observed during the
    /// pass, which the caller compares against the convergence threshold.
    pub fn pass(&self, points: &mut [Point]) -> f64 {
        match self.sampling {
            ForceSampling::Snapshot => self.pass_snapshot(points),
            ForceSampling::InPlace => self.pass_in_place(points),
        }
    }

    /// Whether a pass with the given peak force satisfies the threshold
    pub const fn is_converged(&self, peak_force_squared: f64) -> bool {
        peak_force_squared <= self.max_force_squared
    }

    /// Relax until convergence or until `max_passes` is exhausted
    ///
    /// Exhausting the budget is not an error: the points keep their
    /// best-effort positions and the outcome records the shortfall.
    pub fn relax(&self, points: &mut [Point], max_passes: usize) -> RelaxationOutcome {
        for pass in 1..=max_passes {
            let peak = self.pass(points);
            if self.is_converged(peak) {
                return RelaxationOutcome {
                    passes: pass,
                    converged: true,
                };
            }
        }
        RelaxationOutcome {
            passes: max_passes,
            converged: false,
        }
    }

    fn pass_snapshot(&self, points: &mut [Point]) -> f64 {
        let snapshot: Vec<Point> = points.to_vec();
        let mut peak = 0.0_f64;
        for point in points.iter_mut() {
            let net = force::net_force(&snapshot, *point, self.epsilon);
            peak = peak.max(force::magnitude_squared(net));
            *point = self.displace(*point, net);
        }
        peak
    }

    fn pass_in_place(&self, points: &mut [Point]) -> f64 {
        let mut peak = 0.0_f64;
        for index in 0..points.len() {
            let Some(current) = points.get(index).copied() else {
                break;
            };
            let net = force::net_force(points, current, self.epsilon);
            peak = peak.max(force::magnitude_squared(net));
            if let Some(point) = points.get_mut(index) {
                *point = self.displace(current, net);
            }
        }
        peak
    }

    fn displace(&self, point: Point, net: Force) -> Point {
        [
            (point[0] + net[0]).clamp(0.0, self.width),
            (point[1] + net[1]).clamp(0.0, self.height),
        ]
    }
}

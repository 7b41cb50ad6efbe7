//! Boundary augmentation of relaxed point sets
//!
//! The triangulation must cover the whole canvas, which requires the convex
//! hull of the point set to equal the canvas rectangle. Corners alone would
//! achieve that but leave the edges sparse, so additional points are
//! scattered along each edge without crowding the corners themselves.

use crate::spatial::point::PointSet;
use rand::Rng;

/// Append the four canvas corners
pub fn append_corners(points: &mut PointSet, width: u32, height: u32) {
    let w = f64::from(width);
    let h = f64::from(height);
    points.push([0.0, 0.0]);
    points.push([w, 0.0]);
    points.push([0.0, h]);
    points.push([w, h]);
}

/// Append four boundary points per pass, one on each edge
///
/// Coordinates are drawn from the half-open ranges [0, width) and
/// [0, height) so a fresh border point can never land on the far corner.
pub fn append_border_points<R: Rng>(
    points: &mut PointSet,
    width: u32,
    height: u32,
    passes: usize,
    rng: &mut R,
) {
    let w = f64::from(width);
    let h = f64::from(height);
    for _ in 0..passes {
        points.push([rng.random_range(0.0..w), 0.0]);
        points.push([rng.random_range(0.0..w), h]);
        points.push([0.0, rng.random_range(0.0..h)]);
        points.push([w, rng.random_range(0.0..h)]);
    }
}

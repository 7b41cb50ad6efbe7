//! Inverse-square repulsion between points, as per Coulomb's law

use crate::spatial::point::Point;

/// A 2-D force vector; always derived from a pair of points, never stored
pub type Force = [f64; 2];

/// Compute the force exerted by point `j` on point `i`
///
/// Follows an inverse-square law scaled by the proportionality constant
/// `epsilon`: for displacement d = i - j with Euclidean norm r, the result
/// is epsilon * d / r^3, i.e. magnitude epsilon / r^2 directed along d.
///
/// Coincident points exert no force on each other: the zero-distance case
/// returns the zero vector instead of diverging.
pub fn coulomb_force(i: Point, j: Point, epsilon: f64) -> Force {
    let dx = i[0] - j[0];
    let dy = i[1] - j[1];
    let norm_sq = dx.mul_add(dx, dy * dy);
    if norm_sq > 0.0 {
        // epsilon / r^3 scales the displacement down to magnitude epsilon / r^2
        let scale = epsilon / (norm_sq * norm_sq.sqrt());
        [dx * scale, dy * scale]
    } else {
        [0.0, 0.0]
    }
}

/// Sum the repulsion exerted on `target` by every point in the slice
///
/// The term contributed by `target` itself (or any point coinciding with
/// it) is zero under the zero-distance rule, so the sum may safely run
/// over the full slice.
pub fn net_force(points: &[Point], target: Point, epsilon: f64) -> Force {
    let mut total = [0.0, 0.0];
    for other in points {
        let contribution = coulomb_force(target, *other, epsilon);
        total[0] += contribution[0];
        total[1] += contribution[1];
    }
    total
}

/// Squared magnitude of a force vector
pub fn magnitude_squared(force: Force) -> f64 {
    force[0].mul_add(force[0], force[1] * force[1])
}

//! Tests for the inverse-square force law and its degenerate cases

#[cfg(test)]
mod tests {
    use lowpoly::math::force::{coulomb_force, magnitude_squared, net_force};

    // Tests the force magnitude equals epsilon / r^2 for a 3-4-5 triangle
    // Verified by perturbing the exponent in the force scale
    #[test]
    fn test_coulomb_force_magnitude_follows_inverse_square_law() {
        let force = coulomb_force([0.0, 0.0], [3.0, 4.0], 100.0);

        // r = 5, so the magnitude should be 100 / 25 = 4
        let magnitude = magnitude_squared(force).sqrt();
        assert!(
            (magnitude - 4.0).abs() < 1e-12,
            "Expected magnitude 4, got {magnitude}"
        );
        assert!(
            (force[0] - -2.4).abs() < 1e-12,
            "Expected x component -2.4, got {}",
            force[0]
        );
        assert!(
            (force[1] - -3.2).abs() < 1e-12,
            "Expected y component -3.2, got {}",
            force[1]
        );
    }

    // Tests the force points from j toward i along each axis
    #[test]
    fn test_coulomb_force_direction_matches_displacement_signs() {
        let force = coulomb_force([5.0, 2.0], [1.0, 7.0], 1000.0);

        assert!(force[0] > 0.0, "i is right of j, so x force must be positive");
        assert!(force[1] < 0.0, "i is above j, so y force must be negative");
    }

    #[test]
    fn test_coulomb_force_is_antisymmetric() {
        let i = [12.5, 3.0];
        let j = [4.0, 9.25];
        let forward = coulomb_force(i, j, 500.0);
        let backward = coulomb_force(j, i, 500.0);

        assert!((forward[0] + backward[0]).abs() < 1e-12);
        assert!((forward[1] + backward[1]).abs() < 1e-12);
    }

    // Tests the zero-distance degeneracy policy: no singular blow-up
    #[test]
    fn test_coulomb_force_of_coincident_points_is_zero() {
        let point = [42.0, 17.0];
        assert_eq!(coulomb_force(point, point, 100_000.0), [0.0, 0.0]);
    }

    // Tests equidistant opposite neighbors cancel and the self term is inert
    #[test]
    fn test_net_force_cancels_for_symmetric_neighbors() {
        let points = [[0.0, 0.0], [1.0, 0.0], [-1.0, 0.0]];
        let net = net_force(&points, [0.0, 0.0], 1000.0);

        assert!(net[0].abs() < 1e-12, "x components should cancel: {}", net[0]);
        assert!(net[1].abs() < 1e-12, "y components should cancel: {}", net[1]);
    }

    #[test]
    fn test_net_force_with_single_neighbor_equals_pairwise_force() {
        let target = [10.0, 10.0];
        let points = [target, [13.0, 14.0]];

        let net = net_force(&points, target, 250.0);
        let pairwise = coulomb_force(target, [13.0, 14.0], 250.0);

        assert!((net[0] - pairwise[0]).abs() < 1e-12);
        assert!((net[1] - pairwise[1]).abs() < 1e-12);
    }

    #[test]
    fn test_magnitude_squared() {
        assert!((magnitude_squared([3.0, 4.0]) - 25.0).abs() < 1e-12);
        assert!(magnitude_squared([0.0, 0.0]).abs() < f64::EPSILON);
    }
}

//! Triangulation of point sets into index triples
//!
//! Triangulation is an injected capability so the shading stage can be
//! exercised against fixed, hand-built triangle sets in tests while
//! production uses a Delaunay implementation.

use crate::io::error::{GenerationError, Result};
use crate::spatial::point::Point;
use spade::{DelaunayTriangulation, Point2, Triangulation};
use std::collections::HashMap;

/// Three indices into a point set, describing one shaded planar region
pub type Triangle = [usize; 3];

/// Produces a planar triangulation covering the convex hull of its input
pub trait Triangulator {
    /// Triangulate a point set into index triples
    ///
    /// Fewer than three distinct points, or an entirely collinear set, is
    /// not an error: the result is simply empty and nothing gets painted.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying implementation rejects the
    /// input, e.g. for non-finite coordinates.
    fn triangulate(&self, points: &[Point]) -> Result<Vec<Triangle>>;
}

/// Delaunay triangulation backed by spade
///
/// Points are inserted one at a time so that coordinates spade merges as
/// duplicates map back to the first index that carried them; triangle
/// indices stay stable no matter how degenerate the input is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelaunayTriangulator;

impl Triangulator for DelaunayTriangulator {
    fn triangulate(&self, points: &[Point]) -> Result<Vec<Triangle>> {
        let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
        let mut original_index: HashMap<usize, usize> = HashMap::with_capacity(points.len());

        for (index, point) in points.iter().enumerate() {
            let handle = triangulation
                .insert(Point2::new(point[0], point[1]))
                .map_err(|source| GenerationError::Triangulation {
                    reason: format!(
                        "point {index} ({}, {}) rejected: {source}",
                        point[0], point[1]
                    ),
                })?;
            original_index.entry(handle.index()).or_insert(index);
        }

        let mut triangles = Vec::with_capacity(triangulation.num_inner_faces());
        for face in triangulation.inner_faces() {
            let mut triangle: Triangle = [0; 3];
            for (slot, vertex) in triangle.iter_mut().zip(face.vertices()) {
                *slot = original_index
                    .get(&vertex.fix().index())
                    .copied()
                    .ok_or_else(|| GenerationError::Triangulation {
                        reason: "triangulation produced an unknown vertex".to_string(),
                    })?;
            }
            triangles.push(triangle);
        }

        Ok(triangles)
    }
}

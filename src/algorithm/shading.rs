//! Per-triangle gradient shading
//!
//! Each triangle receives a single intensity derived from its centroid's
//! position along a rotated gradient axis, fuzzed by a bounded uniform
//! draw, and is painted as a filled polygon. Triangles paint independently
//! in triangulation output order; a zero-area triangle simply fills no
//! pixels.

use crate::io::error::{GenerationError, Result};
use crate::math::gradient;
use crate::spatial::canvas::Canvas;
use crate::spatial::point::{Point, PointSet};
use crate::spatial::triangulation::Triangle;
use rand::Rng;

/// Shading parameters for one generation
#[derive(Debug, Clone, Copy)]
pub struct TriangleShader {
    width: u32,
    height: u32,
    angle: f64,
    value_min: u8,
    value_max: u8,
    fuzz: f64,
}

impl TriangleShader {
    /// Create a shader for the given canvas dimensions and gradient settings
    pub const fn new(
        width: u32,
        height: u32,
        angle: f64,
        value_min: u8,
        value_max: u8,
        fuzz: f64,
    ) -> Self {
        Self {
            width,
            height,
            angle,
            value_min,
            value_max,
            fuzz,
        }
    }

    /// Intensity for a triangle with the given vertices and fuzz draw
    ///
    /// The gradient fraction plus `fuzz_offset` is clipped to the unit
    /// interval before mapping, so the result always lies within
    /// [`value_min`, `value_max`] no matter the centroid or draw.
    pub fn intensity(&self, a: Point, b: Point, c: Point, fuzz_offset: f64) -> u8 {
        let centroid = gradient::centroid(a, b, c);
        let fraction =
            gradient::gradient_fraction(centroid, self.width, self.height, self.angle) + fuzz_offset;
        gradient::to_intensity(
            gradient::clip_unit(fraction),
            self.value_min,
            self.value_max,
        )
    }

    /// Shade every triangle into the canvas
    ///
    /// An empty triangle list is valid and leaves the canvas untouched.
    /// With a fuzz radius of zero no random draws are made, so repeated
    /// shading of the same input produces identical canvases.
    ///
    /// # Errors
    ///
    /// Returns an error if a triangle references a point index outside the
    /// point set.
    pub fn shade<R: Rng>(
        &self,
        points: &PointSet,
        triangles: &[Triangle],
        canvas: &mut Canvas<u8>,
        rng: &mut R,
    ) -> Result<()> {
        for triangle in triangles {
            let [a, b, c] = resolve(points, *triangle)?;
            let fuzz_offset = if self.fuzz > 0.0 {
                rng.random_range(-self.fuzz..=self.fuzz)
            } else {
                0.0
            };
            let value = self.intensity(a, b, c, fuzz_offset);
            canvas.fill_polygon(&[a, b, c], value);
        }
        Ok(())
    }
}

// Resolve a triangle's vertex indices against the point set.
fn resolve(points: &PointSet, triangle: Triangle) -> Result<[Point; 3]> {
    let mut vertices = [[0.0, 0.0]; 3];
    for (vertex, index) in vertices.iter_mut().zip(triangle) {
        *vertex = points
            .get(index)
            .ok_or(GenerationError::InvalidPointIndex {
                index,
                point_count: points.len(),
            })?;
    }
    Ok(vertices)
}

//! Low-poly wallpaper generation from repulsion-relaxed triangulations
//!
//! The pipeline scatters points over a canvas, relaxes them under pairwise
//! inverse-square repulsion, augments the borders so the triangulation spans
//! the whole image, triangulates, and shades each triangle from an
//! angle-rotated gradient with bounded random fuzz before tinting the result
//! between two colors.

#![forbid(unsafe_code)]

/// Core pipeline: relaxation, border sampling, shading, and orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for forces and gradient shading
pub mod math;
/// Spatial data structures: points, canvas, triangulation
pub mod spatial;

pub use io::error::{GenerationError, Result};

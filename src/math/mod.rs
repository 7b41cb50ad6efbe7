//! Mathematical utilities for the generation pipeline

/// Pairwise repulsive force computation
pub mod force;
/// Gradient evaluation and intensity mapping for triangle shading
pub mod gradient;

//! Input/output operations and error handling

/// Command-line interface and generation driver
pub mod cli;
/// Default values for every configuration knob
pub mod configuration;
/// Error types for generation operations
pub mod error;
/// Colorization and atomic PNG export
pub mod image;
/// Relaxation progress display
pub mod progress;

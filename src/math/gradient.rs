//! Gradient evaluation and intensity mapping for triangle shading

use crate::spatial::point::Point;

/// Centroid of a triangle as the truncated component-wise vertex mean
///
/// Truncation toward zero keeps the centroid on the integer pixel grid;
/// shading positions do not need sub-pixel precision.
pub fn centroid(a: Point, b: Point, c: Point) -> Point {
    [
        ((a[0] + b[0] + c[0]) / 3.0).trunc(),
        ((a[1] + b[1] + c[1]) / 3.0).trunc(),
    ]
}

/// Fractional gradient value at a position for a given rotation angle
///
/// An angle of zero produces a left-to-right gradient; other angles rotate
/// the gradient axis counter-clockwise.
pub fn gradient_fraction(position: Point, width: u32, height: u32, angle: f64) -> f64 {
    let x_pct = position[0] / f64::from(width);
    let y_pct = position[1] / f64::from(height);
    x_pct.mul_add(angle.cos(), y_pct * angle.sin())
}

/// Clip a fraction into the unit interval
pub fn clip_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Map a unit fraction into the configured intensity range
///
/// The result is truncated to an integer pixel value, so `value_max` is
/// reached only when the fraction is exactly one.
pub fn to_intensity(fraction: f64, value_min: u8, value_max: u8) -> u8 {
    let span = f64::from(value_max) - f64::from(value_min);
    span.mul_add(fraction, f64::from(value_min)) as u8
}

/// Linear interpolation between two channel values
///
/// Exact at both endpoints: t = 0 yields `left`, t = 1 yields `right`.
pub fn lerp_channel(left: u8, right: u8, t: f64) -> u8 {
    (f64::from(right) - f64::from(left))
        .mul_add(t, f64::from(left))
        .round() as u8
}

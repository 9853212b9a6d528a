//! Ellipse rotation angle helper.
//!
//! Converts a 2-D orientation vector into the degree value expected by an
//! SVG rotate transform.

// External dependencies
use num_traits::Float;

/// Rotation angle in degrees for an ellipse glyph with first singular-vector
/// components `(x, y)`.
///
/// # Formula
///
/// ```text
/// angle(x, y) = atan(y / x) · (180/π) + 90
/// ```
///
/// The quotient form is deliberate and quadrant-blind: `(x, y)` and
/// `(-x, -y)` map to the same angle, so `angle(-1, 0) == angle(1, 0) == 90`.
/// At `x == 0` the quotient saturates `atan` to ±π/2, giving 180 or 0, a
/// discontinuity that is preserved, not special-cased.
#[inline]
pub fn ellipse_angle<T: Float>(x: T, y: T) -> T {
    let ninety = T::from(90.0).unwrap_or_else(T::nan);
    (y / x).atan().to_degrees() + ninety
}

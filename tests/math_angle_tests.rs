#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use isolens::internals::math::angle::ellipse_angle;

// ============================================================================
// Ellipse Angle Tests
// ============================================================================

#[test]
fn test_angle_positive_x_axis() {
    assert_relative_eq!(ellipse_angle(1.0, 0.0), 90.0);
}

#[test]
fn test_angle_is_quadrant_blind() {
    // atan(y / x) cannot tell (x, y) from (-x, -y): opposite orientation
    // vectors collapse to the same angle. Pinned as current behavior.
    assert_relative_eq!(ellipse_angle(-1.0, 0.0), 90.0);
    assert_relative_eq!(ellipse_angle(-1.0, -1.0), 135.0);
}

#[test]
fn test_angle_diagonals() {
    assert_relative_eq!(ellipse_angle(1.0, 1.0), 135.0);
    assert_relative_eq!(ellipse_angle(1.0, -1.0), 45.0);
}

#[test]
fn test_angle_zero_x_discontinuity() {
    // y/x saturates atan to ±π/2; the discontinuity is preserved.
    assert_relative_eq!(ellipse_angle(0.0, 1.0), 180.0);
    assert_relative_eq!(ellipse_angle(0.0, -1.0), 0.0);
}

#[test]
fn test_angle_f32() {
    assert_relative_eq!(ellipse_angle(1.0f32, 0.0f32), 90.0, epsilon = 1e-4);
}

#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use isolens::internals::algorithms::correction::{isometry_update, CorrectionContext};
use isolens::internals::algorithms::sqrt::square_root_reorient;
use isolens::prelude::{EmbeddedPoint, LensError, Mat2};

fn context<'a>(
    points: &'a [EmbeddedPoint<f64>],
    positions: &'a [[f64; 2]],
    metrics: &'a [Mat2<f64>],
    metric_rate: f64,
    transform_rate: f64,
) -> CorrectionContext<'a, f64, EmbeddedPoint<f64>> {
    CorrectionContext {
        points,
        positions,
        metrics,
        metric_rate,
        transform_rate,
    }
}

// ============================================================================
// Identity Scenario
// ============================================================================

#[test]
fn test_identity_scenario_no_displacement() {
    // One point at (2,3), metric I, query at (2,3): nothing moves.
    let points = [EmbeddedPoint::new(7, [2.0, 3.0])];
    let positions = [[2.0, 3.0]];
    let metrics = [Mat2::identity()];
    let ctx = context(&points, &positions, &metrics, 1.0, 1.0);

    let correction = isometry_update(&ctx, [2.0, 3.0]).unwrap();
    assert_eq!(correction.reference.m, [[1.0, 0.0], [0.0, 1.0]]);

    let p = &correction.points[0];
    assert_eq!(p.id, 7);
    assert_eq!(p.position, [2.0, 3.0]);
    assert_eq!(p.blend, 1.0);
    assert_eq!(p.emphasis, 1.0);
    assert_relative_eq!(p.semi_axes[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.semi_axes[1], 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.axis[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.axis[1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.angle, 90.0, epsilon = 1e-9);
}

// ============================================================================
// Blend Boundary Tests
// ============================================================================

#[test]
fn test_point_at_query_stays_fixed() {
    // f* == f_n makes the whitening transform a no-op for that point, even
    // with a strongly anisotropic reference metric.
    let points = [
        EmbeddedPoint::new(0, [1.0, 1.0]),
        EmbeddedPoint::new(1, [3.0, 1.0]),
    ];
    let positions = [[1.0, 1.0], [3.0, 1.0]];
    let metrics = [
        Mat2::from_rows([[4.0, 0.0], [0.0, 1.0]]),
        Mat2::identity(),
    ];
    let ctx = context(&points, &positions, &metrics, 2.0, 2.0);

    let correction = isometry_update(&ctx, [1.0, 1.0]).unwrap();
    assert_eq!(correction.points[0].position, [1.0, 1.0]);
    assert_eq!(correction.points[0].blend, 1.0);
}

#[test]
fn test_nearest_point_gets_full_correction() {
    // The range-normalized falloff weight of the nearest point is exactly 1,
    // so its output equals the whitened position with no blend residue.
    let points = [
        EmbeddedPoint::new(0, [0.5, 0.0]),
        EmbeddedPoint::new(1, [5.0, 0.0]),
    ];
    let positions = [[0.5, 0.0], [5.0, 0.0]];
    let metrics = [
        Mat2::from_rows([[4.0, 0.0], [0.0, 1.0]]),
        Mat2::from_rows([[4.0, 0.0], [0.0, 1.0]]),
    ];
    let ctx = context(&points, &positions, &metrics, 1.0, 1.0);

    let query = [0.0, 0.0];
    let correction = isometry_update(&ctx, query).unwrap();

    // Recompose the expected whitened position from the same building blocks.
    let h_sqrt_inv = square_root_reorient(&correction.reference)
        .inverse()
        .unwrap();
    let rel = h_sqrt_inv.mul_vec([0.5, 0.0]);
    let expected = [rel[0] + query[0], rel[1] + query[1]];

    assert_eq!(correction.points[0].blend, 1.0);
    assert_eq!(correction.points[0].position, expected);
    // The reference is ≈ diag(4,1); whitening compresses x by ≈ 2.
    assert_relative_eq!(correction.points[0].position[0], 0.25, epsilon = 1e-3);
}

#[test]
fn test_distant_point_keeps_original_position() {
    // With a tight falloff the far point's blend fraction underflows the
    // addition entirely: output equals input bit for bit.
    let points = [
        EmbeddedPoint::new(0, [0.0, 0.0]),
        EmbeddedPoint::new(1, [10.0, 7.0]).with_ellipse(0.5, 0.25, 0.0, 1.0),
    ];
    let positions = [[0.0, 0.0], [10.0, 7.0]];
    let metrics = [Mat2::identity().scale(3.0), Mat2::identity().scale(3.0)];
    let ctx = context(&points, &positions, &metrics, 1.0, 50.0);

    let correction = isometry_update(&ctx, [0.0, 0.0]).unwrap();
    let far = &correction.points[1];
    assert_eq!(far.position, [10.0, 7.0]);
    assert_eq!(far.semi_axes, [0.5, 0.25]);
    assert_relative_eq!(far.axis[0], 0.0, epsilon = 1e-100);
    assert_relative_eq!(far.axis[1], 1.0);
}

// ============================================================================
// Output Record Tests
// ============================================================================

#[test]
fn test_output_is_index_aligned_with_passthrough() {
    let points = [
        EmbeddedPoint::new(10, [0.0, 0.0]).with_color(0.2),
        EmbeddedPoint::new(20, [1.0, 0.0]),
        EmbeddedPoint::new(30, [0.0, 1.0]).with_color(0.9),
    ];
    let positions = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    let metrics = [Mat2::identity(); 3];
    let ctx = context(&points, &positions, &metrics, 1.0, 1.0);

    let correction = isometry_update(&ctx, [0.2, 0.2]).unwrap();
    assert_eq!(correction.points.len(), 3);
    assert_eq!(correction.points[0].id, 10);
    assert_eq!(correction.points[1].id, 20);
    assert_eq!(correction.points[2].id, 30);
    assert_eq!(correction.points[0].color, Some(0.2));
    assert_eq!(correction.points[1].color, None);
    assert_eq!(correction.points[2].color, Some(0.9));
}

#[test]
fn test_emphasis_is_range_renormalized() {
    let points = [
        EmbeddedPoint::new(0, [0.0, 0.0]),
        EmbeddedPoint::new(1, [2.0, 0.0]),
        EmbeddedPoint::new(2, [4.0, 0.0]),
    ];
    let positions = [[0.0, 0.0], [2.0, 0.0], [4.0, 0.0]];
    let metrics = [Mat2::identity(); 3];
    let ctx = context(&points, &positions, &metrics, 1.0, 1.0);

    let correction = isometry_update(&ctx, [0.0, 0.0]).unwrap();
    // The nearest point carries the maximal structural weight.
    assert_eq!(correction.points[0].emphasis, 1.0);
    assert!(correction.points[1].emphasis < 1.0);
    assert!(correction.points[2].emphasis < correction.points[1].emphasis);
}

#[test]
fn test_isotropic_reference_rescales_uniformly() {
    // With h* = 4I the whitening contracts every offset by 2 toward the
    // query, and the relative metric h⁻¹·M is exactly I at every point.
    let points = [
        EmbeddedPoint::new(0, [0.0, 0.0]),
        EmbeddedPoint::new(1, [2.0, 0.0]),
    ];
    let positions = [[0.0, 0.0], [2.0, 0.0]];
    let metrics = [Mat2::identity().scale(4.0), Mat2::identity().scale(4.0)];
    // transform_rate 0: every point blends fully.
    let ctx = context(&points, &positions, &metrics, 0.0, 0.0);

    let correction = isometry_update(&ctx, [0.0, 0.0]).unwrap();
    assert_relative_eq!(correction.points[1].position[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(correction.points[1].position[1], 0.0, epsilon = 1e-9);
    assert_relative_eq!(correction.points[1].semi_axes[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(correction.points[1].semi_axes[1], 1.0, epsilon = 1e-9);
}

// ============================================================================
// Failure Mode Tests
// ============================================================================

#[test]
fn test_nan_query_is_degenerate() {
    let points = [EmbeddedPoint::new(0, [0.0, 0.0])];
    let positions = [[0.0, 0.0]];
    let metrics = [Mat2::identity()];
    let ctx = context(&points, &positions, &metrics, 1.0, 1.0);

    assert_eq!(
        isometry_update(&ctx, [f64::NAN, f64::NAN]).unwrap_err(),
        LensError::DegenerateWeights
    );
}

#[test]
fn test_zero_metrics_are_singular() {
    let points = [EmbeddedPoint::new(0, [0.0, 0.0])];
    let positions = [[0.0, 0.0]];
    let metrics = [Mat2::zero()];
    let ctx = context(&points, &positions, &metrics, 1.0, 1.0);

    let err = isometry_update(&ctx, [0.0, 0.0]).unwrap_err();
    assert!(matches!(err, LensError::SingularMetric { .. }));
}

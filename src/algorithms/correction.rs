//! Per-event correction and blend loop.
//!
//! ## Purpose
//!
//! This module is the per-event driver of the engine. Given a query
//! position it computes the reference metric of the neighborhood, derives
//! the corrective affine map that would make the neighborhood locally
//! isometric, applies it to every point, and blends corrected and original
//! positions and ellipse descriptors with a second, independently tuned
//! falloff kernel.
//!
//! ## Design notes
//!
//! * **Explicit context**: all event-independent state (points, cached
//!   positions, metrics, rates) lives in an immutable [`CorrectionContext`];
//!   [`isometry_update`] is a pure function of `(context, query)` and
//!   repeated identical events are idempotent.
//! * **Two normalizations**: the structural weights `kn` sum to 1, while
//!   the falloff weights `kn_t` are divided by their maximum so they act as
//!   per-point blend fractions in [0, 1]. The asymmetry is deliberate.
//! * **Hot loop**: one closed-form SVD and one affine transform per point;
//!   no allocation besides the output vector.
//! * **No per-point canonicalization**: the per-point decomposition keeps
//!   the raw SVD orientation, unlike the reference-metric square root.
//!
//! ## Key concepts
//!
//! * **Isometrized position**: `f̃ = h_sqrt_inv · (f − f*) + f*`, an affine
//!   whitening transform centered at the query.
//! * **Relative metric**: `H = h_inv · M`, a point's tensor expressed
//!   relative to the reference metric; its singular values/vectors describe
//!   the residual local anisotropy in the corrected frame.
//!
//! ## Invariants
//!
//! * Output is index-aligned with the input dataset.
//! * A blend fraction of exactly 1 yields the fully corrected position; a
//!   fraction of exactly 0 yields the original position, bit for bit.
//!
//! ## Non-goals
//!
//! * This module does not gate events (freeze latch is the executor's) and
//!   does not retain any state between calls.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::averaging::{local_metric, LocalMetric};
use crate::algorithms::sqrt::square_root_reorient;
use crate::math::angle::ellipse_angle;
use crate::math::kernel;
use crate::math::linalg::SvdLinalg;
use crate::math::mat2::Mat2;
use crate::math::svd2::svd2;
use crate::primitives::errors::LensError;
use crate::primitives::record::{CorrectedPoint, PointFields};

// ============================================================================
// Correction Context
// ============================================================================

/// Immutable per-session state shared by every correction event.
///
/// Borrows the dataset and metrics from their owner (typically the
/// executor) together with the two kernel rates. Positions are resolved
/// through [`PointFields`] once, up front, not on every event.
#[derive(Debug, Clone, Copy)]
pub struct CorrectionContext<'a, T, P> {
    /// The embedded points, index-aligned with `metrics`.
    pub points: &'a [P],

    /// Cached 2-D positions of `points`.
    pub positions: &'a [[T; 2]],

    /// Per-point distortion tensors, index-aligned with `points`.
    pub metrics: &'a [Mat2<T>],

    /// Structural kernel rate: how local the reference-metric estimate is.
    pub metric_rate: T,

    /// Visual kernel rate: how far the on-screen correction propagates.
    pub transform_rate: T,
}

// ============================================================================
// Correction Output
// ============================================================================

/// Full output of one correction event.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction<T: Float> {
    /// Corrected points, index-aligned with the input dataset.
    pub points: Vec<CorrectedPoint<T>>,

    /// The reference metric `h*` the correction was derived from.
    pub reference: Mat2<T>,

    /// Singular values of `h*`, for diagnostics.
    pub singular_values: [T; 2],
}

// ============================================================================
// Correction & Blend Loop
// ============================================================================

/// Run one correction event at `query`.
///
/// # Errors
///
/// * [`LensError::DegenerateWeights`] if either kernel weighting pass cannot
///   be normalized (e.g. a NaN query).
/// * [`LensError::SingularMetric`] if the reference metric or its square
///   root is not invertible. The event is aborted as a whole; no partial
///   output is produced.
pub fn isometry_update<T, P>(
    ctx: &CorrectionContext<'_, T, P>,
    query: [T; 2],
) -> Result<Correction<T>, LensError>
where
    T: SvdLinalg,
    P: PointFields<T>,
{
    let LocalMetric {
        reference,
        singular_values,
        weights: kn,
    } = local_metric(ctx.metrics, query, ctx.positions, ctx.metric_rate)?;

    // Falloff weights: range-normalized so the nearest point blends fully.
    let kn_t = kernel::range_normalized(query, ctx.positions, ctx.transform_rate)?;

    let h_sqrt = square_root_reorient(&reference);
    let h_sqrt_inv = h_sqrt.inverse().ok_or(LensError::SingularMetric {
        determinant: h_sqrt.determinant().to_f64().unwrap_or(f64::NAN),
    })?;
    let h_inv = reference.inverse().ok_or(LensError::SingularMetric {
        determinant: reference.determinant().to_f64().unwrap_or(f64::NAN),
    })?;

    // kn is renormalized by its maximum a second time, purely for color
    // encoding of the structural weight.
    let kn_max = kn.iter().fold(T::zero(), |acc, &w| acc.max(w));

    let mut corrected = Vec::with_capacity(ctx.points.len());
    for (n, point) in ctx.points.iter().enumerate() {
        let f = ctx.positions[n];
        let w = kn_t[n];
        let keep = T::one() - w;

        // Fully corrected position: whitening transform centered at the query.
        let rel = [f[0] - query[0], f[1] - query[1]];
        let iso = h_sqrt_inv.mul_vec(rel);
        let iso = [iso[0] + query[0], iso[1] + query[1]];

        let position = [w * iso[0] + keep * f[0], w * iso[1] + keep * f[1]];

        // Residual anisotropy relative to the reference metric.
        let relative = h_inv.mul(&ctx.metrics[n]);
        let (q, v) = svd2(&relative);

        let seed_axes = point.semi_axes();
        let seed_axis = point.axis();
        let semi_axes = [
            w * q[0] + keep * seed_axes[0],
            w * q[1] + keep * seed_axes[1],
        ];
        let axis = [
            w * v.m[0][0] + keep * seed_axis[0],
            w * v.m[1][0] + keep * seed_axis[1],
        ];

        corrected.push(CorrectedPoint {
            id: point.id(),
            position,
            semi_axes,
            axis,
            angle: ellipse_angle(axis[0], axis[1]),
            blend: w,
            emphasis: kn[n] / kn_max,
            color: point.color(),
        });
    }

    Ok(Correction {
        points: corrected,
        reference,
        singular_values,
    })
}

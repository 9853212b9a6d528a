//! Closed-form singular value decomposition for 2×2 matrices.
//!
//! ## Purpose
//!
//! The per-event correction loop runs one SVD per point, which makes an
//! iterative general-purpose SVD routine the dominant cost as the dataset
//! grows. This module provides a closed-form 2×2 decomposition producing the
//! singular values and right singular vectors — the only factors the loop
//! consumes.
//!
//! ## Design notes
//!
//! * **Method**: symmetric eigendecomposition of `AᵀA`. With
//!   `AᵀA = [[p, q], [q, r]]`, the rotation angle is
//!   `θ = ½·atan2(2q, p − r)` and the eigenvalues are
//!   `(p + r)/2 ± √(((p − r)/2)² + q²)`; singular values are their square
//!   roots (clamped at zero against round-off).
//! * **Ordering**: singular values are returned in descending order, with
//!   the first column of `V` associated with the larger one.
//! * **Proper rotation**: `V` is always a rotation (`det V = +1`), which
//!   makes the decomposition deterministic; no further sign canonicalization
//!   is applied here (the reference-metric path layers that on separately).
//!
//! ## Non-goals
//!
//! * This module does not compute left singular vectors; nothing in the
//!   pipeline consumes them.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::mat2::Mat2;

// ============================================================================
// Closed-Form 2x2 SVD
// ============================================================================

/// Compute the singular values and right singular vectors of a 2×2 matrix.
///
/// Returns `(values, v)` with `values[0] >= values[1]` and `v` a proper
/// rotation whose first column corresponds to `values[0]`.
#[inline]
pub fn svd2<T: Float>(a: &Mat2<T>) -> ([T; 2], Mat2<T>) {
    let two = T::one() + T::one();

    // Gram matrix AᵀA = [[p, q], [q, r]].
    let p = a.m[0][0] * a.m[0][0] + a.m[1][0] * a.m[1][0];
    let q = a.m[0][0] * a.m[0][1] + a.m[1][0] * a.m[1][1];
    let r = a.m[0][1] * a.m[0][1] + a.m[1][1] * a.m[1][1];

    let mean = (p + r) / two;
    let diff = (p - r) / two;
    let root = (diff * diff + q * q).sqrt();

    let l0 = (mean + root).max(T::zero());
    let l1 = (mean - root).max(T::zero());

    let theta = (two * q).atan2(p - r) / two;
    let (sin, cos) = theta.sin_cos();

    let v = Mat2::from_rows([[cos, -sin], [sin, cos]]);
    ([l0.sqrt(), l1.sqrt()], v)
}

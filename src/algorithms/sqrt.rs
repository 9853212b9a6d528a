//! Canonical square root of the reference metric.
//!
//! ## Purpose
//!
//! A symmetric PSD tensor has no unique square root; picking one
//! arbitrarily makes the corrective transform jitter between consecutive
//! events on nearly-symmetric inputs. This module computes a square-root
//! factor with a deterministic, sign-consistent orientation so the
//! correction stays stable as the query point moves continuously.
//!
//! ## Key concepts
//!
//! * **Reorientation**: the right singular vectors are canonicalized so the
//!   first singular direction is the one more aligned with the x-axis, the
//!   basis is a proper rotation (determinant +1), and the first basis vector
//!   points into the right half-plane.
//! * **Factor convention**: the result is `V · diag(√q0, √q1)`; for a
//!   symmetric PSD input `A`, `B · Bᵀ ≈ A`.
//!
//! ## Invariants
//!
//! * After reorientation, `det(V) > 0` and `V[0][0] >= 0`.
//!
//! ## Non-goals
//!
//! * This module does not canonicalize the per-point decompositions of the
//!   correction loop; those deliberately keep the raw SVD orientation.

// Internal dependencies
use crate::math::linalg::SvdLinalg;
use crate::math::mat2::Mat2;

// ============================================================================
// Reorientation
// ============================================================================

/// Canonicalize a right-singular-vector basis and its singular values.
///
/// Applied in order:
/// 1. If `|V[0][0]| < |V[0][1]|`, swap the two columns (and the two
///    singular values) so the first singular direction is the one more
///    aligned with the x-axis.
/// 2. If `det(V) < 0`, negate the second column: a proper rotation, not a
///    reflection.
/// 3. If `V[0][0] < 0`, negate both columns so the first basis vector
///    points into the right half-plane.
pub fn reorient<T: SvdLinalg>(v: &mut Mat2<T>, q: &mut [T; 2]) {
    if v.m[0][0].abs() < v.m[0][1].abs() {
        // Right-multiply by the permutation [[0,1],[1,0]].
        for row in v.m.iter_mut() {
            row.swap(0, 1);
        }
        q.swap(0, 1);
    }

    if v.determinant() < T::zero() {
        // Right-multiply by diag(1, -1).
        for row in v.m.iter_mut() {
            row[1] = -row[1];
        }
    }

    if v.m[0][0] < T::zero() {
        // Right-multiply by diag(-1, -1).
        for row in v.m.iter_mut() {
            row[0] = -row[0];
            row[1] = -row[1];
        }
    }
}

// ============================================================================
// Square Root
// ============================================================================

/// Square-root factor of a symmetric PSD 2×2 tensor with canonical
/// orientation.
///
/// Runs the backend SVD, reorients the singular vectors, and returns
/// `V · diag(√q0, √q1)`.
pub fn square_root_reorient<T: SvdLinalg>(a: &Mat2<T>) -> Mat2<T> {
    let (mut q, mut v) = T::svd2(a);
    reorient(&mut v, &mut q);
    v.mul_diag(q[0].sqrt(), q[1].sqrt())
}

//! Kernel-weighted averaging of metric tensors.
//!
//! ## Purpose
//!
//! This module builds the reference metric `h*` for a query position: the
//! sum-normalized kernel-weighted average of every point's distortion
//! tensor. The reference metric represents the local quadratic distortion
//! form of the neighborhood and anchors the corrective affine map.
//!
//! ## Design notes
//!
//! * **Pure in its inputs**: recomputed fresh on every event; nothing is
//!   persisted across events.
//! * **Diagnostic SVD**: the singular values of `h*` are exposed for
//!   visual/diagnostic use; the singular vectors from this call are not
//!   consumed (the canonical square root runs its own decomposition).
//!
//! ## Invariants
//!
//! * If all input tensors are symmetric, `h*` is symmetric (a nonnegative
//!   linear combination of symmetric matrices).
//!
//! ## Non-goals
//!
//! * This module does not verify that tensors are symmetric PSD.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::kernel;
use crate::math::linalg::SvdLinalg;
use crate::math::mat2::Mat2;
use crate::primitives::errors::LensError;

// ============================================================================
// LocalMetric
// ============================================================================

/// The reference metric of a query neighborhood.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalMetric<T> {
    /// The kernel-weighted average tensor `h*`.
    pub reference: Mat2<T>,

    /// Singular values of `h*`, exposed for diagnostics.
    pub singular_values: [T; 2],

    /// The sum-normalized weight vector used for the average.
    pub weights: Vec<T>,
}

// ============================================================================
// Metric Averaging
// ============================================================================

/// Compute the reference metric at `query`.
///
/// `h* = Σᵢ w[i] · metrics[i]` with `w` the sum-normalized kernel weights of
/// the dataset at the given decay `rate`, accumulated from the zero matrix.
///
/// # Errors
///
/// Returns [`LensError::DegenerateWeights`] if the kernel weights cannot be
/// normalized (see `math::kernel`).
pub fn local_metric<T: SvdLinalg>(
    metrics: &[Mat2<T>],
    query: [T; 2],
    positions: &[[T; 2]],
    rate: T,
) -> Result<LocalMetric<T>, LensError> {
    debug_assert_eq!(metrics.len(), positions.len());

    let weights = kernel::sum_normalized(query, positions, rate)?;

    let mut reference = Mat2::zero();
    for (tensor, &w) in metrics.iter().zip(weights.iter()) {
        reference = reference.add_scaled(tensor, w);
    }

    let (singular_values, _) = T::svd2(&reference);

    Ok(LocalMetric {
        reference,
        singular_values,
        weights,
    })
}

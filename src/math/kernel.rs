//! Exponential similarity kernel and weight normalization.
//!
//! ## Purpose
//!
//! This module provides the distance-decay kernel used to weight every point
//! of the dataset relative to a query position, together with the two
//! normalization conventions of the pipeline:
//!
//! - **Sum normalization** for the reference-metric average (weights form a
//!   probability distribution over the dataset).
//! - **Range normalization** for the visual falloff (the nearest point gets
//!   weight 1; weights act as per-point blend fractions, not probabilities).
//!
//! ## Design notes
//!
//! * **NaN guard**: a NaN distance (malformed input row) yields similarity 0
//!   rather than propagating NaN into the weight vector.
//! * **Explicit degeneracy**: a zero total (or maximum) weight returns
//!   [`LensError::DegenerateWeights`] rather than dividing by zero.
//! * **Asymmetric by design**: the sum/max split between the two
//!   normalizations is load-bearing and must not be harmonized.
//!
//! ## Key concepts
//!
//! * **Rate, not bandwidth**: the parameter is an exponential decay rate;
//!   larger values mean *tighter* locality. A rate of 0 weights all points
//!   equally.
//!
//! ## Invariants
//!
//! * `similarity(a, a, rate) == 1` for any finite `a` and `rate`.
//! * Sum-normalized weights are non-negative and sum to 1.
//! * Range-normalized weights are in [0, 1] with at least one entry equal
//!   to 1.
//!
//! ## Non-goals
//!
//! * This module does not select neighborhoods; every point is weighted.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LensError;

// ============================================================================
// Similarity Kernel
// ============================================================================

/// Exponential distance-decay similarity between two 2-D points.
///
/// # Formula
///
/// ```text
/// similarity(a, b, rate) = exp(-rate * ||a - b||₂)
/// ```
///
/// Returns a value in (0, 1], exactly 1 when `a == b`. If the distance or
/// the result is NaN (missing/NaN coordinates), returns 0 instead.
#[inline]
pub fn similarity<T: Float>(a: [T; 2], b: [T; 2], rate: T) -> T {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dist = (dx * dx + dy * dy).sqrt();
    let sim = (-rate * dist).exp();
    if sim.is_nan() {
        T::zero()
    } else {
        sim
    }
}

// ============================================================================
// Weight Normalization
// ============================================================================

/// Raw similarity of the query against every point, in dataset order.
#[inline]
fn raw_similarities<T: Float>(query: [T; 2], positions: &[[T; 2]], rate: T) -> Vec<T> {
    positions
        .iter()
        .map(|&p| similarity(query, p, rate))
        .collect()
}

/// Sum-normalized kernel weights over the dataset.
///
/// Every entry is divided by the total so that the weights sum to 1.
///
/// # Errors
///
/// Returns [`LensError::DegenerateWeights`] if the total similarity is zero
/// (empty dataset, or every similarity collapsed to 0 via the NaN guard).
pub fn sum_normalized<T: Float>(
    query: [T; 2],
    positions: &[[T; 2]],
    rate: T,
) -> Result<Vec<T>, LensError> {
    let mut weights = raw_similarities(query, positions, rate);
    let total = weights.iter().fold(T::zero(), |acc, &w| acc + w);

    if !(total > T::zero()) || !total.is_finite() {
        return Err(LensError::DegenerateWeights);
    }

    for w in weights.iter_mut() {
        *w = *w / total;
    }
    Ok(weights)
}

/// Range-normalized kernel weights over the dataset.
///
/// Every entry is divided by the maximum so that the nearest point gets
/// weight 1 and far points decay toward 0. The result is a per-point blend
/// fraction, not a probability distribution.
///
/// # Errors
///
/// Returns [`LensError::DegenerateWeights`] if the maximum similarity is
/// zero.
pub fn range_normalized<T: Float>(
    query: [T; 2],
    positions: &[[T; 2]],
    rate: T,
) -> Result<Vec<T>, LensError> {
    let mut weights = raw_similarities(query, positions, rate);
    let max = weights.iter().fold(T::zero(), |acc, &w| acc.max(w));

    if !(max > T::zero()) || !max.is_finite() {
        return Err(LensError::DegenerateWeights);
    }

    for w in weights.iter_mut() {
        *w = *w / max;
    }
    Ok(weights)
}

//! Error types for the lens correction pipeline.
//!
//! ## Purpose
//!
//! This module defines the error taxonomy for the crate. Every failure mode
//! of the correction pipeline surfaces as a [`LensError`] variant instead of
//! silent NaN propagation or a panic.
//!
//! ## Design notes
//!
//! * **Explicit over silent**: degenerate kernel weights and singular
//!   reference metrics are reported as errors, never folded into NaN output.
//! * **Fail-stop per event**: an error aborts the current event's update;
//!   the executor keeps the previous frame (see `engine::executor`).
//! * **no_std friendly**: variants carry only `Copy` payloads; `Display` is
//!   implemented manually and `std::error::Error` is gated on `std`.
//!
//! ## Non-goals
//!
//! * This module does not define recovery policies (executor concern).
//! * This module does not validate inputs (see `engine::validator`).

// External dependencies
use core::fmt;

// ============================================================================
// LensError
// ============================================================================

/// Errors produced by lens configuration, validation, and per-event updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LensError {
    /// The dataset contains no points.
    EmptyDataset,

    /// The point and metric arrays have different lengths.
    MismatchedInputs {
        /// Number of embedded points supplied.
        points: usize,
        /// Number of metric tensors supplied.
        metrics: usize,
    },

    /// A kernel rate parameter is NaN or infinite.
    InvalidRate {
        /// Parameter name (`"metric_rate"` or `"transform_rate"`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Every kernel weight collapsed to zero (empty dataset or all
    /// similarities degenerated through the NaN guard), so no normalization
    /// is possible.
    DegenerateWeights,

    /// The reference metric (or its square-root factor) is not invertible.
    SingularMetric {
        /// The determinant that failed the invertibility check.
        determinant: f64,
    },

    /// A metric tensor failed strict validation (non-finite entries or
    /// asymmetry). Only raised when strict tensor checking is enabled.
    InvalidTensor {
        /// Index of the offending tensor in the input array.
        index: usize,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for LensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LensError::EmptyDataset => {
                write!(f, "dataset is empty: at least one point is required")
            }
            LensError::MismatchedInputs { points, metrics } => {
                write!(
                    f,
                    "mismatched inputs: {} points but {} metric tensors (must be index-aligned)",
                    points, metrics
                )
            }
            LensError::InvalidRate { name, value } => {
                write!(f, "invalid kernel rate: {}={} must be finite", name, value)
            }
            LensError::DegenerateWeights => {
                write!(
                    f,
                    "degenerate kernel weights: total similarity is zero (empty or all-NaN input)"
                )
            }
            LensError::SingularMetric { determinant } => {
                write!(
                    f,
                    "singular reference metric: determinant {} is not invertible",
                    determinant
                )
            }
            LensError::InvalidTensor { index } => {
                write!(
                    f,
                    "invalid metric tensor at index {}: entries must be finite and symmetric",
                    index
                )
            }
            LensError::DuplicateParameter { parameter } => {
                write!(f, "parameter '{}' was set more than once", parameter)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LensError {}

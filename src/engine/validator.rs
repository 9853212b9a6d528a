//! Input validation for lens configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for the lens configuration
//! parameters and input data: array alignment, rate finiteness, and the
//! opt-in strict tensor check.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Permissive by default**: tensors are assumed symmetric PSD, not
//!   verified, unless strict checking is requested — matching the engine's
//!   input contract.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not reject NaN coordinates: the kernel's NaN guard
//!   handles malformed rows at weighting time.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::mat2::Mat2;
use crate::primitives::errors::LensError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for lens configuration and input data.
///
/// Provides static methods returning `Result<(), LensError>` that fail fast
/// upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate dataset/metric array alignment.
    pub fn validate_inputs(n_points: usize, n_metrics: usize) -> Result<(), LensError> {
        // Check 1: Non-empty dataset
        if n_points == 0 {
            return Err(LensError::EmptyDataset);
        }

        // Check 2: Index alignment
        if n_points != n_metrics {
            return Err(LensError::MismatchedInputs {
                points: n_points,
                metrics: n_metrics,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a kernel rate parameter.
    ///
    /// # Notes
    ///
    /// * Rates are conventionally positive but unconstrained in sign: a rate
    ///   of 0 weights all points equally. Only finiteness is enforced.
    pub fn validate_rate<T: Float>(name: &'static str, rate: T) -> Result<(), LensError> {
        if !rate.is_finite() {
            return Err(LensError::InvalidRate {
                name,
                value: rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), LensError> {
        if let Some(parameter) = duplicate_param {
            return Err(LensError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // Strict Tensor Validation (opt-in)
    // ========================================================================

    /// Validate that every tensor has finite entries and is symmetric.
    ///
    /// Only called when strict tensor checking is enabled; the default
    /// contract assumes well-formed tensors without verifying them.
    pub fn validate_metrics<T: Float>(metrics: &[Mat2<T>]) -> Result<(), LensError> {
        for (index, tensor) in metrics.iter().enumerate() {
            // Tolerance scales with the off-diagonal magnitude.
            let scale = T::one() + tensor.m[0][1].abs().max(tensor.m[1][0].abs());
            if !tensor.is_finite() || !tensor.is_symmetric(T::epsilon().sqrt() * scale) {
                return Err(LensError::InvalidTensor { index });
            }
        }
        Ok(())
    }
}

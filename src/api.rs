//! High-level API for the correction lens.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring the two kernel rates and strictness,
//! ending in `build(points, metrics)` which validates the inputs and
//! produces a [`LensExecutor`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: parameters and inputs are validated when `build` is
//!   called, fail-fast and in cheap-to-expensive order.
//! * **Type-Safe**: generic over `SvdLinalg` float types and over any point
//!   record implementing [`PointFields`].
//!
//! ### Configuration flow
//!
//! 1. Create a [`LensBuilder`] via `Lens::new()`.
//! 2. Chain configuration methods (`.metric_rate()`, `.transform_rate()`).
//! 3. Call `.build(points, metrics)` to validate and obtain the executor.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::linalg::SvdLinalg;
use crate::math::mat2::Mat2;

// Publicly re-exported types
pub use crate::engine::executor::LensExecutor;
pub use crate::engine::output::LensFrame;
pub use crate::primitives::errors::LensError;
pub use crate::primitives::record::{CorrectedPoint, EmbeddedPoint, PointFields};

// ============================================================================
// Lens Builder
// ============================================================================

/// Fluent builder for configuring a correction lens.
///
/// # Example
///
/// ```rust
/// use isolens::prelude::*;
///
/// let points = vec![
///     EmbeddedPoint::new(0, [2.0, 3.0]),
///     EmbeddedPoint::new(1, [4.0, 1.0]),
/// ];
/// let metrics = vec![Mat2::identity(), Mat2::identity()];
///
/// let mut lens = Lens::new()
///     .metric_rate(1.0)
///     .transform_rate(4.0)
///     .build(points, metrics)?;
///
/// let frame = lens.pointer_moved([2.0, 3.0])?.unwrap();
/// assert_eq!(frame.points().len(), 2);
/// # Result::<(), LensError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct LensBuilder<T: SvdLinalg + Debug> {
    /// Structural kernel rate (reference-metric locality).
    pub metric_rate: Option<T>,

    /// Visual kernel rate (correction falloff).
    pub transform_rate: Option<T>,

    /// Enable strict tensor validation at build time.
    pub strict_tensors: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: SvdLinalg + Debug> Default for LensBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SvdLinalg + Debug> LensBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            metric_rate: None,
            transform_rate: None,
            strict_tensors: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the structural kernel rate (default: 1.0).
    ///
    /// Despite "bandwidth" naming conventions elsewhere, this is an
    /// exponential decay *rate*: larger values mean tighter locality.
    pub fn metric_rate(mut self, rate: T) -> Self {
        if self.metric_rate.is_some() {
            self.duplicate_param = Some("metric_rate");
        }
        self.metric_rate = Some(rate);
        self
    }

    /// Set the visual falloff kernel rate (default: 1.0).
    ///
    /// Controls how far the on-screen correction propagates; independent of
    /// the structural rate.
    pub fn transform_rate(mut self, rate: T) -> Self {
        if self.transform_rate.is_some() {
            self.duplicate_param = Some("transform_rate");
        }
        self.transform_rate = Some(rate);
        self
    }

    /// Enable or disable strict tensor validation (default: off).
    ///
    /// When enabled, `build` rejects non-finite or asymmetric tensors with
    /// [`LensError::InvalidTensor`]. When off, tensors are assumed symmetric
    /// PSD without verification, matching the original input contract.
    pub fn strict_tensors(mut self, enabled: bool) -> Self {
        if self.strict_tensors.is_some() {
            self.duplicate_param = Some("strict_tensors");
        }
        self.strict_tensors = Some(enabled);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate the configuration and inputs, and build the executor.
    ///
    /// # Errors
    ///
    /// * [`LensError::DuplicateParameter`] for builder misuse.
    /// * [`LensError::InvalidRate`] for non-finite rates.
    /// * [`LensError::EmptyDataset`] / [`LensError::MismatchedInputs`] for
    ///   malformed inputs.
    /// * [`LensError::InvalidTensor`] under strict tensor validation.
    pub fn build<P: PointFields<T>>(
        self,
        points: Vec<P>,
        metrics: Vec<Mat2<T>>,
    ) -> Result<LensExecutor<T, P>, LensError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let metric_rate = self.metric_rate.unwrap_or_else(T::one);
        let transform_rate = self.transform_rate.unwrap_or_else(T::one);
        Validator::validate_rate("metric_rate", metric_rate)?;
        Validator::validate_rate("transform_rate", transform_rate)?;

        Validator::validate_inputs(points.len(), metrics.len())?;

        if self.strict_tensors.unwrap_or(false) {
            Validator::validate_metrics(&metrics)?;
        }

        Ok(LensExecutor::from_parts(
            points,
            metrics,
            metric_rate,
            transform_rate,
        ))
    }
}

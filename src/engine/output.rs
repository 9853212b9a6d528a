//! Per-event output frame.
//!
//! ## Purpose
//!
//! This module defines [`LensFrame`], the complete result of one correction
//! event: the query it was computed at and the corrected point records, the
//! reference metric, and its singular values. The executor retains the most
//! recent frame as the last-good fallback.
//!
//! ## Non-goals
//!
//! * This module does not render anything; the frame is the in-memory
//!   contract consumed by an external render sink.

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::correction::Correction;
use crate::math::mat2::Mat2;
use crate::primitives::record::CorrectedPoint;

// ============================================================================
// LensFrame
// ============================================================================

/// The complete output of one correction event.
#[derive(Debug, Clone, PartialEq)]
pub struct LensFrame<T: Float> {
    /// The query position (in data space) this frame was computed at.
    pub query: [T; 2],

    /// The correction output: points, reference metric, singular values.
    pub correction: Correction<T>,
}

impl<T: Float> LensFrame<T> {
    /// Corrected points, index-aligned with the input dataset.
    #[inline]
    pub fn points(&self) -> &[CorrectedPoint<T>] {
        &self.correction.points
    }

    /// The reference metric `h*` of this frame.
    #[inline]
    pub fn reference(&self) -> &Mat2<T> {
        &self.correction.reference
    }

    /// Singular values of the reference metric.
    #[inline]
    pub fn singular_values(&self) -> [T; 2] {
        self.correction.singular_values
    }
}

impl<T: Float + fmt::Display> fmt::Display for LensFrame<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lens frame:")?;
        writeln!(f, "  Points: {}", self.correction.points.len())?;
        writeln!(f, "  Query: ({}, {})", self.query[0], self.query[1])?;
        writeln!(
            f,
            "  Reference singular values: ({}, {})",
            self.correction.singular_values[0], self.correction.singular_values[1]
        )
    }
}

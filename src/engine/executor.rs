//! Execution engine for correction events.
//!
//! ## Purpose
//!
//! This module provides the executor that owns the dataset, metrics, and
//! kernel rates for a session and drives the per-event correction loop. It
//! is the seam between the external event source (pointer moves, freeze
//! toggles) and the pure algorithm layer.
//!
//! ## Design notes
//!
//! * **Single-threaded, synchronous**: every event runs to completion on
//!   the calling thread, O(N) in the dataset size. There is no in-flight
//!   work to cancel and no locking.
//! * **Freeze latch**: a boolean toggled by the double-click-equivalent
//!   event. While frozen, pointer moves perform no recomputation and the
//!   previous frame is returned unchanged.
//! * **Last-good-frame fallback**: a failed event (degenerate weights,
//!   singular metric) propagates its error and leaves the retained frame
//!   untouched, so the host keeps rendering the previous state.
//! * **Positions cached once**: `PointFields` accessors are resolved at
//!   construction, not per event.
//!
//! ## Invariants
//!
//! * The retained frame, when present, is always the output of a fully
//!   successful event.
//! * Repeated identical events are idempotent.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (see `validator`; the API layer
//!   calls it before construction).
//! * This module does not convert pixel coordinates to data space; queries
//!   arrive already converted by the caller.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::correction::{isometry_update, CorrectionContext};
use crate::engine::output::LensFrame;
use crate::engine::validator::Validator;
use crate::math::linalg::SvdLinalg;
use crate::math::mat2::Mat2;
use crate::primitives::errors::LensError;
use crate::primitives::record::{EmbeddedPoint, PointFields};

// ============================================================================
// Lens Executor
// ============================================================================

/// Owns a session's dataset and drives per-event corrections.
///
/// Constructed through the API builder (`Lens::new()...build(...)`), which
/// validates the inputs first.
#[derive(Debug, Clone)]
pub struct LensExecutor<T: SvdLinalg, P: PointFields<T> = EmbeddedPoint<T>> {
    /// Embedded points, index-aligned with `metrics`.
    points: Vec<P>,

    /// Per-point distortion tensors.
    metrics: Vec<Mat2<T>>,

    /// Positions cached from `PointFields` at construction.
    positions: Vec<[T; 2]>,

    /// Structural kernel rate.
    metric_rate: T,

    /// Visual falloff kernel rate.
    transform_rate: T,

    /// Freeze latch: while set, move events are ignored.
    frozen: bool,

    /// The most recent successful frame.
    last_frame: Option<LensFrame<T>>,
}

impl<T: SvdLinalg, P: PointFields<T>> LensExecutor<T, P> {
    /// Build an executor from validated inputs.
    ///
    /// Callers outside the API layer must run `Validator::validate_inputs`
    /// (and rate validation) themselves first.
    pub(crate) fn from_parts(
        points: Vec<P>,
        metrics: Vec<Mat2<T>>,
        metric_rate: T,
        transform_rate: T,
    ) -> Self {
        let positions = points.iter().map(|p| p.position()).collect();
        Self {
            points,
            metrics,
            positions,
            metric_rate,
            transform_rate,
            frozen: false,
            last_frame: None,
        }
    }

    // ========================================================================
    // Event Handling
    // ========================================================================

    /// Handle a pointer-move event at `query` (data-space coordinates).
    ///
    /// Returns the current frame: freshly recomputed, or the retained one if
    /// the executor is frozen (`None` if frozen before any successful
    /// event).
    ///
    /// # Errors
    ///
    /// Propagates [`LensError::DegenerateWeights`] and
    /// [`LensError::SingularMetric`] from the correction loop. The retained
    /// frame survives a failed event.
    pub fn pointer_moved(&mut self, query: [T; 2]) -> Result<Option<&LensFrame<T>>, LensError> {
        if self.frozen {
            return Ok(self.last_frame.as_ref());
        }

        let ctx = CorrectionContext {
            points: &self.points,
            positions: &self.positions,
            metrics: &self.metrics,
            metric_rate: self.metric_rate,
            transform_rate: self.transform_rate,
        };
        let correction = isometry_update(&ctx, query)?;

        self.last_frame = Some(LensFrame { query, correction });
        Ok(self.last_frame.as_ref())
    }

    /// Handle the double-click-equivalent event: toggle the freeze latch.
    ///
    /// Returns the new latch state.
    pub fn toggle_freeze(&mut self) -> bool {
        self.frozen = !self.frozen;
        self.frozen
    }

    /// Whether move events are currently ignored.
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    // ========================================================================
    // State Access
    // ========================================================================

    /// The most recent successful frame, if any.
    #[inline]
    pub fn last_frame(&self) -> Option<&LensFrame<T>> {
        self.last_frame.as_ref()
    }

    /// The embedded points.
    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// The metric tensors.
    #[inline]
    pub fn metrics(&self) -> &[Mat2<T>] {
        &self.metrics
    }

    /// The `(metric_rate, transform_rate)` pair.
    #[inline]
    pub fn rates(&self) -> (T, T) {
        (self.metric_rate, self.transform_rate)
    }

    /// Update the kernel rates between events.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::InvalidRate`] for non-finite values; the
    /// previous rates are kept on error.
    pub fn set_rates(&mut self, metric_rate: T, transform_rate: T) -> Result<(), LensError> {
        Validator::validate_rate("metric_rate", metric_rate)?;
        Validator::validate_rate("transform_rate", transform_rate)?;
        self.metric_rate = metric_rate;
        self.transform_rate = transform_rate;
        Ok(())
    }
}

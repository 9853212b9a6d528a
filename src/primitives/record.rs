//! Input and output records for the correction pipeline.
//!
//! ## Purpose
//!
//! This module defines the point records flowing through the engine: the
//! immutable [`EmbeddedPoint`] supplied by the upstream embedding pipeline,
//! the derived [`CorrectedPoint`] emitted per event, and the [`PointFields`]
//! accessor trait decoupling the engine from any concrete record layout.
//!
//! ## Design notes
//!
//! * **Typed accessors**: field access goes through [`PointFields`], resolved
//!   once at executor construction rather than per event. Hosts with their
//!   own row types implement the trait instead of converting their data.
//! * **Immutability**: input records are never mutated; every event produces
//!   fresh [`CorrectedPoint`] values.
//!
//! ## Key concepts
//!
//! * **Ellipse seed**: `(s0, s1)` semi-axis magnitudes plus `(x0, y0)`, the
//!   first singular-vector components, reconstruct the distortion glyph of a
//!   point before any correction is applied.
//! * **Blend weights**: each output carries the blend fraction applied to it
//!   and a range-renormalized emphasis weight for optional color encoding.
//!
//! ## Non-goals
//!
//! * This module does not render glyphs or touch any display scale.
//! * This module does not compute metric tensors.

// External dependencies
use num_traits::Float;

// ============================================================================
// PointFields Trait
// ============================================================================

/// Typed accessors for an embedded point record.
///
/// Implement this for host-specific row types to feed them to the engine
/// without copying into [`EmbeddedPoint`]. Accessors are called once when the
/// executor is built (positions are cached), not on every pointer event.
pub trait PointFields<T: Float> {
    /// Unique identity of the point.
    fn id(&self) -> u64;

    /// Embedded 2-D position.
    fn position(&self) -> [T; 2];

    /// Stored ellipse semi-axis magnitudes `(s0, s1)`.
    fn semi_axes(&self) -> [T; 2];

    /// Stored first singular-vector components `(x0, y0)`.
    fn axis(&self) -> [T; 2];

    /// Optional color attribute, passed through unchanged. Categorical
    /// colors are expected as caller-encoded numeric codes.
    fn color(&self) -> Option<T> {
        None
    }
}

// ============================================================================
// EmbeddedPoint
// ============================================================================

/// An embedded point with its distortion-ellipse seed.
///
/// Produced by the upstream embedding pipeline and treated as immutable
/// input by this engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbeddedPoint<T: Float> {
    /// Unique identity.
    pub id: u64,

    /// Embedded 2-D position.
    pub position: [T; 2],

    /// Ellipse semi-axis magnitudes `(s0, s1)`.
    pub semi_axes: [T; 2],

    /// First singular-vector components `(x0, y0)`.
    pub axis: [T; 2],

    /// Optional color attribute (numeric value or categorical code).
    pub color: Option<T>,
}

impl<T: Float> EmbeddedPoint<T> {
    /// Create a point with a unit, axis-aligned ellipse seed and no color.
    pub fn new(id: u64, position: [T; 2]) -> Self {
        Self {
            id,
            position,
            semi_axes: [T::one(), T::one()],
            axis: [T::one(), T::zero()],
            color: None,
        }
    }

    /// Set the ellipse seed `(s0, s1, x0, y0)`.
    pub fn with_ellipse(mut self, s0: T, s1: T, x0: T, y0: T) -> Self {
        self.semi_axes = [s0, s1];
        self.axis = [x0, y0];
        self
    }

    /// Set the color attribute.
    pub fn with_color(mut self, color: T) -> Self {
        self.color = Some(color);
        self
    }
}

impl<T: Float> PointFields<T> for EmbeddedPoint<T> {
    #[inline]
    fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    fn position(&self) -> [T; 2] {
        self.position
    }

    #[inline]
    fn semi_axes(&self) -> [T; 2] {
        self.semi_axes
    }

    #[inline]
    fn axis(&self) -> [T; 2] {
        self.axis
    }

    #[inline]
    fn color(&self) -> Option<T> {
        self.color
    }
}

// ============================================================================
// CorrectedPoint
// ============================================================================

/// Per-point output of one correction event.
///
/// Index-aligned with the input dataset; consumed by the render sink and
/// discarded (or written back into host state) after the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectedPoint<T: Float> {
    /// Identity passed through from the input point.
    pub id: u64,

    /// Blended (partially corrected) position.
    pub position: [T; 2],

    /// Blended ellipse semi-axis magnitudes.
    pub semi_axes: [T; 2],

    /// Blended first singular-vector components.
    pub axis: [T; 2],

    /// Ellipse rotation angle in degrees, derived from the blended axis.
    pub angle: T,

    /// Blend fraction applied to this point (range-normalized falloff
    /// weight; 1 at the nearest point, decaying toward 0 far away).
    pub blend: T,

    /// Range-renormalized structural weight `kn[n] / max(kn)`, exposed for
    /// color encoding.
    pub emphasis: T,

    /// Color attribute passed through from the input point.
    pub color: Option<T>,
}

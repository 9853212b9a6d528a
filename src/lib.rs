//! # isolens — local-metric correction for 2-D embeddings
//!
//! An interactive local-metric correction engine for 2-D embeddings produced
//! by nonlinear dimensionality reduction (t-SNE, UMAP, MDS, ...).
//!
//! ## What does it do?
//!
//! Nonlinear projections distort space: distances and angles around an
//! embedded point are stretched and rotated relative to the original
//! high-dimensional neighborhood. Each embedded point can carry a
//! precomputed 2×2 local distortion tensor (a Jacobian-derived metric)
//! describing that stretch. Given a query position — typically the pointer
//! location in data space — this engine:
//!
//! 1. Builds a **reference metric** for the query neighborhood by
//!    kernel-weighted averaging of the per-point tensors.
//! 2. Derives a **corrective affine map** (an inverse square-root whitening
//!    transform) that would make the neighborhood locally isometric with
//!    respect to that reference.
//! 3. **Blends** the correction into every point's displayed position and
//!    distortion-ellipse glyph with a second, independently tunable falloff
//!    kernel, so the correction fades smoothly with distance from the query.
//!
//! The engine is a pure computation module with an in-memory contract: an
//! external event source supplies dataset, metrics, and data-space cursor
//! coordinates; an external render sink consumes the per-point output
//! records. No DOM, SVG, or widget protocol lives here.
//!
//! ## Quick Start
//!
//! ```rust
//! use isolens::prelude::*;
//!
//! // Two embedded points with their local distortion tensors.
//! let points = vec![
//!     EmbeddedPoint::new(0, [0.0, 0.0]),
//!     EmbeddedPoint::new(1, [10.0, 0.0]),
//! ];
//! let metrics = vec![
//!     Mat2::identity(),
//!     Mat2::identity().scale(2.0),
//! ];
//!
//! // Configure the lens: structural locality and visual falloff.
//! let mut lens = Lens::new()
//!     .metric_rate(1.0)
//!     .transform_rate(4.0)
//!     .build(points, metrics)?;
//!
//! // Pointer moved (coordinates already in data space).
//! let frame = lens.pointer_moved([0.0, 0.0])?.unwrap();
//! for p in frame.points() {
//!     // position, semi_axes, axis, angle, blend, emphasis ...
//!     assert!(p.blend >= 0.0 && p.blend <= 1.0);
//! }
//! # Result::<(), LensError>::Ok(())
//! ```
//!
//! ## Kernel rates, not bandwidths
//!
//! Both parameters are exponential decay *rates*
//! (`weight = exp(-rate · distance)`): larger values mean *tighter*
//! locality, not wider. The two are independent — `metric_rate` controls
//! how local the reference-metric estimate is, `transform_rate` how far the
//! on-screen correction propagates.
//!
//! ## Error handling
//!
//! Failure modes that the interactive original let degenerate into NaN
//! output or an uncaught exception are explicit here:
//! [`LensError::DegenerateWeights`](prelude::LensError) when every kernel
//! weight collapses to zero, and
//! [`LensError::SingularMetric`](prelude::LensError) when the reference
//! metric is not invertible. A failed event aborts as a whole and the
//! executor keeps the previous frame (last-good-frame policy).
//!
//! ## no_std support
//!
//! The crate is `no_std`-capable (with `alloc`); disable default features
//! and the math falls back to `libm`:
//!
//! ```toml
//! [dependencies]
//! isolens = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors and point records.
//
// Contains the error taxonomy (`LensError`) and the input/output point
// records with their typed accessor trait.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the exponential similarity kernel and weight normalization, the
// fixed-size `Mat2` type, the closed-form 2x2 SVD, the nalgebra bridge, and
// the ellipse angle helper.
mod math;

// Layer 3: Algorithms - core correction algorithms.
//
// Contains metric averaging (`local_metric`), the canonical matrix square
// root (`square_root_reorient`), and the per-event correction/blend loop
// (`isometry_update`).
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains input validation, the per-session executor with the freeze latch
// and last-good-frame fallback, and the output frame.
mod engine;

// High-level fluent API.
//
// Provides the `Lens` builder for configuring and running the correction
// engine.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used types:
///
/// ```
/// use isolens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CorrectedPoint, EmbeddedPoint, LensBuilder as Lens, LensError, LensExecutor, LensFrame,
        PointFields,
    };
    pub use crate::math::mat2::Mat2;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

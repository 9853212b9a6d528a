//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical functions of the correction
//! pipeline:
//! - Exponential similarity kernel and weight normalization
//! - Fixed-size 2×2 matrix type with closed-form operations
//! - Closed-form 2×2 SVD for the per-point hot loop
//! - Nalgebra bridge for the reference-metric decomposition
//! - Ellipse angle helper
//!
//! These are reusable building blocks with no event or dataset semantics.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exponential similarity kernel and weight normalization.
pub mod kernel;

/// Fixed-size 2×2 matrix value type.
pub mod mat2;

/// Closed-form 2×2 singular value decomposition.
pub mod svd2;

/// Nalgebra backend bridge for the reference-metric path.
pub mod linalg;

/// Ellipse rotation angle helper.
pub mod angle;

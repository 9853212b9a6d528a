//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core correction algorithms:
//! - Kernel-weighted metric averaging (the reference metric `h*`)
//! - The canonical, sign-consistent matrix square root
//! - The per-event correction and blend loop
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel-weighted averaging of metric tensors.
pub mod averaging;

/// Canonical square root of the reference metric.
pub mod sqrt;

/// Per-event correction and blend loop.
pub mod correction;

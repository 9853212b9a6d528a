//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks used throughout the
//! crate:
//! - The [`errors::LensError`] taxonomy
//! - Input/output point records and the typed field-accessor trait
//!
//! These have no dependencies on any other layer.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for the lens correction pipeline.
pub mod errors;

/// Input and output point records.
pub mod record;

//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer provides orchestration and execution control:
//! - Fail-fast input validation
//! - The per-session executor with the freeze latch and last-good-frame
//!   fallback
//! - The per-event output frame
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation for lens configuration and data.
pub mod validator;

/// Execution engine for correction events.
pub mod executor;

/// Per-event output frame.
pub mod output;

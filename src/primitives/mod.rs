//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures everything else is built on:
//! - The dense `Matrix` buffer
//! - Row partitioning for parallel kernels
//! - The worker pool handle
//! - The crate error type and phase timings
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Worker pool handle.
pub mod backend;

/// Error type and status codes.
pub mod errors;

/// Dense row-major matrix.
pub mod matrix;

/// Balanced row partitioning.
pub mod partition;

/// Per-phase timings.
pub mod timing;

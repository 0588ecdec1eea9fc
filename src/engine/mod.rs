//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit: input validation, worker pool installation,
//! solver execution, and result assembly.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit orchestration.
pub mod executor;

/// Fit result type.
pub mod output;

/// Input and parameter validation.
pub mod validator;

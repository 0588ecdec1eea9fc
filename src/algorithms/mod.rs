//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the fitting algorithm itself: the normal-equation
//! solver that composes the math kernels into a least-squares fit.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Normal-equation least-squares solver.
pub mod normal_equations;

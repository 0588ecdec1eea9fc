//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numerical building blocks of the fit:
//! - Cache-blocked parallel transpose
//! - Row-partitioned parallel multiply
//! - Vandermonde design matrix construction
//! - Gauss-Jordan elimination
//!
//! These are stateless functions with no fitting-specific orchestration.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gauss-Jordan elimination and the scalar trait.
pub mod linalg;

/// Parallel matrix multiply.
pub mod multiply;

/// Parallel blocked transpose.
pub mod transpose;

/// Vandermonde design matrix.
pub mod vandermonde;

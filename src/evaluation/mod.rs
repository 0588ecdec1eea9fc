//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer post-processes a solved system:
//! - Conditioning check on the elimination pivots
//! - Textual rendering of the fitted polynomial
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pivot-ratio conditioning check.
pub mod conditioning;

/// Polynomial formatting.
pub mod format;

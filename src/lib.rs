//! # polyfit-rs: parallel least-squares polynomial fitting for Rust
//!
//! Fits a univariate polynomial of any degree to `(x, y)` observations with
//! ordinary least squares, solved through the normal equations, with the
//! dense matrix work spread across a rayon worker pool.
//!
//! ## How it works
//!
//! For `K` coefficients (degree `K - 1`) and `N >= K` observations:
//!
//! 1. Build the Vandermonde design matrix `A` (`N x K`, `A[r][c] = x[r]^(K-1-c)`)
//!    and the observation column `b = y`, filling rows in parallel.
//! 2. Transpose `A` with a cache-blocked parallel kernel.
//! 3. Form `AᵀA` (`K x K`) and `Aᵀb` (`K x 1`) with a row-partitioned parallel
//!    multiply.
//! 4. Solve `AᵀA * c = Aᵀb` with in-place Gauss-Jordan elimination.
//!
//! Coefficients come back highest degree first: `c[0]` multiplies `x^(K-1)`.
//!
//! ## Quick Start
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! // Closest line to (0, 6), (1, 0), (2, 0)
//! let x: Vec<f64> = vec![0.0, 1.0, 2.0];
//! let y: Vec<f64> = vec![6.0, 0.0, 0.0];
//!
//! let coefficients = polyfit(&x, &y, 2)?;
//!
//! assert!((coefficients[0] + 3.0).abs() < 1e-12);
//! assert!((coefficients[1] - 5.0).abs() < 1e-12);
//! assert_eq!(poly_to_string(&coefficients), "(-3.000000 * x) + 5.000000");
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ### Configured model
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = vec![-2.0, -1.0, 0.0, 1.0, 2.0];
//! let y = vec![0.0, 0.0, 1.0, 0.0, 0.0];
//!
//! let model = Polyfit::new()
//!     .workers(2)               // Dedicated pool with two workers
//!     .transpose_block(16)      // Transpose tile side
//!     .pow_strategy(Iterative)  // Repeated multiplication instead of powf
//!     .pivoting(Diagonal)       // No row search (default)
//!     .return_timings()         // Keep per-phase timings
//!     .build()?;
//!
//! let result = model.fit(&x, &y, 3)?;
//!
//! assert_eq!(result.degree(), 2);
//! assert_eq!(result.polynomial().to_string(), "(-0.142857 * x^2) + 0.485714");
//! assert!(result.timings.is_some());
//! println!("{}", result);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 5
//!   Degree: 2
//!   Workers: 2
//!   Condition estimate: 1.651e1
//!
//! Timings:
//!   Fill:      0.000012 s
//!   Transpose: 0.000009 s
//!   Multiply:  0.000015 s
//!   Eliminate: 0.000001 s
//!
//! Coefficients:
//!   x^2        -0.142857
//!   x^1         0.000000
//!   x^0         0.485714
//!
//! Polynomial:
//!   (-0.142857 * x^2) + 0.485714
//! ```
//!
//! ### Status codes
//!
//! For callers that want integer status codes instead of `Result`, the
//! `*_into` entry points write into a caller buffer whose length is the
//! coefficient count, and take absent buffers as `None`:
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = [0.0, 1.0, 1.0, 0.0];
//! let y = [0.0, 1.0, 1.0, 0.0];
//! let mut out = [0.0; 3];
//!
//! // Only two distinct x values: the third pivot is zero.
//! assert_eq!(polyfit_into(Some(&x[..]), Some(&y[..]), Some(&mut out[..])), -4);
//! assert_eq!(polyfit_into(Some(&x[..]), None, Some(&mut out[..])), -1);
//! ```
//!
//! | Code | Error                      | Meaning                                   |
//! |------|----------------------------|-------------------------------------------|
//! | 0    |                            | Success                                   |
//! | -1   | `NullInput`                | Input or output buffer absent             |
//! | -2   | `Underdetermined`          | Fewer observations than coefficients      |
//! | -3   | `Allocation`               | Transient matrix allocation failed        |
//! | -4   | `Singular`                 | Zero pivot during elimination             |
//! | -5   | `ShapeMismatch`            | Incompatible operand shapes               |
//! | -6   | `MismatchedInputs`         | `x` and `y` lengths differ                |
//! | -7   | `InvalidNumericValue`      | NaN or infinite input                     |
//! | -8   | `InvalidCoefficientCount`  | Zero coefficients requested               |
//! | -9   | `InvalidWorkers`           | Zero workers requested                    |
//! | -10  | `InvalidBlockSize`         | Transpose tile outside `[1, 1024]`        |
//! | -11  | `DuplicateParameter`       | Builder option set twice                  |
//! | -12  | `ThreadPool`               | Worker pool could not be started          |
//!
//! ## Parameters
//!
//! | Parameter           | Default              | Options                   | Description                              |
//! |---------------------|----------------------|---------------------------|------------------------------------------|
//! | **workers**         | hardware concurrency | [1, ∞)                    | Parallel worker count                    |
//! | **transpose_block** | 32                   | [1, 1024]                 | Tile side of the blocked transpose       |
//! | **pow_strategy**    | `LibraryPow`         | `LibraryPow`, `Iterative` | How design matrix powers are computed    |
//! | **pivoting**        | `Diagonal`           | `Diagonal`, `Partial`     | Pivot selection during elimination       |
//! | **return_timings**  | false                | true/false                | Include per-phase timings in the result  |
//!
//! ## Numerical notes
//!
//! The normal equations square the condition number of the design matrix, and
//! the default diagonal pivoting treats only an exact zero pivot as singular.
//! Nearly singular or high-degree systems can therefore lose accuracy without
//! failing. After each solve the ratio of the largest to the smallest pivot is
//! reported as `condition_estimate`; when it is too large a `tracing` warning
//! is emitted and `ill_conditioned` is set. Centering and scaling `x` before
//! fitting, or enabling `Partial` pivoting, helps.
//!
//! Finite inputs whose powers overflow (for example `x` near `1e200` with three
//! coefficients) make `AᵀA` non-finite. The fit still returns `Ok`, with NaN or
//! infinite coefficients and `ill_conditioned` set.
//!
//! Results are reproducible for a fixed worker count. They are not promised
//! to be bit-identical across different worker counts.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the dense `Matrix`, row partitioning, the worker pool handle,
// errors, and phase timings.
mod primitives;

// Layer 2: Math - stateless numerical kernels.
//
// Contains the blocked transpose, the partitioned multiply, Vandermonde
// construction, and Gauss-Jordan elimination.
mod math;

// Layer 3: Algorithms - the fitting algorithm.
//
// Contains the normal-equation solver and its state machine.
mod algorithms;

// Layer 4: Evaluation - post-processing.
//
// Contains the conditioning check and polynomial formatting.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains input validation, pool installation, and result assembly.
mod engine;

// High-level fluent API for polynomial fitting.
//
// Provides the `Polyfit` builder and the free-function entry points.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard polyfit prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use polyfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        PhaseTimings,
        Pivoting::{Diagonal, Partial},
        PolyfitBuilder as Polyfit, PolyfitError, PolyfitModel, PolyfitResult, PolynomialDisplay,
        PowStrategy::{Iterative, LibraryPow},
        poly_to_string, polyfit, polyfit_into,
    };
}

pub use api::{
    PhaseTimings, Pivoting, PolyfitBuilder, PolyfitError, PolyfitModel, PolyfitResult,
    PolynomialDisplay, PowStrategy, poly_to_string, polyfit, polyfit_into,
};

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for testing and benchmarking.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[doc(hidden)]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math kernels.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation utilities.
    pub mod evaluation {
        pub use crate::evaluation::*;
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

//! High-level API for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder that
//! resolves configuration into a reusable model, the `Result`-returning and
//! status-code fit calls, and the polynomial formatter.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Reusable**: A built model owns its worker pool; every fit reuses it.
//! * **Type-Safe**: Fits are generic over `f32` and `f64`.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolyfitBuilder`] via `Polyfit::new()`.
//! 2. Chain configuration methods (`.workers()`, `.pow_strategy()`, etc.).
//! 3. Call `.build()` to obtain a [`PolyfitModel`].
//! 4. Call `.fit(&x, &y, k)` as often as needed.
//!
//! ### Status codes
//!
//! `fit_into` and [`polyfit_into`] return `0` on success and the negative
//! [`PolyfitError::code`] otherwise. Absent buffers are passed as `None`.

use crate::engine::executor::{PolyfitConfig, PolyfitExecutor};
use crate::engine::validator::Validator;
use crate::evaluation::format::polynomial_to_string;
use crate::math::linalg::FloatLinalg;
use crate::primitives::backend::WorkerPool;
use crate::primitives::errors::STATUS_OK;

// Publicly re-exported types
pub use crate::engine::output::PolyfitResult;
pub use crate::evaluation::format::PolynomialDisplay;
pub use crate::math::linalg::Pivoting;
pub use crate::math::transpose::DEFAULT_TRANSPOSE_BLOCK;
pub use crate::math::vandermonde::PowStrategy;
pub use crate::primitives::errors::PolyfitError;
pub use crate::primitives::timing::PhaseTimings;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring polynomial fits.
#[derive(Debug, Clone, Default)]
pub struct PolyfitBuilder {
    /// Worker count (default: hardware concurrency via the global pool).
    pub workers: Option<usize>,

    /// Transpose tile side (default: 32).
    pub transpose_block: Option<usize>,

    /// Power computation for the design matrix (default: `LibraryPow`).
    pub pow_strategy: Option<PowStrategy>,

    /// Pivot selection during elimination (default: `Diagonal`).
    pub pivoting: Option<Pivoting>,

    /// Return per-phase timings with each result.
    pub return_timings: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl PolyfitBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of parallel workers.
    ///
    /// A dedicated pool of this size is built once by [`build`](Self::build).
    pub fn workers(mut self, workers: usize) -> Self {
        if self.workers.is_some() {
            self.duplicate_param = Some("workers");
        }
        self.workers = Some(workers);
        self
    }

    /// Set the transpose tile side.
    pub fn transpose_block(mut self, block: usize) -> Self {
        if self.transpose_block.is_some() {
            self.duplicate_param = Some("transpose_block");
        }
        self.transpose_block = Some(block);
        self
    }

    /// Set how the design matrix powers are computed.
    pub fn pow_strategy(mut self, strategy: PowStrategy) -> Self {
        if self.pow_strategy.is_some() {
            self.duplicate_param = Some("pow_strategy");
        }
        self.pow_strategy = Some(strategy);
        self
    }

    /// Set the pivot selection policy.
    ///
    /// - `Diagonal` (default): pivot on `M[c][c]`, fail on an exact zero
    /// - `Partial`: bring the largest magnitude in the column to the pivot row first
    pub fn pivoting(mut self, pivoting: Pivoting) -> Self {
        if self.pivoting.is_some() {
            self.duplicate_param = Some("pivoting");
        }
        self.pivoting = Some(pivoting);
        self
    }

    /// Include per-phase timings in each result.
    pub fn return_timings(mut self) -> Self {
        self.return_timings = Some(true);
        self
    }

    /// Validate the configuration and build a reusable model.
    pub fn build(self) -> Result<PolyfitModel, PolyfitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let transpose_block = self.transpose_block.unwrap_or(DEFAULT_TRANSPOSE_BLOCK);
        Validator::validate_transpose_block(transpose_block)?;

        let pool = match self.workers {
            Some(workers) => {
                Validator::validate_workers(workers)?;
                WorkerPool::with_workers(workers)?
            }
            None => WorkerPool::global(),
        };

        let config = PolyfitConfig {
            transpose_block,
            pow_strategy: self.pow_strategy.unwrap_or_default(),
            pivoting: self.pivoting.unwrap_or_default(),
            return_timings: self.return_timings.unwrap_or(false),
        };

        Ok(PolyfitModel {
            executor: PolyfitExecutor::new(config, pool),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Configured polynomial fitter.
#[derive(Debug, Clone, Default)]
pub struct PolyfitModel {
    executor: PolyfitExecutor,
}

impl PolyfitModel {
    /// Fit a polynomial with `coefficients` coefficients (degree `coefficients - 1`).
    pub fn fit<T: FloatLinalg>(
        &self,
        x: &[T],
        y: &[T],
        coefficients: usize,
    ) -> Result<PolyfitResult<T>, PolyfitError> {
        self.executor.run(x, y, coefficients)
    }

    /// Fit into `out`, returning a status code.
    ///
    /// The coefficient count is `out.len()`. On error `out` is not written.
    pub fn fit_into<T: FloatLinalg>(
        &self,
        x: Option<&[T]>,
        y: Option<&[T]>,
        out: Option<&mut [T]>,
    ) -> i32 {
        let (Some(x), Some(y), Some(out)) = (x, y, out) else {
            return PolyfitError::NullInput.code();
        };
        match self.fit(x, y, out.len()) {
            Ok(result) => {
                out.copy_from_slice(&result.coefficients);
                STATUS_OK
            }
            Err(err) => err.code(),
        }
    }

    /// Number of workers kernels are partitioned across.
    pub fn workers(&self) -> usize {
        self.executor.workers()
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Fit with the default configuration and return the coefficients.
///
/// Coefficients are ordered highest degree first. Only an exact zero pivot is
/// reported as singular, so inputs whose powers overflow return `Ok` with
/// non-finite coefficients.
pub fn polyfit<T: FloatLinalg>(
    x: &[T],
    y: &[T],
    coefficients: usize,
) -> Result<Vec<T>, PolyfitError> {
    PolyfitModel::default()
        .fit(x, y, coefficients)
        .map(PolyfitResult::into_coefficients)
}

/// Status-code variant of [`polyfit`]. See [`PolyfitModel::fit_into`].
pub fn polyfit_into<T: FloatLinalg>(
    x: Option<&[T]>,
    y: Option<&[T]>,
    out: Option<&mut [T]>,
) -> i32 {
    PolyfitModel::default().fit_into(x, y, out)
}

/// Render coefficients (highest degree first) as a polynomial string.
pub fn poly_to_string<T: FloatLinalg>(coefficients: &[T]) -> String {
    polynomial_to_string(coefficients)
}

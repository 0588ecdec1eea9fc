//! Error types for polynomial fitting.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate, together with the integer status codes used by
//! the status-returning entry points.
//!
//! ## Design notes
//!
//! * **Flat taxonomy**: One enum covers validation, allocation, shape and
//!   numerical failures.
//! * **Stable codes**: `NullInput`, `Underdetermined`, `Allocation` and
//!   `Singular` keep the codes `-1` to `-4`; later kinds continue downwards.
//! * **Comparable**: Errors implement `Clone` and `PartialEq` so tests and the
//!   solver state machine can hold and compare them.
//!
//! ## Non-goals
//!
//! * This module does not recover from errors; every error reaches the caller.

use core::fmt;

/// Status code returned by the status entry points on success.
pub const STATUS_OK: i32 = 0;

/// Error type for polynomial fitting and the matrix kernels.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyfitError {
    /// A required input or output buffer was absent.
    NullInput,

    /// Fewer observations than coefficients.
    Underdetermined {
        /// Number of observations supplied.
        points: usize,
        /// Number of coefficients requested.
        coefficients: usize,
    },

    /// A transient matrix could not be allocated.
    Allocation {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// A zero pivot was met during elimination.
    Singular {
        /// Column whose pivot was zero.
        column: usize,
    },

    /// Operand shapes are incompatible.
    ShapeMismatch {
        /// Shape of the left operand as `(rows, cols)`.
        left: (usize, usize),
        /// Shape of the right operand as `(rows, cols)`.
        right: (usize, usize),
    },

    /// `x` and `y` have different lengths.
    MismatchedInputs {
        /// Length of `x`.
        x_len: usize,
        /// Length of `y`.
        y_len: usize,
    },

    /// An input value is NaN or infinite.
    InvalidNumericValue(String),

    /// Coefficient count is zero.
    InvalidCoefficientCount(usize),

    /// Worker count is zero.
    InvalidWorkers(usize),

    /// Transpose tile side is outside the supported range.
    InvalidBlockSize(usize),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },

    /// The worker pool could not be started.
    ThreadPool(String),
}

impl PolyfitError {
    /// Integer status code for this error. Always negative.
    pub const fn code(&self) -> i32 {
        match self {
            PolyfitError::NullInput => -1,
            PolyfitError::Underdetermined { .. } => -2,
            PolyfitError::Allocation { .. } => -3,
            PolyfitError::Singular { .. } => -4,
            PolyfitError::ShapeMismatch { .. } => -5,
            PolyfitError::MismatchedInputs { .. } => -6,
            PolyfitError::InvalidNumericValue(_) => -7,
            PolyfitError::InvalidCoefficientCount(_) => -8,
            PolyfitError::InvalidWorkers(_) => -9,
            PolyfitError::InvalidBlockSize(_) => -10,
            PolyfitError::DuplicateParameter { .. } => -11,
            PolyfitError::ThreadPool(_) => -12,
        }
    }
}

impl fmt::Display for PolyfitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyfitError::NullInput => write!(f, "Required input or output buffer is absent"),
            PolyfitError::Underdetermined {
                points,
                coefficients,
            } => write!(
                f,
                "Underdetermined system: {} points for {} coefficients",
                points, coefficients
            ),
            PolyfitError::Allocation { rows, cols } => {
                write!(f, "Unable to allocate a {}x{} matrix", rows, cols)
            }
            PolyfitError::Singular { column } => {
                write!(f, "Singular system: zero pivot in column {}", column)
            }
            PolyfitError::ShapeMismatch { left, right } => write!(
                f,
                "Shape mismatch: {}x{} cannot be combined with {}x{}",
                left.0, left.1, right.0, right.1
            ),
            PolyfitError::MismatchedInputs { x_len, y_len } => write!(
                f,
                "Length mismatch: x has {} points, y has {}",
                x_len, y_len
            ),
            PolyfitError::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {}", s),
            PolyfitError::InvalidCoefficientCount(k) => {
                write!(f, "Invalid coefficient count: {} (must be at least 1)", k)
            }
            PolyfitError::InvalidWorkers(w) => {
                write!(f, "Invalid workers: {} (must be at least 1)", w)
            }
            PolyfitError::InvalidBlockSize(b) => {
                write!(f, "Invalid transpose_block: {} (must be in [1, 1024])", b)
            }
            PolyfitError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            PolyfitError::ThreadPool(s) => write!(f, "Unable to start worker pool: {}", s),
        }
    }
}

impl std::error::Error for PolyfitError {}

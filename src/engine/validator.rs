//! Input validation for fitting configuration and data.
//!
//! ## Purpose
//!
//! This module checks fit requests and builder parameters before any matrix
//! is allocated: coefficient count, input lengths, point count and
//! finiteness, plus worker and tile-size bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A request that passes `validate_inputs` satisfies `N >= K >= 1`,
//!   `x.len() == y.len()`, and all values finite.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not detect singular systems (found during elimination).
//! * This module does not correct invalid inputs.

use num_traits::Float;

use crate::math::transpose::MAX_TRANSPOSE_BLOCK;
use crate::primitives::errors::PolyfitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit requests and configuration.
///
/// All methods return `Result<(), PolyfitError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a request to fit `coefficients` coefficients to `(x, y)`.
    pub fn validate_inputs<T: Float>(
        x: &[T],
        y: &[T],
        coefficients: usize,
    ) -> Result<(), PolyfitError> {
        // Check 1: At least one coefficient
        if coefficients == 0 {
            return Err(PolyfitError::InvalidCoefficientCount(coefficients));
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(PolyfitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 3: Enough points to determine every coefficient
        if x.len() < coefficients {
            return Err(PolyfitError::Underdetermined {
                points: x.len(),
                coefficients,
            });
        }

        // Check 4: All values finite
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(PolyfitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(PolyfitError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate an explicit worker count.
    pub fn validate_workers(workers: usize) -> Result<(), PolyfitError> {
        if workers == 0 {
            return Err(PolyfitError::InvalidWorkers(workers));
        }
        Ok(())
    }

    /// Validate the transpose tile side.
    pub fn validate_transpose_block(block: usize) -> Result<(), PolyfitError> {
        if block == 0 || block > MAX_TRANSPOSE_BLOCK {
            return Err(PolyfitError::InvalidBlockSize(block));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PolyfitError> {
        if let Some(param) = duplicate_param {
            return Err(PolyfitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

//! Tests for input and configuration validation.
//!
//! ## Test Organization
//!
//! 1. **Inputs** - Coefficient count, lengths, point count, finiteness
//! 2. **Ordering** - Which check fires first
//! 3. **Parameters** - Workers, tile side, duplicates

use polyfit_rs::internals::engine::validator::Validator;
use polyfit_rs::internals::primitives::errors::PolyfitError;

// ============================================================================
// Input Tests
// ============================================================================

#[test]
fn test_valid_inputs() {
    assert!(Validator::validate_inputs(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], 3).is_ok());
    assert!(Validator::validate_inputs(&[1.0f32], &[1.0], 1).is_ok());
}

#[test]
fn test_zero_coefficients() {
    assert_eq!(
        Validator::validate_inputs(&[1.0], &[1.0], 0),
        Err(PolyfitError::InvalidCoefficientCount(0))
    );
}

#[test]
fn test_mismatched_lengths() {
    assert_eq!(
        Validator::validate_inputs(&[1.0, 2.0], &[1.0], 1),
        Err(PolyfitError::MismatchedInputs { x_len: 2, y_len: 1 })
    );
}

#[test]
fn test_underdetermined() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let err = Validator::validate_inputs(&x, &x, 6).unwrap_err();
    assert_eq!(
        err,
        PolyfitError::Underdetermined {
            points: 5,
            coefficients: 6
        }
    );
    assert_eq!(err.code(), -2);
}

#[test]
fn test_empty_inputs_are_underdetermined() {
    let empty: [f64; 0] = [];
    assert_eq!(
        Validator::validate_inputs(&empty, &empty, 1).unwrap_err().code(),
        -2
    );
}

#[test]
fn test_non_finite_values() {
    assert_eq!(
        Validator::validate_inputs(&[1.0, f64::NAN], &[1.0, 2.0], 1),
        Err(PolyfitError::InvalidNumericValue("x[1]=NaN".to_string()))
    );
    assert_eq!(
        Validator::validate_inputs(&[1.0, 2.0], &[f64::INFINITY, 2.0], 1),
        Err(PolyfitError::InvalidNumericValue("y[0]=inf".to_string()))
    );
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[test]
fn test_check_order() {
    // Coefficient count before lengths.
    assert_eq!(
        Validator::validate_inputs(&[1.0], &[], 0).unwrap_err().code(),
        -8
    );
    // Lengths before point count.
    assert_eq!(
        Validator::validate_inputs(&[1.0], &[], 3).unwrap_err().code(),
        -6
    );
    // Point count before finiteness.
    assert_eq!(
        Validator::validate_inputs(&[f64::NAN], &[1.0], 2).unwrap_err().code(),
        -2
    );
}

// ============================================================================
// Parameter Tests
// ============================================================================

#[test]
fn test_workers() {
    assert!(Validator::validate_workers(1).is_ok());
    assert!(Validator::validate_workers(64).is_ok());
    assert_eq!(
        Validator::validate_workers(0),
        Err(PolyfitError::InvalidWorkers(0))
    );
}

#[test]
fn test_transpose_block() {
    assert!(Validator::validate_transpose_block(1).is_ok());
    assert!(Validator::validate_transpose_block(1024).is_ok());
    assert_eq!(
        Validator::validate_transpose_block(0),
        Err(PolyfitError::InvalidBlockSize(0))
    );
    assert_eq!(
        Validator::validate_transpose_block(1025),
        Err(PolyfitError::InvalidBlockSize(1025))
    );
}

#[test]
fn test_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("pivoting")),
        Err(PolyfitError::DuplicateParameter {
            parameter: "pivoting"
        })
    );
}

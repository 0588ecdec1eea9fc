//! Tests for Gauss-Jordan elimination.
//!
//! ## Test Organization
//!
//! 1. **Solving** - Known systems
//! 2. **Singularity** - Exact zero pivots
//! 3. **Pivoting** - Partial pivoting recovers permuted systems
//! 4. **Pivot Reports** - Magnitude tracking and ratio

use approx::assert_relative_eq;
use polyfit_rs::internals::math::linalg::{FloatLinalg, GaussJordan, Pivoting};
use polyfit_rs::internals::primitives::errors::PolyfitError;
use polyfit_rs::internals::primitives::matrix::Matrix;

fn system(m: &[f64], rhs: &[f64]) -> (Matrix<f64>, Matrix<f64>) {
    let n = rhs.len();
    (
        Matrix::from_row_slice(n, n, m).unwrap(),
        Matrix::column(rhs).unwrap(),
    )
}

// ============================================================================
// Solving Tests
// ============================================================================

#[test]
fn test_solve_two_by_two() {
    // 2a + b = 5, a + 3b = 10  =>  a = 1, b = 3
    let (mut m, mut rhs) = system(&[2.0, 1.0, 1.0, 3.0], &[5.0, 10.0]);
    GaussJordan::solve(&mut m, &mut rhs, Pivoting::Diagonal).unwrap();
    assert_relative_eq!(rhs[(0, 0)], 1.0, epsilon = 1e-12);
    assert_relative_eq!(rhs[(1, 0)], 3.0, epsilon = 1e-12);
}

#[test]
fn test_solve_leaves_identity_diagonal() {
    let (mut m, mut rhs) = system(
        &[4.0, 1.0, 2.0, 1.0, 5.0, 1.0, 2.0, 1.0, 6.0],
        &[7.0, 7.0, 9.0],
    );
    GaussJordan::solve(&mut m, &mut rhs, Pivoting::Diagonal).unwrap();
    for i in 0..3 {
        assert_relative_eq!(m[(i, i)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(rhs[(i, 0)], 1.0, epsilon = 1e-12);
        for j in (0..3).filter(|&j| j != i) {
            assert_relative_eq!(m[(i, j)], 0.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_shape_mismatch() {
    let mut m = Matrix::<f64>::zeros(2, 3).unwrap();
    let mut rhs = Matrix::<f64>::zeros(2, 1).unwrap();
    let err = GaussJordan::eliminate(&mut m, &mut rhs, Pivoting::Diagonal).unwrap_err();
    assert_eq!(err.code(), -5);
}

// ============================================================================
// Singularity Tests
// ============================================================================

#[test]
fn test_zero_matrix_is_singular_in_first_column() {
    let (mut m, mut rhs) = system(&[0.0; 4], &[1.0, 1.0]);
    let err = GaussJordan::eliminate(&mut m, &mut rhs, Pivoting::Diagonal).unwrap_err();
    assert_eq!(err, PolyfitError::Singular { column: 0 });
}

#[test]
fn test_dependent_rows_are_singular() {
    let (mut m, mut rhs) = system(&[1.0, 2.0, 2.0, 4.0], &[1.0, 2.0]);
    let err = GaussJordan::eliminate(&mut m, &mut rhs, Pivoting::Partial).unwrap_err();
    assert_eq!(err, PolyfitError::Singular { column: 1 });
}

// ============================================================================
// Pivoting Tests
// ============================================================================

#[test]
fn test_diagonal_pivoting_fails_on_leading_zero() {
    let (mut m, mut rhs) = system(&[0.0, 1.0, 1.0, 0.0], &[2.0, 3.0]);
    let err = GaussJordan::solve(&mut m, &mut rhs, Pivoting::Diagonal).unwrap_err();
    assert_eq!(err, PolyfitError::Singular { column: 0 });
}

#[test]
fn test_partial_pivoting_solves_permuted_system() {
    let (mut m, mut rhs) = system(&[0.0, 1.0, 1.0, 0.0], &[2.0, 3.0]);
    GaussJordan::solve(&mut m, &mut rhs, Pivoting::Partial).unwrap();
    assert_relative_eq!(rhs[(0, 0)], 3.0);
    assert_relative_eq!(rhs[(1, 0)], 2.0);
}

#[test]
fn test_default_pivoting_is_diagonal() {
    assert_eq!(Pivoting::default(), Pivoting::Diagonal);
}

// ============================================================================
// Pivot Report Tests
// ============================================================================

#[test]
fn test_pivot_report_tracks_magnitudes() {
    let (mut m, mut rhs) = system(&[-8.0, 0.0, 0.0, 2.0], &[1.0, 1.0]);
    let report = GaussJordan::eliminate(&mut m, &mut rhs, Pivoting::Diagonal).unwrap();
    assert_eq!(report.largest, 8.0);
    assert_eq!(report.smallest, 2.0);
    assert_eq!(report.ratio(), 4.0);
}

#[test]
fn test_empty_system_reports_unit_ratio() {
    let mut m = Matrix::<f64>::zeros(0, 0).unwrap();
    let mut rhs = Matrix::<f64>::zeros(0, 1).unwrap();
    let report = GaussJordan::solve(&mut m, &mut rhs, Pivoting::Diagonal).unwrap();
    assert_eq!(report.ratio(), 1.0);
}

#[test]
fn test_non_finite_pivot_gives_nan_ratio() {
    // Second pivot is inf - inf * (inf / inf) = NaN, which is not an exact zero.
    let inf = f64::INFINITY;
    let (mut m, mut rhs) = system(&[inf, inf, inf, inf], &[1.0, 1.0]);
    let report = GaussJordan::solve(&mut m, &mut rhs, Pivoting::Diagonal).unwrap();
    assert!(report.ratio().is_nan());
    assert!(rhs.as_slice().iter().any(|v| !v.is_finite()));
}

#[test]
fn test_ill_conditioned_thresholds() {
    assert_eq!(<f64 as FloatLinalg>::ill_conditioned_ratio(), 1e12);
    assert_eq!(<f32 as FloatLinalg>::ill_conditioned_ratio(), 1e6);
}

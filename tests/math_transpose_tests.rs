//! Tests for the blocked parallel transpose.
//!
//! ## Test Organization
//!
//! 1. **Exactness** - Bit-for-bit agreement with a serial reference
//! 2. **Block Sizes** - Tiles smaller than, equal to and larger than the matrix
//! 3. **Edge Cases** - Empty and degenerate shapes

use polyfit_rs::internals::math::transpose::{DEFAULT_TRANSPOSE_BLOCK, transpose};
use polyfit_rs::internals::primitives::matrix::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rows: usize, cols: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let values: Vec<f64> = (0..rows * cols)
        .map(|_| rng.random_range(-100.0..100.0))
        .collect();
    Matrix::from_row_slice(rows, cols, &values).unwrap()
}

fn serial_transpose(m: &Matrix<f64>) -> Matrix<f64> {
    let (rows, cols) = m.shape();
    let mut out = Matrix::zeros(cols, rows).unwrap();
    for r in 0..rows {
        for c in 0..cols {
            out[(c, r)] = m[(r, c)];
        }
    }
    out
}

// ============================================================================
// Exactness Tests
// ============================================================================

#[test]
fn test_small_transpose() {
    let m = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let t = transpose(&m, DEFAULT_TRANSPOSE_BLOCK).unwrap();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
}

#[test]
fn test_square_transposes_match_serial_reference() {
    for (i, &n) in [1usize, 7, 31, 32, 33, 64, 100, 256].iter().enumerate() {
        let m = random_matrix(n, n, i as u64);
        let t = transpose(&m, DEFAULT_TRANSPOSE_BLOCK).unwrap();
        assert_eq!(t, serial_transpose(&m), "n={}", n);
    }
}

#[test]
fn test_rectangular_transposes_match_serial_reference() {
    for &(rows, cols) in &[(1000, 3), (3, 1000), (65, 17), (17, 65), (5, 1)] {
        let m = random_matrix(rows, cols, (rows * 31 + cols) as u64);
        let t = transpose(&m, DEFAULT_TRANSPOSE_BLOCK).unwrap();
        assert_eq!(t, serial_transpose(&m), "{}x{}", rows, cols);
    }
}

#[test]
fn test_double_transpose_is_identity() {
    let m = random_matrix(45, 19, 99);
    let back = transpose(&transpose(&m, 8).unwrap(), 8).unwrap();
    assert_eq!(back, m);
}

// ============================================================================
// Block Size Tests
// ============================================================================

#[test]
fn test_block_size_does_not_change_result() {
    let m = random_matrix(70, 41, 7);
    let expected = serial_transpose(&m);
    for block in [1, 2, 3, 16, 32, 41, 70, 128, 1024] {
        let t = transpose(&m, block).unwrap();
        assert_eq!(t, expected, "block={}", block);
    }
}

#[test]
fn test_zero_block_is_treated_as_one() {
    let m = random_matrix(5, 4, 3);
    assert_eq!(transpose(&m, 0).unwrap(), serial_transpose(&m));
}

// ============================================================================
// Edge Case Tests
// ============================================================================

#[test]
fn test_empty_shapes() {
    let m = Matrix::<f64>::zeros(0, 4).unwrap();
    assert_eq!(transpose(&m, 32).unwrap().shape(), (4, 0));

    let m = Matrix::<f64>::zeros(3, 0).unwrap();
    assert_eq!(transpose(&m, 32).unwrap().shape(), (0, 3));
}

//! Row-partitioned parallel matrix multiply.
//!
//! ## Purpose
//!
//! This module computes `C = L * R` for dense row-major operands. Output rows
//! are split into one contiguous range per worker and each worker fills its
//! own slice of `C`.
//!
//! ## Design notes
//!
//! * Loop order is `i -> k -> j`: `L[i][k]` is held while a row of `R` is swept,
//!   so both operands and the output are read with unit stride.
//! * Each `C[i][j]` accumulates over `k` in ascending order.
//! * The partition comes from `RowPartition`; remainder rows go to the
//!   lowest-indexed workers.
//!
//! ## Invariants
//!
//! * `L.cols() == R.rows()`, otherwise `ShapeMismatch` is returned.
//! * Workers never write outside their own row range.

use core::ops::Range;
use num_traits::Float;
use rayon::prelude::*;

use crate::primitives::errors::PolyfitError;
use crate::primitives::matrix::Matrix;
use crate::primitives::partition::RowPartition;

/// Return the product `left * right`, computed by up to `workers` workers.
pub fn multiply<T>(
    left: &Matrix<T>,
    right: &Matrix<T>,
    workers: usize,
) -> Result<Matrix<T>, PolyfitError>
where
    T: Float + Send + Sync,
{
    if left.cols() != right.rows() {
        return Err(PolyfitError::ShapeMismatch {
            left: left.shape(),
            right: right.shape(),
        });
    }

    let (rows, inner) = left.shape();
    let width = right.cols();
    let mut out = Matrix::zeros(rows, width)?;
    if rows == 0 || width == 0 {
        return Ok(out);
    }

    let partition = RowPartition::new(rows, workers);
    let lhs = left.as_slice();
    let rhs = right.as_slice();
    partition
        .split_rows_mut(out.as_mut_slice(), width)
        .into_par_iter()
        .for_each(|(range, dst)| multiply_rows(lhs, rhs, inner, width, range, dst));

    Ok(out)
}

#[inline]
fn multiply_rows<T: Float>(
    lhs: &[T],
    rhs: &[T],
    inner: usize,
    width: usize,
    rows: Range<usize>,
    dst: &mut [T],
) {
    for (out_row, i) in dst.chunks_exact_mut(width).zip(rows) {
        let l_row = &lhs[i * inner..(i + 1) * inner];
        for (k, &l_ik) in l_row.iter().enumerate() {
            let r_row = &rhs[k * width..(k + 1) * width];
            for (acc, &r_kj) in out_row.iter_mut().zip(r_row) {
                *acc = *acc + l_ik * r_kj;
            }
        }
    }
}

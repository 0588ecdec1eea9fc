//! Cache-blocked parallel transpose.
//!
//! ## Purpose
//!
//! This module produces `Mᵀ` from `M`. The source is walked in square tiles
//! so that a source tile and its destination tile both stay in L1 cache.
//!
//! ## Design notes
//!
//! * The destination is cut into bands of `block` rows. A band is the image
//!   of one source block-column and is owned by exactly one worker.
//! * Within a band, source block-rows are visited one tile at a time and the
//!   two inner loops run serially.
//! * With the default 32-element side, a pair of `f64` tiles is 16 KiB.
//!
//! ## Invariants
//!
//! * Every destination element is written exactly once.

use num_traits::Zero;
use rayon::prelude::*;

use crate::primitives::errors::PolyfitError;
use crate::primitives::matrix::Matrix;

/// Default tile side.
pub const DEFAULT_TRANSPOSE_BLOCK: usize = 32;

/// Largest accepted tile side.
pub const MAX_TRANSPOSE_BLOCK: usize = 1024;

/// Return a freshly allocated transpose of `source`.
pub fn transpose<T>(source: &Matrix<T>, block: usize) -> Result<Matrix<T>, PolyfitError>
where
    T: Copy + Zero + Send + Sync,
{
    let (rows, cols) = source.shape();
    let mut out = Matrix::zeros(cols, rows)?;
    if rows == 0 || cols == 0 {
        return Ok(out);
    }

    let block = block.max(1);
    let src = source.as_slice();
    out.as_mut_slice()
        .par_chunks_mut(block.saturating_mul(rows))
        .enumerate()
        .for_each(|(band, dst)| {
            let col_start = band * block;
            let col_end = (col_start + block).min(cols);
            for row_start in (0..rows).step_by(block) {
                let row_end = (row_start + block).min(rows);
                for r in row_start..row_end {
                    let src_row = &src[r * cols..(r + 1) * cols];
                    for c in col_start..col_end {
                        dst[(c - col_start) * rows + r] = src_row[c];
                    }
                }
            }
        });

    Ok(out)
}

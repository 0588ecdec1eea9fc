//! Vandermonde design matrix construction.
//!
//! Row `r` of the design matrix holds `x[r]^(K-1), x[r]^(K-2), ..., x[r]^0`,
//! highest power first. Rows are filled in parallel.

use num_traits::Float;
use rayon::prelude::*;

use crate::primitives::errors::PolyfitError;
use crate::primitives::matrix::Matrix;

/// How the powers of `x` are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowStrategy {
    /// Call `powf` for every entry.
    #[default]
    LibraryPow,

    /// Multiply up from `x^0`, one factor of `x` per column.
    Iterative,
}

impl PowStrategy {
    /// Fill `row` with descending powers of `x`.
    #[inline]
    pub fn fill_row<T: Float>(self, x: T, row: &mut [T]) {
        match self {
            PowStrategy::LibraryPow => {
                let mut exponent = T::zero();
                for cell in row.iter_mut().rev() {
                    *cell = x.powf(exponent);
                    exponent = exponent + T::one();
                }
            }
            PowStrategy::Iterative => {
                let mut power = T::one();
                for cell in row.iter_mut().rev() {
                    *cell = power;
                    power = power * x;
                }
            }
        }
    }
}

/// Build the `x.len() x coefficients` design matrix.
pub fn vandermonde<T>(
    x: &[T],
    coefficients: usize,
    strategy: PowStrategy,
) -> Result<Matrix<T>, PolyfitError>
where
    T: Float + Send + Sync,
{
    let mut a = Matrix::zeros(x.len(), coefficients)?;
    if coefficients == 0 {
        return Ok(a);
    }

    a.as_mut_slice()
        .par_chunks_mut(coefficients)
        .zip(x.par_iter())
        .for_each(|(row, &xi)| strategy.fill_row(xi, row));

    Ok(a)
}

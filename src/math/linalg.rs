//! Dense linear algebra for the normal equations.
//!
//! ## Purpose
//!
//! This module solves the square system `M * c = b` produced by the normal
//! equations with in-place Gauss-Jordan elimination.
//!
//! ## Design notes
//!
//! * Diagonal pivoting by default: column `c` pivots on `M[c][c]` with no row
//!   search. A pivot of exactly zero is reported as singular.
//! * Partial pivoting is available on request and swaps the largest remaining
//!   magnitude into the pivot row first.
//! * Elimination and normalization are separate passes; the solution is left
//!   in the right-hand side.
//! * Runs on the calling thread. Each column depends on the previous one.
//!
//! ## Invariants
//!
//! * `M` is square and `b` has `M.rows()` rows.
//! * After `normalize`, `M` is the identity up to rounding and `b` holds the
//!   solution in natural order.

use core::cmp::Ordering;
use core::fmt::{Debug, Display, LowerExp};
use num_traits::Float;

use crate::primitives::errors::PolyfitError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Scalar types the fitting pipeline is generic over.
pub trait FloatLinalg: Float + Debug + Display + LowerExp + Send + Sync + 'static {
    /// Pivot magnitude ratio above which a system is reported as ill-conditioned.
    fn ill_conditioned_ratio() -> Self;
}

impl FloatLinalg for f64 {
    #[inline]
    fn ill_conditioned_ratio() -> Self {
        1e12
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn ill_conditioned_ratio() -> Self {
        1e6
    }
}

// ============================================================================
// Pivoting
// ============================================================================

/// Pivot selection policy for Gauss-Jordan elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivoting {
    /// Pivot on the diagonal element of each column.
    #[default]
    Diagonal,

    /// Swap the row with the largest magnitude in the column into place first.
    Partial,
}

/// Pivot magnitudes seen during elimination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotReport<T> {
    /// Largest absolute pivot.
    pub largest: T,
    /// Smallest absolute pivot.
    pub smallest: T,
}

impl<T: Float> PivotReport<T> {
    fn new() -> Self {
        Self {
            largest: T::zero(),
            smallest: T::infinity(),
        }
    }

    fn record(&mut self, pivot: T) {
        let magnitude = pivot.abs();
        if magnitude.is_nan() || self.largest.is_nan() {
            self.largest = T::nan();
            self.smallest = T::nan();
            return;
        }
        self.largest = self.largest.max(magnitude);
        self.smallest = self.smallest.min(magnitude);
    }

    /// Ratio of the largest to the smallest pivot magnitude.
    ///
    /// A cheap lower bound on the condition number of the system. An empty
    /// system reports `1`; a NaN pivot makes the ratio NaN.
    pub fn ratio(&self) -> T {
        if self.largest == T::zero() && self.smallest.is_infinite() {
            return T::one();
        }
        self.largest / self.smallest
    }
}

// ============================================================================
// Gauss-Jordan
// ============================================================================

/// In-place Gauss-Jordan solver.
pub struct GaussJordan;

impl GaussJordan {
    /// Eliminate and normalize, leaving the solution in `rhs`.
    pub fn solve<T: Float>(
        m: &mut Matrix<T>,
        rhs: &mut Matrix<T>,
        pivoting: Pivoting,
    ) -> Result<PivotReport<T>, PolyfitError> {
        let report = Self::eliminate(m, rhs, pivoting)?;
        Self::normalize(m, rhs);
        Ok(report)
    }

    /// Zero every off-diagonal entry of `m`, applying the same row operations to `rhs`.
    ///
    /// Only an exact zero pivot fails. A NaN or infinite pivot is eliminated
    /// like any other, so `Ok` may carry a non-finite solution; the report's
    /// `ratio` is then NaN or infinite.
    pub fn eliminate<T: Float>(
        m: &mut Matrix<T>,
        rhs: &mut Matrix<T>,
        pivoting: Pivoting,
    ) -> Result<PivotReport<T>, PolyfitError> {
        let n = m.rows();
        if m.cols() != n || rhs.rows() != n {
            return Err(PolyfitError::ShapeMismatch {
                left: m.shape(),
                right: rhs.shape(),
            });
        }

        let mut report = PivotReport::new();
        for c in 0..n {
            if pivoting == Pivoting::Partial {
                let best = (c..n)
                    .max_by(|&a, &b| {
                        m[(a, c)]
                            .abs()
                            .partial_cmp(&m[(b, c)].abs())
                            .unwrap_or(Ordering::Equal)
                    })
                    .unwrap_or(c);
                m.swap_rows(c, best);
                rhs.swap_rows(c, best);
            }

            let pivot = m[(c, c)];
            if pivot == T::zero() {
                return Err(PolyfitError::Singular { column: c });
            }
            report.record(pivot);

            for r in (0..n).filter(|&r| r != c) {
                let factor = m[(r, c)] / pivot;
                let (pivot_row, target_row) = m.pivot_and_target_rows(c, r);
                for (target, &source) in target_row.iter_mut().zip(pivot_row) {
                    *target = *target - source * factor;
                }
                let (pivot_rhs, target_rhs) = rhs.pivot_and_target_rows(c, r);
                for (target, &source) in target_rhs.iter_mut().zip(pivot_rhs) {
                    *target = *target - source * factor;
                }
            }
        }

        Ok(report)
    }

    /// Divide each pivot row's diagonal and right-hand side by its pivot.
    pub fn normalize<T: Float>(m: &mut Matrix<T>, rhs: &mut Matrix<T>) {
        for c in 0..m.rows() {
            let pivot = m[(c, c)];
            m[(c, c)] = m[(c, c)] / pivot;
            for value in rhs.row_mut(c) {
                *value = *value / pivot;
            }
        }
    }
}

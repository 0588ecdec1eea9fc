//! Conditioning check on a solved system.
//!
//! The normal equations square the condition number of the Vandermonde
//! matrix, and diagonal pivoting does nothing to limit growth. After each
//! solve the pivot ratio is compared against the scalar type's threshold and
//! a warning is emitted when it is exceeded. The result itself is unchanged.

use crate::math::linalg::{FloatLinalg, PivotReport};

/// Outcome of inspecting a pivot report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionCheck<T> {
    /// Largest over smallest absolute pivot.
    pub estimate: T,
    /// Whether `estimate` exceeds the warning threshold.
    pub ill_conditioned: bool,
}

impl<T: FloatLinalg> ConditionCheck<T> {
    /// Inspect `pivots` from a system with `coefficients` unknowns.
    pub fn inspect(pivots: &PivotReport<T>, coefficients: usize) -> Self {
        let estimate = pivots.ratio();
        let ill_conditioned = estimate.is_nan() || estimate > T::ill_conditioned_ratio();
        if ill_conditioned {
            tracing::warn!(
                coefficients,
                estimate = %estimate,
                threshold = %T::ill_conditioned_ratio(),
                "normal equations are ill-conditioned; coefficients may be inaccurate"
            );
        }
        Self {
            estimate,
            ill_conditioned,
        }
    }
}

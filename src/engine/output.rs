//! Result type for polynomial fits.
//!
//! ## Purpose
//!
//! This module defines `PolyfitResult`, the value returned by a successful
//! fit, and its human-readable `Display` summary.
//!
//! ## Design notes
//!
//! * Coefficients are stored highest degree first, exactly as solved.
//! * Timings are optional and only present when requested on the builder.

use core::fmt::{self, Display};

use crate::evaluation::format::PolynomialDisplay;
use crate::math::linalg::FloatLinalg;
use crate::primitives::timing::PhaseTimings;

/// Output of a successful polynomial fit.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyfitResult<T> {
    /// Coefficients; entry `i` multiplies `x^(K-1-i)`.
    pub coefficients: Vec<T>,
    /// Number of observations fitted.
    pub n_points: usize,
    /// Workers the kernels were partitioned across.
    pub workers: usize,
    /// Ratio of largest to smallest elimination pivot.
    pub condition_estimate: T,
    /// Whether `condition_estimate` exceeded the warning threshold.
    pub ill_conditioned: bool,
    /// Per-phase timings, when requested.
    pub timings: Option<PhaseTimings>,
}

impl<T: FloatLinalg> PolyfitResult<T> {
    /// Degree of the fitted polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// `Display` adapter rendering the polynomial.
    pub fn polynomial(&self) -> PolynomialDisplay<'_, T> {
        PolynomialDisplay(&self.coefficients)
    }

    /// Consume the result and return the coefficients.
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }
}

impl<T: FloatLinalg> Display for PolyfitResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n_points)?;
        writeln!(f, "  Degree: {}", self.degree())?;
        writeln!(f, "  Workers: {}", self.workers)?;
        write!(f, "  Condition estimate: {:.3e}", self.condition_estimate)?;
        if self.ill_conditioned {
            write!(f, " (ill-conditioned)")?;
        }
        writeln!(f)?;

        if let Some(timings) = &self.timings {
            writeln!(f)?;
            writeln!(f, "Timings:")?;
            writeln!(f, "{}", timings)?;
        }

        writeln!(f)?;
        writeln!(f, "Coefficients:")?;
        for (i, c) in self.coefficients.iter().enumerate() {
            writeln!(
                f,
                "  x^{:<3} {:>14.6}",
                self.coefficients.len() - 1 - i,
                c
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Polynomial:")?;
        write!(f, "  {}", self.polynomial())
    }
}

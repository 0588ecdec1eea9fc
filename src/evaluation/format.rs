//! Textual rendering of fitted polynomials.
//!
//! ## Purpose
//!
//! This module renders a coefficient vector (highest degree first) as a
//! canonical string such as `(-0.142857 * x^2) + 0.485714`.
//!
//! ## Design notes
//!
//! * Terms whose coefficient is exactly zero are skipped.
//! * Coefficients use six-decimal fixed point.
//! * Terms are joined by `" + "` even when a coefficient is negative.
//!
//! ## Key concepts
//!
//! | Exponent | Rendering        |
//! |----------|------------------|
//! | 0        | `c`              |
//! | 1        | `(c * x)`        |
//! | n >= 2   | `(c * x^n)`      |

use core::fmt::{self, Display};
use num_traits::Float;

/// `Display` adapter for a descending-order coefficient slice.
#[derive(Debug, Clone, Copy)]
pub struct PolynomialDisplay<'a, T>(pub &'a [T]);

impl<T: Float + Display> Display for PolynomialDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficients = self.0;
        let mut first = true;
        for (i, &c) in coefficients.iter().enumerate() {
            if c == T::zero() {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            match coefficients.len() - 1 - i {
                0 => write!(f, "{:.6}", c)?,
                1 => write!(f, "({:.6} * x)", c)?,
                exponent => write!(f, "({:.6} * x^{})", c, exponent)?,
            }
            first = false;
        }
        Ok(())
    }
}

/// Render `coefficients` (highest degree first) as a polynomial string.
///
/// Returns an empty string when every coefficient is zero.
pub fn polynomial_to_string<T: Float + Display>(coefficients: &[T]) -> String {
    PolynomialDisplay(coefficients).to_string()
}

//! Per-phase wall-clock timings of a fit.

use core::fmt;
use core::time::Duration;

/// Wall-clock time spent in each solver phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseTimings {
    /// Building the design matrix `A` and observation vector `b`.
    pub fill: Duration,
    /// Transposing `A`.
    pub transpose: Duration,
    /// Forming `AᵀA` and `Aᵀb`.
    pub multiply: Duration,
    /// Gauss-Jordan elimination and normalization.
    pub eliminate: Duration,
}

impl PhaseTimings {
    /// Sum of all phases.
    pub fn total(&self) -> Duration {
        self.fill + self.transpose + self.multiply + self.eliminate
    }
}

impl fmt::Display for PhaseTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Fill:      {:.6} s", self.fill.as_secs_f64())?;
        writeln!(f, "  Transpose: {:.6} s", self.transpose.as_secs_f64())?;
        writeln!(f, "  Multiply:  {:.6} s", self.multiply.as_secs_f64())?;
        write!(f, "  Eliminate: {:.6} s", self.eliminate.as_secs_f64())
    }
}

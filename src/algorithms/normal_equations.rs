//! Least-squares polynomial fitting through the normal equations.
//!
//! ## Purpose
//!
//! This module turns observations `(x, y)` into polynomial coefficients by
//! building the design matrix `A` and observation vector `b`, forming
//! `AᵀA * c = Aᵀb` with the parallel kernels, and solving it with
//! Gauss-Jordan elimination.
//!
//! ## Design notes
//!
//! * **State machine**: The solver walks `Ready -> BuildingA -> BuildingAta ->
//!   Eliminating -> Normalizing -> Done`; any failure lands in `Failed`.
//! * **Scoped matrices**: Every transient matrix is a local of `run`, so it is
//!   dropped on every return path. `Aᵀ` is dropped as soon as both products
//!   exist.
//! * **Timed phases**: Wall-clock time of each phase is recorded.
//!
//! ## Key concepts
//!
//! * **Design matrix**: `A[r][c] = x[r]^(K-1-c)`, so coefficient `0` belongs to
//!   the highest power.
//! * **Normal equations**: `AᵀA` is `K x K`, `Aᵀb` is `K x 1`.
//!
//! ## Invariants
//!
//! * Inputs were validated by the caller: equal lengths, `N >= K >= 1`, finite.
//! * The kernels run on whichever rayon pool is current.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not evaluate the fitted polynomial.

use std::time::Instant;

use num_traits::Float;

use crate::math::linalg::{GaussJordan, PivotReport, Pivoting};
use crate::math::multiply::multiply;
use crate::math::transpose::{DEFAULT_TRANSPOSE_BLOCK, transpose};
use crate::math::vandermonde::{PowStrategy, vandermonde};
use crate::primitives::errors::PolyfitError;
use crate::primitives::matrix::Matrix;
use crate::primitives::timing::PhaseTimings;

// ============================================================================
// Configuration
// ============================================================================

/// Parameters of a single solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Workers used to partition the multiply kernel.
    pub workers: usize,
    /// Tile side for the transpose kernel.
    pub transpose_block: usize,
    /// How the design matrix powers are computed.
    pub pow_strategy: PowStrategy,
    /// Pivot selection during elimination.
    pub pivoting: Pivoting,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            transpose_block: DEFAULT_TRANSPOSE_BLOCK,
            pow_strategy: PowStrategy::default(),
            pivoting: Pivoting::default(),
        }
    }
}

// ============================================================================
// State
// ============================================================================

/// Lifecycle of a solve.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SolverState {
    /// Nothing has run yet.
    #[default]
    Ready,
    /// Filling `A` and `b`.
    BuildingA,
    /// Forming `Aᵀ`, `AᵀA` and `Aᵀb`.
    BuildingAta,
    /// Running the elimination sweep.
    Eliminating,
    /// Dividing each row by its pivot.
    Normalizing,
    /// Coefficients are available.
    Done,
    /// The solve stopped with an error.
    Failed(PolyfitError),
}

impl SolverState {
    /// Whether no further transition can happen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SolverState::Done | SolverState::Failed(_))
    }
}

// ============================================================================
// Building blocks
// ============================================================================

/// The assembled system `AᵀA * c = Aᵀb`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalEquations<T> {
    /// `K x K` Gram matrix.
    pub ata: Matrix<T>,
    /// `K x 1` right-hand side.
    pub atb: Matrix<T>,
}

/// Build the design matrix `A` and observation column `b`.
pub fn build_design<T>(
    x: &[T],
    y: &[T],
    coefficients: usize,
    strategy: PowStrategy,
) -> Result<(Matrix<T>, Matrix<T>), PolyfitError>
where
    T: Float + Send + Sync,
{
    let a = vandermonde(x, coefficients, strategy)?;
    let b = Matrix::column(y)?;
    Ok((a, b))
}

/// Form the normal equations from `A` and `b` with the parallel kernels.
///
/// `Aᵀ` is dropped before returning. Kernel wall-clock time is added to `timings`.
pub fn form_normal_equations<T>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    config: &SolverConfig,
    timings: &mut PhaseTimings,
) -> Result<NormalEquations<T>, PolyfitError>
where
    T: Float + Send + Sync,
{
    let start = Instant::now();
    let at = transpose(a, config.transpose_block)?;
    timings.transpose += start.elapsed();

    let start = Instant::now();
    let ata = multiply(&at, a, config.workers)?;
    let atb = multiply(&at, b, config.workers)?;
    timings.multiply += start.elapsed();

    Ok(NormalEquations { ata, atb })
}

// ============================================================================
// Solver
// ============================================================================

/// Output of a successful solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    /// Coefficients, highest degree first.
    pub coefficients: Vec<T>,
    /// Pivot magnitudes seen during elimination.
    pub pivots: PivotReport<T>,
    /// Time spent in each phase.
    pub timings: PhaseTimings,
}

/// Normal-equation least-squares solver.
#[derive(Debug, Clone)]
pub struct NormalEquationSolver {
    config: SolverConfig,
    state: SolverState,
}

impl NormalEquationSolver {
    /// Create a solver in the `Ready` state.
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            state: SolverState::Ready,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &SolverState {
        &self.state
    }

    /// Configuration this solver runs with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Fit `coefficients` polynomial coefficients to `(x, y)`.
    ///
    /// Each call starts again from `Ready`.
    pub fn solve<T>(
        &mut self,
        x: &[T],
        y: &[T],
        coefficients: usize,
    ) -> Result<Solution<T>, PolyfitError>
    where
        T: Float + Send + Sync,
    {
        self.state = SolverState::Ready;
        let result = self.run(x, y, coefficients);
        if let Err(err) = &result {
            self.transition(SolverState::Failed(err.clone()));
        }
        result
    }

    fn run<T>(&mut self, x: &[T], y: &[T], coefficients: usize) -> Result<Solution<T>, PolyfitError>
    where
        T: Float + Send + Sync,
    {
        let mut timings = PhaseTimings::default();

        self.transition(SolverState::BuildingA);
        let start = Instant::now();
        let (a, b) = build_design(x, y, coefficients, self.config.pow_strategy)?;
        timings.fill = start.elapsed();

        self.transition(SolverState::BuildingAta);
        let NormalEquations { mut ata, mut atb } =
            form_normal_equations(&a, &b, &self.config, &mut timings)?;
        drop(a);
        drop(b);

        self.transition(SolverState::Eliminating);
        let start = Instant::now();
        let pivots = GaussJordan::eliminate(&mut ata, &mut atb, self.config.pivoting)?;

        self.transition(SolverState::Normalizing);
        GaussJordan::normalize(&mut ata, &mut atb);
        timings.eliminate = start.elapsed();

        self.transition(SolverState::Done);
        Ok(Solution {
            coefficients: atb.into_vec(),
            pivots,
            timings,
        })
    }

    fn transition(&mut self, next: SolverState) {
        tracing::trace!(from = ?self.state, to = ?next, "solver transition");
        self.state = next;
    }
}

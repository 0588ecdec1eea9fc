//! Execution engine for polynomial fitting.
//!
//! ## Purpose
//!
//! This module runs a complete fit: it validates the request, installs the
//! worker pool, drives the normal-equation solver, checks conditioning, and
//! assembles the result.
//!
//! ## Design notes
//!
//! * The whole solve runs inside `WorkerPool::install`; every kernel fans out
//!   and joins on that pool before the next phase starts.
//! * The multiply kernel is partitioned by the pool's worker count, so results
//!   are reproducible for a fixed pool size.
//! * Phase timings are always measured and only returned when requested.
//!
//! ## Invariants
//!
//! * No matrix outlives a call to `run`.
//! * Errors are returned unchanged; nothing is retried.
//!
//! ## Non-goals
//!
//! * This module does not format output (handled by `output`).

use crate::algorithms::normal_equations::{NormalEquationSolver, SolverConfig};
use crate::engine::output::PolyfitResult;
use crate::engine::validator::Validator;
use crate::evaluation::conditioning::ConditionCheck;
use crate::math::linalg::{FloatLinalg, Pivoting};
use crate::math::transpose::DEFAULT_TRANSPOSE_BLOCK;
use crate::math::vandermonde::PowStrategy;
use crate::primitives::backend::WorkerPool;
use crate::primitives::errors::PolyfitError;

/// Resolved fit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolyfitConfig {
    /// Tile side for the transpose kernel.
    pub transpose_block: usize,
    /// How the design matrix powers are computed.
    pub pow_strategy: PowStrategy,
    /// Pivot selection during elimination.
    pub pivoting: Pivoting,
    /// Whether phase timings are returned with the result.
    pub return_timings: bool,
}

impl Default for PolyfitConfig {
    fn default() -> Self {
        Self {
            transpose_block: DEFAULT_TRANSPOSE_BLOCK,
            pow_strategy: PowStrategy::default(),
            pivoting: Pivoting::default(),
            return_timings: false,
        }
    }
}

/// Runs fits on a worker pool.
#[derive(Debug, Clone, Default)]
pub struct PolyfitExecutor {
    config: PolyfitConfig,
    pool: WorkerPool,
}

impl PolyfitExecutor {
    /// Create an executor from a resolved configuration and pool.
    pub fn new(config: PolyfitConfig, pool: WorkerPool) -> Self {
        Self { config, pool }
    }

    /// Configuration used for every fit.
    pub fn config(&self) -> &PolyfitConfig {
        &self.config
    }

    /// Number of workers kernels are partitioned across.
    pub fn workers(&self) -> usize {
        self.pool.workers()
    }

    /// Fit `coefficients` coefficients to `(x, y)`.
    pub fn run<T: FloatLinalg>(
        &self,
        x: &[T],
        y: &[T],
        coefficients: usize,
    ) -> Result<PolyfitResult<T>, PolyfitError> {
        Validator::validate_inputs(x, y, coefficients)?;

        let workers = self.pool.workers();
        let solver_config = SolverConfig {
            workers,
            transpose_block: self.config.transpose_block,
            pow_strategy: self.config.pow_strategy,
            pivoting: self.config.pivoting,
        };

        let solution = self.pool.install(|| {
            NormalEquationSolver::new(solver_config).solve(x, y, coefficients)
        })?;

        let condition = ConditionCheck::inspect(&solution.pivots, coefficients);
        tracing::debug!(
            points = x.len(),
            coefficients,
            workers,
            total_secs = solution.timings.total().as_secs_f64(),
            "polynomial fit complete"
        );

        Ok(PolyfitResult {
            coefficients: solution.coefficients,
            n_points: x.len(),
            workers,
            condition_estimate: condition.estimate,
            ill_conditioned: condition.ill_conditioned,
            timings: self.config.return_timings.then_some(solution.timings),
        })
    }
}

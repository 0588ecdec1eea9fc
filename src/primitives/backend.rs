//! Worker pool used by the parallel kernels.
//!
//! ## Purpose
//!
//! This module wraps the rayon thread pool a fit runs on. A model either
//! borrows rayon's global pool (sized to the hardware concurrency) or owns a
//! dedicated pool with a fixed number of workers, built once and shared by
//! every fit of that model.
//!
//! ## Design notes
//!
//! * **Install, then fan out**: A whole solve runs inside `install`; kernels
//!   use rayon parallel iterators and therefore land on the installed pool.
//! * **Shared**: The dedicated pool lives behind an `Arc`, so cloning a model
//!   does not spawn threads.
//!
//! ## Non-goals
//!
//! * This module does not cancel or time out work.

use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::primitives::errors::PolyfitError;

/// Handle to the worker pool kernels run on.
#[derive(Debug, Clone, Default)]
pub struct WorkerPool {
    pool: Option<Arc<ThreadPool>>,
}

impl WorkerPool {
    /// Use rayon's global pool.
    pub fn global() -> Self {
        Self { pool: None }
    }

    /// Build a dedicated pool with exactly `workers` threads.
    pub fn with_workers(workers: usize) -> Result<Self, PolyfitError> {
        if workers == 0 {
            return Err(PolyfitError::InvalidWorkers(workers));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("polyfit-worker-{}", i))
            .build()
            .map_err(|e| PolyfitError::ThreadPool(e.to_string()))?;
        Ok(Self {
            pool: Some(Arc::new(pool)),
        })
    }

    /// Number of worker threads available to kernels.
    pub fn workers(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Whether this handle owns a dedicated pool.
    pub fn is_dedicated(&self) -> bool {
        self.pool.is_some()
    }

    /// Run `op` with this pool as the current rayon pool.
    pub fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

//! Tests for the worker pool handle and phase timings.
//!
//! ## Test Organization
//!
//! 1. **Pool Construction** - Global and dedicated pools
//! 2. **Execution** - Work runs on the dedicated pool
//! 3. **Timings** - Totals and rendering

use core::time::Duration;

use polyfit_rs::internals::primitives::backend::WorkerPool;
use polyfit_rs::internals::primitives::errors::PolyfitError;
use polyfit_rs::internals::primitives::timing::PhaseTimings;

// ============================================================================
// Pool Construction Tests
// ============================================================================

#[test]
fn test_global_pool_is_not_dedicated() {
    let pool = WorkerPool::global();
    assert!(!pool.is_dedicated());
    assert!(pool.workers() >= 1);
}

#[test]
fn test_dedicated_pool_has_requested_workers() {
    let pool = WorkerPool::with_workers(3).unwrap();
    assert!(pool.is_dedicated());
    assert_eq!(pool.workers(), 3);

    let shared = pool.clone();
    assert_eq!(shared.workers(), 3);
}

#[test]
fn test_zero_workers_rejected() {
    assert_eq!(
        WorkerPool::with_workers(0).unwrap_err(),
        PolyfitError::InvalidWorkers(0)
    );
}

// ============================================================================
// Execution Tests
// ============================================================================

#[test]
fn test_install_runs_on_named_pool_threads() {
    let pool = WorkerPool::with_workers(2).unwrap();
    let name = pool.install(|| std::thread::current().name().map(str::to_owned));
    assert!(name.unwrap().starts_with("polyfit-worker-"));
}

#[test]
fn test_install_on_global_pool_returns_value() {
    let pool = WorkerPool::default();
    assert_eq!(pool.install(|| 40 + 2), 42);
}

// ============================================================================
// Timing Tests
// ============================================================================

#[test]
fn test_phase_timings_total() {
    let timings = PhaseTimings {
        fill: Duration::from_millis(1),
        transpose: Duration::from_millis(2),
        multiply: Duration::from_millis(3),
        eliminate: Duration::from_millis(4),
    };
    assert_eq!(timings.total(), Duration::from_millis(10));
    assert_eq!(PhaseTimings::default().total(), Duration::ZERO);
}

#[test]
fn test_phase_timings_display() {
    let timings = PhaseTimings {
        fill: Duration::from_millis(250),
        ..PhaseTimings::default()
    };
    let text = timings.to_string();
    assert!(text.contains("Fill:      0.250000 s"));
    assert!(text.contains("Eliminate: 0.000000 s"));
    assert_eq!(text.lines().count(), 4);
}

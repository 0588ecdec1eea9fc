//! Row partitioning for parallel kernels.
//!
//! ## Purpose
//!
//! This module splits the output rows of a kernel into one contiguous range
//! per worker so that every worker writes a disjoint slice of the result.
//!
//! ## Design notes
//!
//! * **Balanced**: Each worker gets `rows / workers` rows; the `rows % workers`
//!   remainder goes one extra row each to the lowest-indexed workers, so two
//!   workers never differ by more than one row.
//! * **Clamped**: Requesting more workers than rows yields one row per worker.
//!
//! ## Invariants
//!
//! * Ranges are contiguous, ascending, non-overlapping and cover `0..rows`.

use core::ops::Range;

/// Balanced split of `rows` output rows across workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPartition {
    rows: usize,
    workers: usize,
}

impl RowPartition {
    /// Partition `rows` across at most `workers` workers.
    pub fn new(rows: usize, workers: usize) -> Self {
        Self {
            rows,
            workers: workers.clamp(1, rows.max(1)),
        }
    }

    /// Number of workers that receive a range.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Total number of rows being partitioned.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Row range owned by `worker`.
    pub fn range(&self, worker: usize) -> Range<usize> {
        debug_assert!(worker < self.workers);
        let base = self.rows / self.workers;
        let remainder = self.rows % self.workers;
        let start = worker * base + worker.min(remainder);
        let len = base + usize::from(worker < remainder);
        start..start + len
    }

    /// Iterate over every worker's range in worker order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.workers).map(move |w| self.range(w))
    }

    /// Split a row-major buffer with `cols` columns into per-worker slices.
    ///
    /// `data.len()` must equal `rows * cols`.
    pub fn split_rows_mut<'a, T>(
        &self,
        data: &'a mut [T],
        cols: usize,
    ) -> Vec<(Range<usize>, &'a mut [T])> {
        debug_assert_eq!(data.len(), self.rows * cols);
        let mut parts = Vec::with_capacity(self.workers);
        let mut rest = data;
        for range in self.ranges() {
            let (head, tail) = core::mem::take(&mut rest).split_at_mut(range.len() * cols);
            parts.push((range, head));
            rest = tail;
        }
        parts
    }
}

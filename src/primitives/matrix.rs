//! Dense row-major matrix storage.
//!
//! ## Purpose
//!
//! This module provides `Matrix`, the owned rectangular buffer every kernel
//! reads from and writes into. Element `(r, c)` lives at `r * cols + c`.
//!
//! ## Design notes
//!
//! * **Fallible allocation**: Construction goes through `try_reserve_exact`, so
//!   an oversized request becomes `PolyfitError::Allocation` instead of an abort.
//! * **Exclusive ownership**: A matrix owns its buffer; there is no way to make
//!   two matrices share storage.
//! * **Debug-only bounds contract**: Element accessors assert `(r, c)` against
//!   the declared shape in debug builds.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` for the lifetime of the value.
//! * `rows` and `cols` never change after construction.
//! * Either dimension may be zero. Kernels return such empty matrices for
//!   empty operands; a fit never builds one because validation requires
//!   `N >= K >= 1`.

use core::ops::{Index, IndexMut};
use num_traits::Zero;

use crate::primitives::errors::PolyfitError;

/// Owned dense matrix in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy + Zero> Matrix<T> {
    /// Create a zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, PolyfitError> {
        let mut data = Self::reserve(rows, cols)?;
        data.resize(rows * cols, T::zero());
        Ok(Self { rows, cols, data })
    }

    /// Create an `N x 1` column holding a copy of `values`.
    pub fn column(values: &[T]) -> Result<Self, PolyfitError> {
        Self::from_row_slice(values.len(), 1, values)
    }

    /// Create a matrix from row-major `values`.
    pub fn from_row_slice(rows: usize, cols: usize, values: &[T]) -> Result<Self, PolyfitError> {
        if rows.checked_mul(cols) != Some(values.len()) {
            return Err(PolyfitError::ShapeMismatch {
                left: (rows, cols),
                right: (values.len(), 1),
            });
        }
        let mut data = Self::reserve(rows, cols)?;
        data.extend_from_slice(values);
        Ok(Self { rows, cols, data })
    }

    fn reserve(rows: usize, cols: usize) -> Result<Vec<T>, PolyfitError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(PolyfitError::Allocation { rows, cols })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| PolyfitError::Allocation { rows, cols })?;
        Ok(data)
    }
}

impl<T: Copy> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Read the element at `(r, c)`.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        self[(r, c)]
    }

    /// Write the element at `(r, c)`.
    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: T) {
        self[(r, c)] = value;
    }

    /// Borrow row `r`.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        debug_assert!(r < self.rows, "row {} out of {}", r, self.rows);
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Mutably borrow row `r`.
    #[inline]
    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        debug_assert!(r < self.rows, "row {} out of {}", r, self.rows);
        &mut self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Borrow the pivot row immutably and a distinct target row mutably.
    ///
    /// `pivot` and `target` must differ.
    pub fn pivot_and_target_rows(&mut self, pivot: usize, target: usize) -> (&[T], &mut [T]) {
        debug_assert_ne!(pivot, target);
        let cols = self.cols;
        if pivot < target {
            let (head, tail) = self.data.split_at_mut(target * cols);
            (&head[pivot * cols..(pivot + 1) * cols], &mut tail[..cols])
        } else {
            let (head, tail) = self.data.split_at_mut(pivot * cols);
            (&tail[..cols], &mut head[target * cols..(target + 1) * cols])
        }
    }

    /// Exchange rows `a` and `b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let cols = self.cols;
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Row-major view of the whole buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of the whole buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return its row-major buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        debug_assert!(
            r < self.rows && c < self.cols,
            "({}, {}) out of {}x{}",
            r,
            c,
            self.rows,
            self.cols
        );
        &self.data[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        debug_assert!(
            r < self.rows && c < self.cols,
            "({}, {}) out of {}x{}",
            r,
            c,
            self.rows,
            self.cols
        );
        &mut self.data[r * self.cols + c]
    }
}

// crates/chand_foundation/src/error.rs

//! Unified error type for the CHAND crates.
//!
//! Provides the [`ChandError`] enum and the [`ChandResult`] alias used across
//! the whole project. Errors here are caller contract violations surfaced
//! immediately; there are no retryable or transient conditions anywhere in
//! the pipeline.

use thiserror::Error;

/// Unified result type.
pub type ChandResult<T> = Result<T, ChandError>;

/// CHAND error type.
#[derive(Error, Debug)]
pub enum ChandError {
    /// Array size does not match the declared grid dimensions.
    #[error("size mismatch: {name} expected {expected}, got {actual}")]
    SizeMismatch {
        /// Name of the offending array.
        name: &'static str,
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        actual: usize,
    },

    /// Two grids that must share a shape do not.
    #[error("shape mismatch: {name} is {actual_rows}x{actual_cols}, expected {expected_rows}x{expected_cols}")]
    ShapeMismatch {
        /// Name of the offending grid.
        name: &'static str,
        /// Expected row count.
        expected_rows: usize,
        /// Expected column count.
        expected_cols: usize,
        /// Actual row count.
        actual_rows: usize,
        /// Actual column count.
        actual_cols: usize,
    },

    /// A (row, col) cell coordinate lies outside the grid extent.
    #[error("cell ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    CellOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },

    /// Input data is structurally invalid.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Why the input was rejected.
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChandError {
    /// Array size mismatch.
    pub fn size_mismatch(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            name,
            expected,
            actual,
        }
    }

    /// Grid shape mismatch.
    pub fn shape_mismatch(
        name: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::ShapeMismatch {
            name,
            expected_rows: expected.0,
            expected_cols: expected.1,
            actual_rows: actual.0,
            actual_cols: actual.1,
        }
    }

    /// Cell coordinate out of bounds.
    pub fn cell_out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::CellOutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }

    /// Invalid input data.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

// ============================================================================
// Validation helpers
// ============================================================================

impl ChandError {
    /// Check that an array length matches the expected element count.
    #[inline]
    pub fn check_size(name: &'static str, expected: usize, actual: usize) -> ChandResult<()> {
        if expected != actual {
            Err(Self::size_mismatch(name, expected, actual))
        } else {
            Ok(())
        }
    }

    /// Check that two grid shapes agree.
    #[inline]
    pub fn check_shape(
        name: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> ChandResult<()> {
        if expected != actual {
            Err(Self::shape_mismatch(name, expected, actual))
        } else {
            Ok(())
        }
    }

    /// Check that a (row, col) coordinate lies inside the grid extent.
    #[inline]
    pub fn check_cell(row: usize, col: usize, rows: usize, cols: usize) -> ChandResult<()> {
        if row >= rows || col >= cols {
            Err(Self::cell_out_of_bounds(row, col, rows, cols))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

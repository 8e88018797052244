// crates/chand_terrain/src/mask.rs

//! Per-cell validity flags.
//!
//! A [`ValidityMask`] marks which cells of a grid carry real data. It is
//! stored as a parallel boolean array rather than a sentinel value inside the
//! value grid, so "propagate validity, never trust values under the mask" is
//! explicit and testable.

use chand_foundation::ensure;
use chand_foundation::error::{ChandError, ChandResult};

/// Per-cell validity flags for a grid, row-major. `true` means the cell
/// carries real data; `false` marks a no-data cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityMask {
    /// Validity flags, row-major.
    pub flags: Vec<bool>,
    /// Row count.
    pub rows: usize,
    /// Column count.
    pub cols: usize,
}

impl ValidityMask {
    /// Mask with every cell valid.
    pub fn all_valid(rows: usize, cols: usize) -> Self {
        Self {
            flags: vec![true; rows * cols],
            rows,
            cols,
        }
    }

    /// Mask from existing row-major flags.
    pub fn from_flags(flags: Vec<bool>, rows: usize, cols: usize) -> ChandResult<Self> {
        ensure!(
            flags.len() == rows * cols,
            ChandError::size_mismatch("validity flags", rows * cols, flags.len())
        );
        Ok(Self { flags, rows, cols })
    }

    /// Whether a cell carries real data. Out-of-bounds cells are invalid.
    #[inline]
    pub fn is_valid(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.flags[row * self.cols + col]
    }

    /// Number of no-data cells.
    pub fn invalid_count(&self) -> usize {
        self.flags.iter().filter(|&&f| !f).count()
    }

    /// (rows, cols) shape.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

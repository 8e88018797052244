// crates/chand_terrain/src/raster.rs

//! Raster grid storage.
//!
//! Flat row-major storage for 2D terrain data. Cell (row, col) lives at
//! flat index `row * cols + col`; every grid in the project uses the same
//! ordering, so flat indices are interchangeable across value grids,
//! validity masks and label grids of the same shape.

use chand_foundation::error::{ChandError, ChandResult};

/// 2D real-valued grid, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    /// Cell values, row-major.
    pub data: Vec<f64>,
    /// Row count.
    pub rows: usize,
    /// Column count.
    pub cols: usize,
}

impl Raster {
    /// Create a grid filled with a constant value.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a grid from existing row-major data.
    pub fn from_data(data: Vec<f64>, rows: usize, cols: usize) -> ChandResult<Self> {
        ChandError::check_size("raster data", rows * cols, data.len())?;
        Ok(Self { data, rows, cols })
    }

    /// Cell value, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Set a cell value. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
        }
    }

    /// Flat index of a cell.
    #[inline]
    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// (row, col) of a flat index.
    #[inline]
    pub fn grid_index(&self, idx: usize) -> (usize, usize) {
        (idx / self.cols, idx % self.cols)
    }

    /// Whether a cell lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Total cell count.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (rows, cols) shape.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

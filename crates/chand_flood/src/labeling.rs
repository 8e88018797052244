// crates/chand_flood/src/labeling.rs

//! Connected-component labeling over a binary grid mask.
//!
//! Partitions the foreground cells of a [`BinaryMask`] into maximal connected
//! regions. Two foreground cells share a label iff they are reachable from
//! one another through foreground cells under the chosen [`Connectivity`];
//! background cells keep the reserved label 0.
//!
//! # Algorithm
//!
//! Classic two-pass scan with a union-find over provisional labels, indexed
//! by flattened grid position. No recursion, so stack depth is independent of
//! region size. The second pass compacts equivalence classes to consecutive
//! labels in row-major first-occurrence order, which makes the full label
//! grid (not just the partition) deterministic.

use chand_terrain::raster::Raster;
use serde::{Deserialize, Serialize};

/// Neighbor rule for region labeling.
///
/// Controls whether diagonal-only contact joins two cells into one region.
/// The default is [`Connectivity::Eight`] (edge or corner contact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Connectivity {
    /// Edge neighbors only (von Neumann).
    Four,
    /// Edge and corner neighbors (Moore).
    #[default]
    Eight,
}

impl Connectivity {
    /// Method name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Four => "4-connected",
            Self::Eight => "8-connected",
        }
    }

    /// Backward neighbor offsets visited by the row-major first pass.
    ///
    /// Only neighbors already scanned matter: west and north for 4-connected,
    /// plus the two upper diagonals for 8-connected.
    fn scan_offsets(&self) -> &'static [(isize, isize)] {
        match self {
            Self::Four => &[(0, -1), (-1, 0)],
            Self::Eight => &[(0, -1), (-1, -1), (-1, 0), (-1, 1)],
        }
    }
}

/// Two-valued grid separating foreground (wet candidates) from background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    /// `true` for foreground cells, row-major.
    pub cells: Vec<bool>,
    /// Row count.
    pub rows: usize,
    /// Column count.
    pub cols: usize,
}

impl BinaryMask {
    /// Threshold a depth grid: foreground where depth is strictly positive,
    /// background where it is exactly zero.
    pub fn from_depths(depth: &Raster) -> Self {
        Self {
            cells: depth.data.iter().map(|&d| d > 0.0).collect(),
            rows: depth.rows,
            cols: depth.cols,
        }
    }

    /// Whether a cell is foreground. Out-of-bounds cells are background.
    #[inline]
    pub fn is_foreground(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Number of foreground cells.
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Region labels for a grid. Background cells carry label 0; every foreground
/// cell carries a label in `1..=region_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    labels: Vec<u32>,
    rows: usize,
    cols: usize,
    region_count: u32,
}

impl LabelGrid {
    /// Label at a cell. Out-of-bounds cells report background.
    #[inline]
    pub fn label_at(&self, row: usize, col: usize) -> u32 {
        if row < self.rows && col < self.cols {
            self.labels[row * self.cols + col]
        } else {
            0
        }
    }

    /// Flat row-major label array.
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Number of distinct foreground regions.
    #[inline]
    pub fn region_count(&self) -> u32 {
        self.region_count
    }

    /// (rows, cols) shape.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// Union-find root with path halving.
fn find(parent: &mut [u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        parent[x as usize] = parent[parent[x as usize] as usize];
        x = parent[x as usize];
    }
    x
}

/// Label the connected foreground regions of a binary mask.
///
/// An all-background mask yields a label grid containing only label 0.
pub fn label_regions(mask: &BinaryMask, connectivity: Connectivity) -> LabelGrid {
    let rows = mask.rows;
    let cols = mask.cols;
    let mut labels = vec![0u32; rows * cols];

    // parent[0] is the background slot and never unioned.
    let mut parent: Vec<u32> = vec![0];
    let offsets = connectivity.scan_offsets();

    // First pass: provisional labels, recording equivalences between regions
    // that turn out to touch.
    for r in 0..rows {
        for c in 0..cols {
            let idx = r * cols + c;
            if !mask.cells[idx] {
                continue;
            }

            let mut assigned = 0u32;
            for &(dr, dc) in offsets {
                let nr = r as isize + dr;
                let nc = c as isize + dc;
                if nr < 0 || nc < 0 || nc >= cols as isize {
                    continue;
                }
                let nidx = nr as usize * cols + nc as usize;
                let neighbor = labels[nidx];
                if neighbor == 0 {
                    continue;
                }
                let root = find(&mut parent, neighbor);
                if assigned == 0 {
                    assigned = root;
                } else if root != assigned {
                    let lo = root.min(assigned);
                    let hi = root.max(assigned);
                    parent[hi as usize] = lo;
                    assigned = lo;
                }
            }

            if assigned == 0 {
                let fresh = parent.len() as u32;
                parent.push(fresh);
                labels[idx] = fresh;
            } else {
                labels[idx] = assigned;
            }
        }
    }

    // Second pass: resolve to roots and compact to consecutive labels in
    // row-major first-occurrence order.
    let mut remap = vec![0u32; parent.len()];
    let mut region_count = 0u32;
    for label in labels.iter_mut() {
        if *label == 0 {
            continue;
        }
        let root = find(&mut parent, *label);
        if remap[root as usize] == 0 {
            region_count += 1;
            remap[root as usize] = region_count;
        }
        *label = remap[root as usize];
    }

    log::trace!(
        "labeled {} region(s) ({}) over {}x{} mask",
        region_count,
        connectivity.name(),
        rows,
        cols
    );

    LabelGrid {
        labels,
        rows,
        cols,
        region_count,
    }
}

// crates/chand_flood/src/inundation.rs

//! Connected-component HAND inundation.
//!
//! Computes the flood-inundation depth grid for a DEM under a constant
//! water-surface elevation, restricted to the terrain hydraulically connected
//! to a known source cell (open ocean, gage location). Pipeline:
//!
//! 1. depth rule: `water_level - elevation` where `elevation < water_level`,
//!    else exactly 0
//! 2. binary wet/dry mask from the strictly positive depths
//! 3. connected-component labeling of the wet candidates
//! 4. keep the region containing the source cell, force 0 elsewhere
//! 5. re-attach the DEM validity mask, if one was supplied
//!
//! The whole pass is a pure transform: no state survives between calls, and
//! independent invocations may run concurrently on their own grids.
//!
//! The DEM and the water level must share a vertical datum; no unit or datum
//! conversion happens here.

use crate::labeling::{label_regions, BinaryMask, Connectivity};
use chand_foundation::error::{ChandError, ChandResult};
use chand_terrain::dem::Dem;
use chand_terrain::raster::Raster;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Inundation calculation parameters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InundationConfig {
    /// Neighbor rule used to decide which wet cells form one region.
    pub connectivity: Connectivity,
}

/// Per-cell depth rule.
///
/// Strict less-than governs wetness: ties (`elevation == water_level`)
/// resolve to exactly 0, and a NaN elevation compares false and therefore
/// lands in the dry branch. The returned grid is non-negative everywhere.
pub fn depth_grid(elevation: &Raster, water_level: f64) -> Raster {
    let data: Vec<f64> = elevation
        .data
        .par_iter()
        .map(|&z| if z < water_level { water_level - z } else { 0.0 })
        .collect();
    Raster {
        data,
        rows: elevation.rows,
        cols: elevation.cols,
    }
}

/// Compute the inundation grid with the default configuration
/// (8-connectivity).
pub fn compute_inundation(
    dem: &Dem,
    water_level: f64,
    source_cell: (usize, usize),
) -> ChandResult<Dem> {
    compute_inundation_with(dem, water_level, source_cell, &InundationConfig::default())
}

/// Compute the inundation grid.
///
/// Returns a grid of the DEM's shape holding flood depth in the region
/// connected to `source_cell` and exactly 0 everywhere else, carrying the
/// DEM's validity mask unchanged if one was supplied.
///
/// # Errors
///
/// `source_cell` outside the grid extent is a fatal caller error and fails
/// before any computation. A source cell that lands on dry terrain is not an
/// error: the selected region is the background and the result is all-zero.
pub fn compute_inundation_with(
    dem: &Dem,
    water_level: f64,
    source_cell: (usize, usize),
    config: &InundationConfig,
) -> ChandResult<Dem> {
    let (row, col) = source_cell;
    ChandError::check_cell(row, col, dem.rows(), dem.cols())?;

    let depth = depth_grid(dem.values(), water_level);
    let wet = BinaryMask::from_depths(&depth);
    let regions = label_regions(&wet, config.connectivity);

    let source_label = regions.label_at(row, col);
    if source_label == 0 {
        log::warn!(
            "source cell ({}, {}) is dry at water level {}; inundation is all zero",
            row,
            col,
            water_level
        );
    }
    log::debug!(
        "{} wet candidate(s) in {} region(s), source region {}",
        wet.foreground_count(),
        regions.region_count(),
        source_label
    );

    // Keep depth only inside the source region. When the source label is the
    // background this keeps exactly the zero-depth cells, so the result
    // collapses to all-zero.
    let data: Vec<f64> = depth
        .data
        .iter()
        .zip(regions.labels())
        .map(|(&d, &label)| if label == source_label { d } else { 0.0 })
        .collect();
    let result = Raster {
        data,
        rows: depth.rows,
        cols: depth.cols,
    };

    match dem.validity() {
        Some(mask) => Dem::with_validity(result, mask.clone()),
        None => Ok(Dem::new(result)),
    }
}

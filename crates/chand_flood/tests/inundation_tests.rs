// crates/chand_flood/tests/inundation_tests.rs

//! End-to-end inundation scenarios.
//!
//! Exercises the full pipeline (depth rule, wet mask, labeling, region
//! selection, mask propagation) on small grids where the expected output can
//! be written down by hand.

use chand_flood::{compute_inundation, compute_inundation_with, Connectivity, InundationConfig};
use chand_foundation::error::ChandError;
use chand_terrain::{Dem, Raster, ValidityMask};

fn dem_from(rows: usize, cols: usize, data: Vec<f64>) -> Dem {
    Dem::new(Raster::from_data(data, rows, cols).unwrap())
}

fn four_connected() -> InundationConfig {
    InundationConfig {
        connectivity: Connectivity::Four,
    }
}

// ============================================================
// Fully connected flooding
// ============================================================

#[test]
fn test_flat_grid_floods_everywhere() {
    let dem = dem_from(3, 3, vec![0.0; 9]);
    let out = compute_inundation(&dem, 1.0, (1, 1)).unwrap();

    assert_eq!(out.shape(), (3, 3));
    assert!(out.values().data.iter().all(|&d| d == 1.0));
    assert!(out.validity().is_none());
}

#[test]
fn test_depth_tracks_terrain_inside_region() {
    // Sloping strip: depth must equal water_level - elevation cell by cell.
    let dem = dem_from(1, 4, vec![0.0, 1.0, 2.0, 3.0]);
    let out = compute_inundation(&dem, 4.0, (0, 0)).unwrap();
    assert_eq!(out.values().data, vec![4.0, 3.0, 2.0, 1.0]);
}

// ============================================================
// Disconnected wet regions
// ============================================================

#[test]
fn test_ridge_splits_flood_into_two_regions() {
    // Dry middle column separates two wet strips; only the strip holding the
    // source stays inundated.
    let dem = dem_from(
        3,
        3,
        vec![
            0.0, 10.0, 0.0, //
            0.0, 10.0, 0.0, //
            0.0, 10.0, 0.0,
        ],
    );
    let out = compute_inundation_with(&dem, 5.0, (0, 0), &four_connected()).unwrap();

    for row in 0..3 {
        assert_eq!(out.values().get(row, 0), Some(5.0));
        assert_eq!(out.values().get(row, 1), Some(0.0));
        assert_eq!(out.values().get(row, 2), Some(0.0));
    }
}

#[test]
fn test_diagonal_contact_respects_connectivity() {
    // The two wet cells touch only at a corner: one region under
    // 8-connectivity, two under 4-connectivity.
    let dem = dem_from(
        2,
        2,
        vec![
            0.0, 10.0, //
            10.0, 0.0,
        ],
    );

    let eight = compute_inundation(&dem, 5.0, (0, 0)).unwrap();
    assert_eq!(eight.values().get(1, 1), Some(5.0));

    let four = compute_inundation_with(&dem, 5.0, (0, 0), &four_connected()).unwrap();
    assert_eq!(four.values().get(0, 0), Some(5.0));
    assert_eq!(four.values().get(1, 1), Some(0.0));
}

// ============================================================
// Degenerate inputs
// ============================================================

#[test]
fn test_all_dry_grid_is_all_zero() {
    let dem = dem_from(3, 3, vec![100.0; 9]);
    for row in 0..3 {
        for col in 0..3 {
            let out = compute_inundation(&dem, 5.0, (row, col)).unwrap();
            assert!(out.values().data.iter().all(|&d| d == 0.0));
        }
    }
}

#[test]
fn test_elevation_equal_to_water_level_is_dry() {
    // Strict less-than: a cell exactly at the water level is not wet.
    let dem = dem_from(1, 3, vec![5.0, 4.0, 5.0]);
    let out = compute_inundation(&dem, 5.0, (0, 1)).unwrap();
    assert_eq!(out.values().data, vec![0.0, 1.0, 0.0]);
}

#[test]
fn test_nan_elevation_blocks_connectivity() {
    // NaN compares false under `<`, so the cell is dry and severs the strip.
    let dem = dem_from(1, 3, vec![0.0, f64::NAN, 0.0]);
    let out = compute_inundation_with(&dem, 2.0, (0, 0), &four_connected()).unwrap();
    assert_eq!(out.values().data, vec![2.0, 0.0, 0.0]);
}

#[test]
fn test_source_out_of_bounds_fails_fast() {
    let dem = dem_from(3, 3, vec![0.0; 9]);
    let err = compute_inundation(&dem, 1.0, (5, 5)).unwrap_err();
    assert!(matches!(
        err,
        ChandError::CellOutOfBounds {
            row: 5,
            col: 5,
            rows: 3,
            cols: 3
        }
    ));
}

// ============================================================
// Validity mask propagation
// ============================================================

#[test]
fn test_validity_mask_carried_through() {
    // Top row flagged no-data, bottom two rows flooded.
    let values = Raster::from_data(
        vec![
            -999.0, -999.0, -999.0, //
            1.0, 1.0, 1.0, //
            0.0, 0.0, 0.0,
        ],
        3,
        3,
    )
    .unwrap();
    let flags = vec![false, false, false, true, true, true, true, true, true];
    let mask = ValidityMask::from_flags(flags, 3, 3).unwrap();
    let dem = Dem::with_validity(values, mask.clone()).unwrap();

    let out = compute_inundation(&dem, 2.0, (2, 1)).unwrap();

    assert_eq!(out.validity(), Some(&mask));
    for col in 0..3 {
        assert_eq!(out.values().get(1, col), Some(1.0));
        assert_eq!(out.values().get(2, col), Some(2.0));
    }
}

// ============================================================
// Global properties
// ============================================================

#[test]
fn test_output_non_negative() {
    let dem = dem_from(
        3,
        3,
        vec![
            -5.0, 3.0, 0.5, //
            7.0, -1.0, 2.0, //
            0.0, 4.0, -2.5,
        ],
    );
    let out = compute_inundation(&dem, 1.5, (0, 0)).unwrap();
    assert!(out.values().data.iter().all(|&d| d >= 0.0));
}

#[test]
fn test_deterministic_output() {
    let dem = dem_from(
        4,
        4,
        vec![
            0.0, 9.0, 0.0, 0.0, //
            0.0, 9.0, 9.0, 0.0, //
            0.0, 0.0, 9.0, 0.0, //
            9.0, 0.0, 9.0, 0.0,
        ],
    );
    let first = compute_inundation(&dem, 3.0, (0, 0)).unwrap();
    for _ in 0..10 {
        let again = compute_inundation(&dem, 3.0, (0, 0)).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_input_dem_not_mutated() {
    let original = dem_from(2, 2, vec![0.0, 1.0, 2.0, 3.0]);
    let dem = original.clone();
    let _ = compute_inundation(&dem, 2.5, (0, 0)).unwrap();
    assert_eq!(dem, original);
}

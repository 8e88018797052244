// crates/chand_flood/src/lib.rs

//! Flood-inundation core.
//!
//! Turns (elevation grid, water level, source cell) into a masked
//! inundation-depth grid restricted to the terrain hydraulically connected to
//! the source:
//!
//! - [`labeling`]: binary wet/dry mask and connected-component labeler
//! - [`inundation`]: depth rule, region selection, mask propagation
//!
//! Rendering, basemaps and raster I/O are external collaborators; they hand
//! this crate already-parsed arrays and consume the plain output grid.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod inundation;
pub mod labeling;

pub use inundation::{compute_inundation, compute_inundation_with, depth_grid, InundationConfig};
pub use labeling::{label_regions, BinaryMask, Connectivity, LabelGrid};

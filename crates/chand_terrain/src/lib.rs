// crates/chand_terrain/src/lib.rs

//! Terrain data layer.
//!
//! Storage types for gridded terrain data:
//!
//! - [`raster`]: flat row-major real-valued grid
//! - [`mask`]: per-cell validity flags (no-data handling)
//! - [`dem`]: elevation grid plus optional validity mask
//!
//! The crate is agnostic to geospatial metadata: coordinate reference
//! systems, affine transforms and file formats live with the callers that
//! load and render rasters, not here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dem;
pub mod mask;
pub mod raster;

pub use dem::Dem;
pub use mask::ValidityMask;
pub use raster::Raster;

// crates/chand_terrain/src/dem.rs

//! Digital elevation model carrier.
//!
//! A [`Dem`] pairs an elevation [`Raster`] with an optional [`ValidityMask`]
//! (struct-of-arrays, no sentinel values). Shape agreement between the two is
//! enforced at construction, before any computation can observe them.

use crate::mask::ValidityMask;
use crate::raster::Raster;
use chand_foundation::error::{ChandError, ChandResult};

/// Elevation grid with an optional per-cell validity mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Dem {
    values: Raster,
    validity: Option<ValidityMask>,
}

impl Dem {
    /// DEM without a validity mask: every cell is data.
    pub fn new(values: Raster) -> Self {
        Self {
            values,
            validity: None,
        }
    }

    /// DEM with a validity mask. Fails if the mask shape differs from the
    /// grid shape.
    pub fn with_validity(values: Raster, validity: ValidityMask) -> ChandResult<Self> {
        ChandError::check_shape("validity mask", values.shape(), validity.shape())?;
        Ok(Self {
            values,
            validity: Some(validity),
        })
    }

    /// Elevation values.
    #[inline]
    pub fn values(&self) -> &Raster {
        &self.values
    }

    /// Validity mask, if one was supplied.
    #[inline]
    pub fn validity(&self) -> Option<&ValidityMask> {
        self.validity.as_ref()
    }

    /// Row count.
    #[inline]
    pub fn rows(&self) -> usize {
        self.values.rows
    }

    /// Column count.
    #[inline]
    pub fn cols(&self) -> usize {
        self.values.cols
    }

    /// (rows, cols) shape.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }
}

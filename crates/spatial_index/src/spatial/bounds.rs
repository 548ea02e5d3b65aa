//! Axis-aligned bounds for spatial regions
//!
//! A [`Bounds`] describes one region of the partition as center plus full
//! size; min and max corners are derived. Values are immutable once
//! constructed.

use serde::Serialize;

use super::octant::octant_offset;
use super::SpatialError;
use crate::foundation::math::VecN;

/// Axis-aligned box described by center and full size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds<const D: usize> {
    center: VecN<D>,
    size: VecN<D>,
}

impl<const D: usize> Bounds<D> {
    /// Create bounds from a center and a full (not half) size.
    ///
    /// Fails with [`SpatialError::InvalidArgument`] when any size component
    /// is negative.
    pub fn new(center: VecN<D>, size: VecN<D>) -> Result<Self, SpatialError> {
        if let Some(axis) = (0..D).find(|&axis| size[axis] < 0.0) {
            return Err(SpatialError::InvalidArgument(format!(
                "size axis {} is negative: {}",
                axis, size[axis]
            )));
        }
        Ok(Self { center, size })
    }

    /// Center of the region
    pub fn center(&self) -> VecN<D> {
        self.center
    }

    /// Full size of the region
    pub fn size(&self) -> VecN<D> {
        self.size
    }

    /// Minimum corner, `center - size / 2`
    pub fn min(&self) -> VecN<D> {
        self.center - self.size * 0.5
    }

    /// Maximum corner, `center + size / 2`
    pub fn max(&self) -> VecN<D> {
        self.center + self.size * 0.5
    }

    /// Test whether a box centered at `position` with full extent `size`
    /// overlaps this region.
    ///
    /// The test is strict on the low side and inclusive on the high side,
    /// so a box sitting exactly on the shared face of two sibling regions
    /// is owned by the lower sibling and only that one.
    pub fn overlaps(&self, position: VecN<D>, size: VecN<D>) -> bool {
        let query_min = position - size * 0.5;
        let query_max = position + size * 0.5;
        let min = self.min();
        let max = self.max();
        (0..D).all(|axis| min[axis] < query_max[axis] && max[axis] >= query_min[axis])
    }

    /// Bounds of sub-region `index` under the octant bit layout: half this
    /// size, centered a quarter size away along each axis.
    pub(crate) fn octant(&self, index: usize) -> Self {
        debug_assert!(index < super::octant::child_count(D));
        Self {
            center: self.center + (self.size * 0.25).component_mul(&octant_offset::<D>(index)),
            size: self.size * 0.5,
        }
    }
}

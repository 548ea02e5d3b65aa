//! Item contract for values stored in the index
//!
//! The tree only needs a read-only view of each stored object: a stable
//! identity for membership tests plus a position and an axis-aligned
//! extent. Hosts implement [`SpatialItem`] on their own object handles, or
//! use the ready-made [`BoxItem`] value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::SpatialError;
use crate::foundation::math::VecN;

/// Read-only spatial view of a stored object.
///
/// The tree never mutates an item and assumes its position does not change
/// after insertion; moving an item requires removing and re-inserting it.
pub trait SpatialItem<const D: usize> {
    /// Identity used for equality and membership tests
    type Id: Copy + PartialEq + fmt::Debug;

    /// Stable identity of the item
    fn id(&self) -> Self::Id;

    /// Center position of the item
    fn position(&self) -> VecN<D>;

    /// Full axis-aligned extent of the item, componentwise non-negative
    fn extent(&self) -> VecN<D>;
}

/// Stable identifier for items tracked by the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Create an identifier from a raw value
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw identifier value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Self-contained item: an identity plus a position and extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxItem<const D: usize> {
    id: ItemId,
    position: VecN<D>,
    extent: VecN<D>,
}

impl<const D: usize> BoxItem<D> {
    /// Create an item from its identity, center position, and full extent.
    ///
    /// Fails with [`SpatialError::InvalidArgument`] when any extent
    /// component is negative.
    pub fn new(id: ItemId, position: VecN<D>, extent: VecN<D>) -> Result<Self, SpatialError> {
        if let Some(axis) = (0..D).find(|&axis| extent[axis] < 0.0) {
            return Err(SpatialError::InvalidArgument(format!(
                "extent axis {} is negative: {}",
                axis, extent[axis]
            )));
        }
        Ok(Self {
            id,
            position,
            extent,
        })
    }
}

impl<const D: usize> SpatialItem<D> for BoxItem<D> {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }

    fn position(&self) -> VecN<D> {
        self.position
    }

    fn extent(&self) -> VecN<D> {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_box_item_exposes_spatial_view() {
        let item = BoxItem::new(
            ItemId::new(42),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.5, 0.5, 0.5),
        )
        .unwrap();

        assert_eq!(item.id(), ItemId::new(42));
        assert_eq!(item.id().raw(), 42);
        assert_eq!(item.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(item.extent(), Vec3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_negative_extent_is_rejected() {
        let result = BoxItem::new(ItemId::new(1), Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        assert!(matches!(result, Err(SpatialError::InvalidArgument(_))));
    }
}

//! Spatial partitioning structures
//!
//! Provides a static spatial-partition index for proximity and hit
//! detection among many immobile objects. The index is a recursive tree
//! that subdivides an axis-aligned region of 2D or 3D space into equal
//! sub-regions, storing each inserted item at the deepest node whose
//! sub-regions are too small to hold it.

mod bounds;
mod item;
mod node;
mod octant;

pub use bounds::Bounds;
pub use item::{BoxItem, ItemId, SpatialItem};
pub use node::{Node, MAX_NODE_DEPTH};
pub use octant::{child_count, octant_index, octant_offset};

use thiserror::Error;

/// Errors raised by the spatial structures
#[derive(Error, Debug)]
pub enum SpatialError {
    /// A caller-supplied position, size, or parent violated a precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

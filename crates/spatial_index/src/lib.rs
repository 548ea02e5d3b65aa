//! # Spatial Index
//!
//! A static spatial-partition index for proximity and hit detection among
//! many immobile objects.
//!
//! The index is a recursive tree subdividing an axis-aligned region of 2D
//! or 3D space into `2^D` equal sub-regions per level. Each inserted item
//! lands at the deepest node whose sub-regions are too small to hold it,
//! so "which stored items may occupy this region" resolves by walking only
//! the overlapping branches.
//!
//! ## Features
//!
//! - **One core, two dimensions**: quadtrees and octrees share a single
//!   dimension-generic implementation
//! - **Deterministic boundaries**: a box on the shared face of two sibling
//!   regions is owned by exactly one of them
//! - **Bounded subdivision**: at most [`MAX_NODE_DEPTH`] levels below the
//!   root, keeping recursion depth predictable
//! - **Optional visualization**: regions can be materialized as colored
//!   boxes through a pluggable [`debug::RenderHost`]
//!
//! ## Quick Start
//!
//! ```rust
//! use spatial_index::prelude::*;
//!
//! # fn main() -> Result<(), SpatialError> {
//! let mut root: Node<BoxItem<3>, 3> =
//!     Node::create(Vec3::zeros(), Vec3::new(10.0, 10.0, 10.0), None)?;
//!
//! let item = BoxItem::new(
//!     ItemId::new(1),
//!     Vec3::new(3.0, 3.0, 3.0),
//!     Vec3::new(1.0, 1.0, 1.0),
//! )?;
//!
//! assert!(root.insert(item).is_some());
//! assert!(root.find(&item).is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod debug;
pub mod foundation;
pub mod spatial;

pub use spatial::{Bounds, BoxItem, ItemId, Node, SpatialError, SpatialItem, MAX_NODE_DEPTH};

/// Common imports for crate users
pub mod prelude {
    pub use crate::debug::{BoxDescriptor, BoxHandle, NullRenderHost, RenderHost};
    pub use crate::foundation::math::{Vec2, Vec3, Vec4, VecN};
    pub use crate::spatial::{
        Bounds, BoxItem, ItemId, Node, SpatialError, SpatialItem, MAX_NODE_DEPTH,
    };
}

//! Debug visualization for the spatial index
//!
//! The tree can materialize its regions as colored boxes in an external
//! rendering host. This is purely observational: the index works unchanged
//! when no host is wired in.

pub mod visualize;

pub use visualize::{
    sibling_group_color, BoxDescriptor, BoxHandle, NullRenderHost, RecordingRenderHost,
    RenderHost, BOX_CONTAINER,
};

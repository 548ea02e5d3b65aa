//! Rendering boundary for debug visualization
//!
//! Defines the capability the tree calls into when asked to visualize
//! itself: a host that creates and destroys colored, non-interactive,
//! labeled box primitives. Two hosts ship with the crate: an inert one for
//! headless callers and a recording one for tests and inspection.

use serde::Serialize;
use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::{Vec4, VecN};

/// Name of the fixed container every debug box is parented under
pub const BOX_CONTAINER: &str = "SpatialIndexDebug";

new_key_type! {
    /// Opaque handle to a box primitive created by a [`RenderHost`]
    pub struct BoxHandle;
}

/// Description of one axis-aligned debug box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxDescriptor<const D: usize> {
    /// World-space center of the box
    pub center: VecN<D>,

    /// Full extents of the box
    pub size: VecN<D>,

    /// RGBA color; the alpha channel carries the transparency
    pub color: Vec4,

    /// Human-readable label for hosts that can show one
    pub label: String,
}

/// External rendering capability consumed by the visualization calls.
///
/// Hosts materialize non-interactive colored boxes under the
/// [`BOX_CONTAINER`] group and destroy them again on request.
pub trait RenderHost<const D: usize> {
    /// Materialize a box primitive, returning its handle
    fn create_box(&mut self, descriptor: &BoxDescriptor<D>) -> BoxHandle;

    /// Destroy a previously created box primitive
    fn destroy_box(&mut self, handle: BoxHandle);
}

/// Host that ignores every request, for callers without a renderer
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderHost;

impl<const D: usize> RenderHost<D> for NullRenderHost {
    fn create_box(&mut self, _descriptor: &BoxDescriptor<D>) -> BoxHandle {
        BoxHandle::default()
    }

    fn destroy_box(&mut self, _handle: BoxHandle) {}
}

/// Host that records every create and destroy call.
///
/// Useful in tests and headless tools to observe exactly which boxes a
/// visualization pass produced and whether teardown released them all.
#[derive(Debug, Default)]
pub struct RecordingRenderHost<const D: usize> {
    boxes: SlotMap<BoxHandle, BoxDescriptor<D>>,
    created: usize,
}

impl<const D: usize> RecordingRenderHost<D> {
    /// Create an empty recording host
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of boxes currently alive in the host
    pub fn live_boxes(&self) -> usize {
        self.boxes.len()
    }

    /// Total number of create calls observed
    pub fn created(&self) -> usize {
        self.created
    }

    /// Descriptor of a live box, if the handle is still valid
    pub fn descriptor(&self, handle: BoxHandle) -> Option<&BoxDescriptor<D>> {
        self.boxes.get(handle)
    }
}

impl<const D: usize> RenderHost<D> for RecordingRenderHost<D> {
    fn create_box(&mut self, descriptor: &BoxDescriptor<D>) -> BoxHandle {
        self.created += 1;
        log::debug!(
            "creating debug box '{}' under {}",
            descriptor.label,
            BOX_CONTAINER
        );
        self.boxes.insert(descriptor.clone())
    }

    fn destroy_box(&mut self, handle: BoxHandle) {
        self.boxes.remove(handle);
    }
}

/// Pick a fresh color for one sibling group of regions.
///
/// Random full-saturation hue at the fixed transparency the debug boxes
/// render with.
pub fn sibling_group_color() -> Vec4 {
    let (r, g, b) = hue_to_rgb(rand::random::<f32>() * 360.0);
    Vec4::new(r, g, b, 0.25)
}

fn hue_to_rgb(hue: f32) -> (f32, f32, f32) {
    let h = (hue / 60.0) % 6.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    }
}

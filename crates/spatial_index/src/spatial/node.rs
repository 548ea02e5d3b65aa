//! Tree node and the insert/find/remove/divide protocol
//!
//! Each node owns either zero or one full generation of `2^D` children,
//! plus the items resident at its level. Placement decisions flow top-down,
//! dividing on demand; lookup results propagate back up through return
//! values, never through shared state. Recursion depth is bounded by
//! [`MAX_NODE_DEPTH`], so stack usage stays predictable.

use super::bounds::Bounds;
use super::item::SpatialItem;
use super::octant::{child_count, octant_index};
use super::SpatialError;
use crate::debug::{sibling_group_color, BoxDescriptor, BoxHandle, RenderHost};
use crate::foundation::math::{Vec4, VecN};

/// Hard cap on subdivision levels: 7 inclusive levels, 0 through 6
pub const MAX_NODE_DEPTH: u32 = 6;

/// A region of space together with its resident items and, once divided,
/// its `2^D` equal sub-regions.
///
/// Items are assumed immobile once inserted; the tree is not safe for
/// concurrent mutation and callers needing shared access must serialize
/// externally.
#[derive(Debug)]
pub struct Node<T, const D: usize> {
    bounds: Bounds<D>,
    depth: u32,
    items: Vec<T>,
    children: Option<Box<[Node<T, D>]>>,
    viz_handle: Option<BoxHandle>,
}

impl<T: SpatialItem<D>, const D: usize> Node<T, D> {
    /// Create a tree node covering the region at `center` with full `size`.
    ///
    /// `parent` only supplies the depth of the enclosing node; the link
    /// itself is not stored because nothing in the protocol traverses
    /// upward. Fails with [`SpatialError::InvalidArgument`] when any size
    /// component is negative, or when `parent` is already at
    /// [`MAX_NODE_DEPTH`].
    pub fn create(
        center: VecN<D>,
        size: VecN<D>,
        parent: Option<&Self>,
    ) -> Result<Self, SpatialError> {
        let depth = match parent {
            Some(parent) if parent.depth == MAX_NODE_DEPTH => {
                return Err(SpatialError::InvalidArgument(format!(
                    "parent node is already at maximum depth {}",
                    MAX_NODE_DEPTH
                )));
            }
            Some(parent) => parent.depth + 1,
            None => 0,
        };
        Ok(Self {
            bounds: Bounds::new(center, size)?,
            depth,
            items: Vec::new(),
            children: None,
            viz_handle: None,
        })
    }

    fn child(bounds: Bounds<D>, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            items: Vec::new(),
            children: None,
            viz_handle: None,
        }
    }

    /// Region covered by this node
    pub fn bounds(&self) -> &Bounds<D> {
        &self.bounds
    }

    /// Subdivision level, 0 for the root
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Items resident at this node
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Child nodes, present only after a successful [`Node::divide`]
    pub fn children(&self) -> Option<&[Node<T, D>]> {
        self.children.as_deref()
    }

    /// Whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Subdivide this node into `2^D` children.
    ///
    /// Returns `false` without any change when children already exist or
    /// when another level would exceed [`MAX_NODE_DEPTH`]. Children are
    /// created in one batch and never partially replaced.
    pub fn divide(&mut self) -> bool {
        if self.children.is_some() || self.depth + 1 > MAX_NODE_DEPTH {
            return false;
        }

        let mut children = Vec::with_capacity(child_count(D));
        for index in 0..child_count(D) {
            children.push(Self::child(self.bounds.octant(index), self.depth + 1));
        }
        log::trace!(
            "divided depth-{} node into {} children",
            self.depth,
            children.len()
        );
        self.children = Some(children.into_boxed_slice());
        true
    }

    /// Place `item` at the deepest node able to hold it.
    ///
    /// Returns the node the item now resides in, or `None` when nothing
    /// was inserted: either the item is already resident on the descent
    /// path, or this node's region rejected it outright. A failed insert
    /// leaves the tree exactly as it was.
    pub fn insert(&mut self, item: T) -> Option<&mut Self> {
        if self.resident_index(item.id()).is_some() {
            return None;
        }
        if self.rejects_insert(&item) {
            return None;
        }

        // A child whose own checks reject the item leaves it resident at
        // this level instead.
        let target = self.obtain_child_for(&item).filter(|&index| {
            self.children
                .as_ref()
                .map_or(false, |children| !children[index].rejects_insert(&item))
        });
        match target {
            Some(index) => self.children.as_mut()?[index].insert(item),
            None => {
                self.items.push(item);
                Some(self)
            }
        }
    }

    /// Locate the node holding `item`, traversing existing children only.
    ///
    /// Returns `None` when the item is not resident anywhere in this
    /// subtree. Never creates children.
    pub fn find(&self, item: &T) -> Option<&Self> {
        if self.resident_index(item.id()).is_some() {
            return Some(self);
        }
        if self.rejects_lookup(item) {
            return None;
        }
        let index = self.existing_child_for(item)?;
        self.children.as_ref()?[index].find(item)
    }

    /// Locate the node holding `item`, or the deepest region that would
    /// receive it, dividing along the way exactly as [`Node::insert`]
    /// would.
    ///
    /// Returns `None` only when this node's region rejects the item.
    pub fn find_candidate(&mut self, item: &T) -> Option<&mut Self> {
        if self.resident_index(item.id()).is_some() {
            return Some(self);
        }
        if self.rejects_lookup(item) {
            return None;
        }

        let target = self.obtain_child_for(item).filter(|&index| {
            self.children
                .as_ref()
                .map_or(false, |children| !children[index].rejects_lookup(item))
        });
        match target {
            Some(index) => self.children.as_mut()?[index].find_candidate(item),
            None => Some(self),
        }
    }

    /// Remove `item` from the subtree.
    ///
    /// Follows the strict lookup path down to the owning node. Returns
    /// whether anything was removed; absence is a no-op.
    pub fn remove(&mut self, item: &T) -> bool {
        if let Some(index) = self.resident_index(item.id()) {
            self.items.remove(index);
            return true;
        }
        if self.rejects_lookup(item) {
            return false;
        }
        match self.existing_child_for(item) {
            Some(index) => match self.children.as_mut() {
                Some(children) => children[index].remove(item),
                None => false,
            },
            None => false,
        }
    }

    /// Total items stored in this node and all descendants.
    pub fn item_count(&self) -> usize {
        let mut count = self.items.len();
        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                count += child.item_count();
            }
        }
        count
    }

    /// Collect every item that may occupy the box centered at `position`
    /// with full extent `size`.
    ///
    /// Subtrees whose bounds miss the box are pruned; the items of every
    /// overlapping node are reported without a per-item test, so callers
    /// get the conservative candidate set for narrow-phase checks.
    pub fn query_region<'a>(
        &'a self,
        position: VecN<D>,
        size: VecN<D>,
        results: &mut Vec<&'a T>,
    ) {
        if !self.bounds.overlaps(position, size) {
            return;
        }
        results.extend(self.items.iter());
        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.query_region(position, size, results);
            }
        }
    }

    /// Tear down this subtree: children first, then this node's own state.
    ///
    /// Releases any visualization box through `host` and clears children
    /// and items. The node must not be used again afterwards; a second
    /// destroy on the same node is outside the contract.
    pub fn destroy(&mut self, host: &mut dyn RenderHost<D>) {
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                child.destroy(host);
            }
        }
        if let Some(handle) = self.viz_handle.take() {
            host.destroy_box(handle);
        }
        log::trace!("destroyed depth-{} node", self.depth);
        self.children = None;
        self.items.clear();
    }

    fn resident_index(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|resident| resident.id() == id)
    }

    /// Node-level acceptance test for insertion: the item's box must
    /// overlap this region, and the region must be at least as large as
    /// the extent on the first two axes. Only those two axes take part in
    /// the size gate, whatever the dimension count.
    fn rejects_insert(&self, item: &T) -> bool {
        let size = self.bounds.size();
        let extent = item.extent();
        !self.bounds.overlaps(item.position(), extent)
            || size[0] < extent[0]
            || size[1] < extent[1]
    }

    /// Node-level rejection test for lookups: overlap failure, or a region
    /// smaller in magnitude than the item's extent.
    fn rejects_lookup(&self, item: &T) -> bool {
        !self.bounds.overlaps(item.position(), item.extent())
            || self.bounds.size().magnitude() < item.extent().magnitude()
    }

    /// Pick the child region for the item's position, dividing on demand.
    ///
    /// `None` when any child would be too small for the item, or when the
    /// depth cap blocks division.
    fn obtain_child_for(&mut self, item: &T) -> Option<usize> {
        let child_half_size = self.bounds.size() * 0.25;
        if child_half_size.magnitude() <= item.extent().magnitude() {
            return None;
        }
        self.divide(); // no-op when already divided or at the depth cap
        self.children.as_ref()?;
        Some(octant_index(self.bounds.center(), item.position()))
    }

    /// Like [`Node::obtain_child_for`], but never divides.
    fn existing_child_for(&self, item: &T) -> Option<usize> {
        let child_half_size = self.bounds.size() * 0.25;
        if child_half_size.magnitude() <= item.extent().magnitude() {
            return None;
        }
        self.children.as_ref()?;
        Some(octant_index(self.bounds.center(), item.position()))
    }
}

/// Debug visualization entry points; see [`crate::debug`] for the boundary
/// types. Purely observational, never required for index correctness.
impl<T: SpatialItem<D>, const D: usize> Node<T, D> {
    /// Lazily materialize this node's region as a colored box in `host`.
    ///
    /// The handle is cached; repeat calls return it without touching the
    /// host again.
    pub fn visualize(&mut self, color: Vec4, host: &mut dyn RenderHost<D>) -> BoxHandle {
        if let Some(handle) = self.viz_handle {
            return handle;
        }
        let descriptor = BoxDescriptor {
            center: self.bounds.center(),
            size: self.bounds.size(),
            color,
            label: format!("partition depth {}", self.depth),
        };
        let handle = host.create_box(&descriptor);
        self.viz_handle = Some(handle);
        handle
    }

    /// Visualize this node with `color`, then every child subtree with one
    /// freshly chosen color per sibling group.
    pub fn visualize_tree(&mut self, color: Vec4, host: &mut dyn RenderHost<D>) {
        self.visualize(color, host);
        if let Some(children) = self.children.as_mut() {
            let group_color = sibling_group_color();
            for child in children.iter_mut() {
                child.visualize_tree(group_color, host);
            }
        }
    }
}

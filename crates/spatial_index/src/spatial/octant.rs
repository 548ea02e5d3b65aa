//! Octant and quadrant indexing
//!
//! Maps a position, relative to a region's center, to one of the region's
//! `2^D` sub-regions. One bit per axis, most significant bit first axis;
//! the same encoding drives quadtrees (D = 2) and octrees (D = 3).

use crate::foundation::math::VecN;

/// Number of children a divided node owns: `2^dim`.
pub const fn child_count(dim: usize) -> usize {
    1 << dim
}

/// Compute the child index for `position` relative to `center`.
///
/// Per axis `k`, bit `k` (counted from the most significant of the `D`
/// used bits) is 1 when `position[k] > center[k]`. A position exactly on
/// the center plane of an axis selects the lower side.
pub fn octant_index<const D: usize>(center: VecN<D>, position: VecN<D>) -> usize {
    let mut index = 0;
    for axis in 0..D {
        if position[axis] > center[axis] {
            index |= 1 << (D - 1 - axis);
        }
    }
    index
}

/// Per-axis sign vector for child `index`, using the same bit layout as
/// [`octant_index`]: component `k` is `+1.0` when bit `k` is set, `-1.0`
/// otherwise.
pub fn octant_offset<const D: usize>(index: usize) -> VecN<D> {
    let mut offset = VecN::<D>::zeros();
    for axis in 0..D {
        offset[axis] = if index & (1 << (D - 1 - axis)) != 0 {
            1.0
        } else {
            -1.0
        };
    }
    offset
}

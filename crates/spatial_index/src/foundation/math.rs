//! Math utilities and types
//!
//! Provides the vector types used by the spatial partitioning structures.
//! The tree core is generic over the dimension count, so most code works
//! with [`VecN`]; the fixed aliases cover the supported 2D and 3D cases and
//! the RGBA colors of the debug visualization.

pub use nalgebra::SVector;

/// Dimension-generic vector type; `D` is 2 for quadtrees, 3 for octrees
pub type VecN<const D: usize> = SVector<f32, D>;

/// 2D vector type
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector type
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector type, used for RGBA colors
pub type Vec4 = nalgebra::Vector4<f32>;

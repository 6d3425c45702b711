//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;

#[doc(hidden)]
pub mod aabb;
mod aabb_circle;
mod aabb_polygon;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb::local_point_cloud_aabb;
    pub use super::aabb_circle::circle_aabb;
}

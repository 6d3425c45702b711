//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::normalize_or_zero::normalize_or_zero;
pub use self::point_cloud_axis_range::point_cloud_axis_range;

mod ccw_face_normal;
mod normalize_or_zero;
mod point_cloud_axis_range;

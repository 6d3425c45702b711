use crate::query::sat;
use crate::shape::Shape;

/// Tests whether two shapes are intersecting.
///
/// Shapes that only touch are intersecting if one of them is a polygon and the other a
/// circle, and are not intersecting otherwise.
pub fn intersection_test(shape1: &Shape, shape2: &Shape) -> bool {
    sat::sat_shape_shape(shape1, shape2, None)
}

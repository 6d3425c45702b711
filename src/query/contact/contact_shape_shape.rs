use crate::query::sat;
use crate::query::Manifold;
use crate::shape::Shape;

/// Computes the minimum translation vector between two shapes.
///
/// Returns `None` if the shapes do not overlap. The manifold normal points from `shape1`
/// toward `shape2`.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use sat2d::math::{Point, Vector};
/// use sat2d::query;
/// use sat2d::shape::{Circle, Shape};
///
/// let circle1 = Shape::from(Circle::new(Point::new(0.0, 0.0), 1.0));
/// let circle2 = Shape::from(Circle::new(Point::new(1.0, 0.0), 1.0));
///
/// let manifold = query::contact(&circle1, &circle2).unwrap();
/// assert_eq!(manifold.overlap, 1.0);
/// assert_eq!(manifold.normal, Vector::x());
/// # }
/// ```
pub fn contact(shape1: &Shape, shape2: &Shape) -> Option<Manifold> {
    sat::contact_shape_shape(shape1, shape2)
}

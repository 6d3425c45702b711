use crate::query::sat::{
    contact_circle_circle, contact_circle_polygon, contact_polygon_circle,
    contact_polygon_polygon,
};
use crate::query::Manifold;
use crate::shape::Shape;

/// Computes the minimum translation vector between two shapes of any supported type.
pub fn contact_shape_shape(shape1: &Shape, shape2: &Shape) -> Option<Manifold> {
    match (shape1, shape2) {
        (Shape::Polygon(p1), Shape::Polygon(p2)) => contact_polygon_polygon(p1, p2),
        (Shape::Polygon(p1), Shape::Circle(c2)) => contact_polygon_circle(p1, c2),
        (Shape::Circle(c1), Shape::Polygon(p2)) => contact_circle_polygon(c1, p2),
        (Shape::Circle(c1), Shape::Circle(c2)) => contact_circle_circle(c1, c2),
    }
}

/// Tests if two shapes of any supported type overlap.
///
/// If `manifold` is provided, it is filled with the minimum translation vector when the
/// shapes overlap and reset to the empty state otherwise.
#[inline]
pub fn sat_shape_shape(shape1: &Shape, shape2: &Shape, manifold: Option<&mut Manifold>) -> bool {
    Manifold::write_result(contact_shape_shape(shape1, shape2), manifold)
}

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::{Circle, Polygon};

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A circle shape.
    Circle,
    /// A convex polygon shape.
    Polygon,
}

/// Any shape supported by the collision queries of this crate.
///
/// This is what the dispatching queries [`crate::query::contact`] and
/// [`crate::query::intersection_test`] operate on.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A circle shape.
    Circle(Circle),
    /// A convex polygon shape.
    Polygon(Polygon),
}

impl Shape {
    /// The type of this shape.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Polygon(_) => ShapeType::Polygon,
        }
    }

    /// Converts this shape into a circle, if it is one.
    #[inline]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            Shape::Polygon(_) => None,
        }
    }

    /// Converts this shape into a polygon, if it is one.
    #[inline]
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            Shape::Circle(_) => None,
        }
    }

    /// Computes the AABB of this shape.
    pub fn aabb(&self) -> Aabb {
        match self {
            Shape::Circle(c) => c.aabb(),
            Shape::Polygon(p) => p.aabb(),
        }
    }

    /// Computes a copy of this shape moved by the rigid motion `pos`.
    pub fn transformed(&self, pos: &Isometry<Real>) -> Shape {
        match self {
            Shape::Circle(c) => Shape::Circle(c.transformed(pos)),
            Shape::Polygon(p) => Shape::Polygon(p.transformed(pos)),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

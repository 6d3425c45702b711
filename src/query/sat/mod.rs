//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which the
//! projections of the two shapes do not overlap. For two convex polygons, it is sufficient to
//! test the face normals of both polygons. For a polygon and a circle, the candidate axes are
//! the face normals of the polygon and the directions from its vertices to the circle center.
//!
//! If every candidate axis shows an overlap, the shapes collide and the axis with the smallest
//! overlap gives the minimum translation vector (MTV), recorded into a [`Manifold`].
//!
//! # Conventions
//!
//! * Every shape is expressed in the same frame: there is no relative position argument.
//! * Polygons are counter-clockwise, so their face normals point outward.
//! * The [`Manifold`] normal points from the first shape toward the second shape.
//! * The tests stop at the first separating axis found.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "f32")] {
//! use sat2d::math::{Point, Vector};
//! use sat2d::query::{sat, Manifold};
//! use sat2d::shape::Polygon;
//!
//! let square1 = Polygon::from_corner_and_size(Point::new(0.0, 0.0), Vector::new(1.0, 1.0));
//! let square2 = Polygon::from_corner_and_size(Point::new(0.5, 0.0), Vector::new(1.0, 1.0));
//! let mut manifold = Manifold::new();
//!
//! assert!(sat::sat_polygon_polygon(&square1, &square2, Some(&mut manifold)));
//! assert_eq!(manifold.overlap, 0.5);
//! assert_eq!(manifold.normal, Vector::x());
//!
//! let far = Polygon::from_corner_and_size(Point::new(10.0, 0.0), Vector::new(1.0, 1.0));
//! assert!(!sat::sat_polygon_polygon(&square1, &far, None));
//! # }
//! ```
//!
//! [`Manifold`]: crate::query::Manifold

pub use self::sat_circle_circle::*;
pub use self::sat_polygon_axis::*;
pub use self::sat_polygon_circle::*;
pub use self::sat_polygon_polygon::*;
pub use self::sat_shape_shape::*;
pub use self::voronoi_region::*;

mod sat_circle_circle;
mod sat_polygon_axis;
mod sat_polygon_circle;
mod sat_polygon_polygon;
mod sat_shape_shape;
mod voronoi_region;

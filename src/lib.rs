/*!
sat2d
========

**sat2d** is a 2-dimensional narrow-phase collision detection library
written with the rust programming language. It implements the Separating
Axis Theorem for convex polygons and circles and reports the minimum
translation vector of colliding pairs.

```
# #[cfg(feature = "f32")] {
use sat2d::math::Point;
use sat2d::query::{sat, Manifold};
use sat2d::shape::{Circle, Polygon};

let square = Polygon::from_corner_and_size(Point::origin(), [1.0, 1.0].into());
let circle = Circle::new(Point::new(1.25, 0.5), 0.5);
let mut manifold = Manifold::new();

assert!(sat::sat_polygon_circle(&square, &circle, Some(&mut manifold)));
assert!((manifold.overlap - 0.25).abs() < 1.0e-6);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry2, Point2, Rotation2, Translation2, UnitComplex, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The maximum number of vertices of a [`Polygon`](crate::shape::Polygon).
    pub const MAX_POLY_VERTS: usize = 8;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitComplex<N>;

    /// The translation type.
    pub use Translation2 as Translation;
}

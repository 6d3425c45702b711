use crate::math::{Isometry, Point, Real, Vector};

/// A circle shape.
///
/// The center is part of the shape: every query of this crate works on shapes
/// expressed in the same (world) frame.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Circle {
    /// The center of the circle.
    pub center: Point<Real>,
    /// The radius of the circle.
    ///
    /// Should be non-negative. A negative radius is not rejected but produces
    /// meaningless query results.
    pub radius: Real,
}

impl Circle {
    /// Creates a new circle with the given center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Circle {
        Circle { center, radius }
    }

    /// Computes a copy of this circle with its center moved by the rigid motion `pos`.
    #[inline]
    pub fn transformed(&self, pos: &Isometry<Real>) -> Circle {
        Circle::new(pos * self.center, self.radius)
    }

    /// Computes a copy of this circle with its center translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> Circle {
        Circle::new(self.center + shift, self.radius)
    }
}

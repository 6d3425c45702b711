use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::Circle;

/// Computes the Axis-Aligned Bounding Box of a circle.
#[inline]
pub fn circle_aabb(center: &Point<Real>, radius: Real) -> Aabb {
    Aabb::new(
        *center + Vector::repeat(-radius),
        *center + Vector::repeat(radius),
    )
}

impl Circle {
    /// Computes the AABB of this circle.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        circle_aabb(&self.center, self.radius)
    }
}

#[cfg(test)]
mod test {
    use crate::math::Point;
    use crate::shape::Circle;

    #[test]
    fn circle_aabb() {
        let aabb = Circle::new(Point::new(1.0, -2.0), 0.5).aabb();
        assert_eq!(aabb.mins, Point::new(0.5, -2.5));
        assert_eq!(aabb.maxs, Point::new(1.5, -1.5));
    }
}

//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box.
///
/// The box is described by its two extremal corners: `mins` holds the smallest
/// coordinates along each axis and `maxs` the largest ones. It is used to build
/// box-shaped [`Polygon`](crate::shape::Polygon)s and as a cheap conservative
/// bound of every shape of this crate.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its minimum corner and its size along each axis.
    #[inline]
    pub fn from_corner_and_size(corner: Point<Real>, size: Vector<Real>) -> Self {
        Self::new(corner, corner + size)
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB bounding the given set of points.
    ///
    /// Returns `None` if the set is empty.
    pub fn from_points<'a, I>(pts: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        local_point_cloud_aabb(pts)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this AABB, i.e., its size along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// Does this AABB intersect `other`?
    ///
    /// Touching boxes are considered intersecting.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Does this AABB fully contain `other`?
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    /// Does this AABB contain the point `point`?
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Enlarges this AABB by `amount` along each direction.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }
}

/// Computes the AABB of a set of points.
///
/// Returns `None` if the set is empty.
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();
    let p0 = it.next()?;
    let mut aabb = Aabb::new(*p0, *p0);

    for pt in it {
        aabb.take_point(*pt);
    }

    Some(aabb)
}

#[cfg(test)]
mod test {
    use super::Aabb;
    use crate::math::{Point, Vector};

    #[test]
    fn aabb_from_corner_and_size() {
        let aabb = Aabb::from_corner_and_size(Point::new(1.0, 2.0), Vector::new(3.0, 4.0));
        assert_eq!(aabb.maxs, Point::new(4.0, 6.0));
        assert_eq!(aabb.center(), Point::new(2.5, 4.0));
        assert_eq!(aabb.half_extents(), Vector::new(1.5, 2.0));
    }

    #[test]
    fn aabb_intersection_is_inclusive() {
        let a = Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = Aabb::new(Point::new(1.0, 0.0), Point::new(2.0, 1.0));
        let c = Aabb::new(Point::new(1.5, 0.0), Point::new(2.0, 1.0));

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.merged(&c).contains(&b));
    }

    #[test]
    fn aabb_of_points() {
        let pts = [
            Point::new(1.0, -1.0),
            Point::new(-2.0, 0.5),
            Point::new(0.0, 3.0),
        ];
        let aabb = Aabb::from_points(&pts).unwrap();

        assert_eq!(aabb.mins, Point::new(-2.0, -1.0));
        assert_eq!(aabb.maxs, Point::new(1.0, 3.0));
        assert!(aabb.contains_local_point(&Point::new(0.0, 0.0)));
        assert!(!aabb.contains_local_point(&Point::new(0.0, 3.5)));
        assert!(Aabb::from_points(core::iter::empty()).is_none());
    }

    #[test]
    fn aabb_from_half_extents() {
        let aabb = Aabb::from_half_extents(Point::new(1.0, -1.0), Vector::new(0.5, 2.0));

        assert_eq!(aabb.mins, Point::new(0.5, -3.0));
        assert_eq!(aabb.maxs, Point::new(1.5, 1.0));
        assert_eq!(aabb.center(), Point::new(1.0, -1.0));
    }

    #[test]
    fn aabb_loosened() {
        let aabb = Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 2.0)).loosened(0.5);

        assert_eq!(aabb.mins, Point::new(-0.5, -0.5));
        assert_eq!(aabb.maxs, Point::new(1.5, 2.5));
    }

    #[test]
    #[should_panic]
    fn aabb_loosened_by_a_negative_amount() {
        let _ = Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).loosened(-0.1);
    }
}

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use na::Unit;

/// Computes the direction pointing toward the right-hand-side of an oriented segment.
///
/// For the edges of a counter-clockwise polygon this is the outward face normal.
/// Returns `None` if the segment is degenerate.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 2]) -> Option<Unit<Vector<Real>>> {
    let ab = *pts[1] - *pts[0];
    let res = Vector::new(ab[1], -ab[0]);

    Unit::try_new(res, DEFAULT_EPSILON)
}

#[cfg(test)]
mod test {
    use super::ccw_face_normal;
    use crate::math::{Point, Vector};

    #[test]
    fn ccw_edges_have_outward_normals() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 0.0);
        let c = Point::new(2.0, 2.0);

        assert_eq!(*ccw_face_normal([&a, &b]).unwrap(), Vector::new(0.0, -1.0));
        assert_eq!(*ccw_face_normal([&b, &c]).unwrap(), Vector::new(1.0, 0.0));
    }

    #[test]
    fn degenerate_edge_has_no_normal() {
        let a = Point::new(1.0, 1.0);
        assert!(ccw_face_normal([&a, &a]).is_none());
    }
}

use crate::math::{Point, Real, Vector};

/// Projects a cloud of points on `axis` and returns the `(min, max)` of the projections.
///
/// The axis does not need to be normalized, the projections are then scaled by its norm.
/// The cloud must not be empty.
#[inline]
pub fn point_cloud_axis_range(axis: &Vector<Real>, points: &[Point<Real>]) -> (Real, Real) {
    let first = points[0].coords.dot(axis);
    let mut min = first;
    let mut max = first;

    for p in &points[1..] {
        let dot = p.coords.dot(axis);

        if dot < min {
            min = dot;
        }

        if dot > max {
            max = dot;
        }
    }

    (min, max)
}

#[cfg(test)]
mod test {
    use super::point_cloud_axis_range;
    use crate::math::{Point, Vector};

    #[test]
    fn range_of_a_triangle() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(-1.0, 2.0),
        ];

        assert_eq!(point_cloud_axis_range(&Vector::x(), &pts), (-1.0, 3.0));
        assert_eq!(point_cloud_axis_range(&Vector::y(), &pts), (0.0, 2.0));
    }
}

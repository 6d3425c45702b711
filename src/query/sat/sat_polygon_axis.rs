use crate::math::{Real, Vector};
use crate::shape::Polygon;
use crate::utils;

/// Projects the vertices of `polygon` on `axis` and returns the `(min, max)` of the projections.
#[inline]
pub fn polygon_axis_range(polygon: &Polygon, axis: &Vector<Real>) -> (Real, Real) {
    utils::point_cloud_axis_range(axis, polygon.vertices())
}

/// Computes the signed overlap of the projections of two polygons on `axis`.
///
/// Returns exactly `0.0` if the projections are disjoint: `axis` is then a separating axis
/// and the polygons cannot collide. Otherwise, let `[min1, max1]` and `[min2, max2]` be the
/// projection ranges of `polygon1` and `polygon2`. Pushing `polygon2` along `axis` by
/// `max1 - min2` or pushing it along `-axis` by `max2 - min1` separates them. The smallest of
/// the two is returned, positive in the first case and negative in the second case (which is
/// also chosen on ties).
pub fn polygon_polygon_axis_overlap(
    polygon1: &Polygon,
    polygon2: &Polygon,
    axis: &Vector<Real>,
) -> Real {
    let (min1, max1) = polygon_axis_range(polygon1, axis);
    let (min2, max2) = polygon_axis_range(polygon2, axis);

    if max1 < min2 || max2 < min1 {
        return 0.0;
    }

    let overlap1 = max1 - min2;
    let overlap2 = max2 - min1;

    if overlap2 > overlap1 {
        overlap1
    } else {
        -overlap2
    }
}

#[cfg(test)]
mod test {
    use super::{polygon_axis_range, polygon_polygon_axis_overlap};
    use crate::math::{Point, Real, Vector};
    use crate::shape::Polygon;

    fn square(x: Real, y: Real) -> Polygon {
        Polygon::from_corner_and_size(Point::new(x, y), Vector::new(1.0, 1.0))
    }

    #[test]
    fn axis_range_of_a_square() {
        let poly = square(2.0, 3.0);
        assert_eq!(polygon_axis_range(&poly, &Vector::x()), (2.0, 3.0));
        assert_eq!(polygon_axis_range(&poly, &-Vector::y()), (-4.0, -3.0));
    }

    #[test]
    fn disjoint_ranges_have_zero_overlap() {
        let a = square(0.0, 0.0);
        let b = square(10.0, 0.0);
        assert_eq!(polygon_polygon_axis_overlap(&a, &b, &Vector::x()), 0.0);
        assert_eq!(polygon_polygon_axis_overlap(&b, &a, &Vector::x()), 0.0);
    }

    #[test]
    fn overlap_sign_follows_the_push_direction() {
        let a = square(0.0, 0.0);
        let b = square(0.75, 0.0);

        // `b` is on the positive side of `a`.
        assert_eq!(polygon_polygon_axis_overlap(&a, &b, &Vector::x()), 0.25);
        // `a` is on the negative side of `b`.
        assert_eq!(polygon_polygon_axis_overlap(&b, &a, &Vector::x()), -0.25);
        // Same ranges: ties are negative.
        assert_eq!(polygon_polygon_axis_overlap(&a, &b, &Vector::y()), -1.0);
    }

    #[test]
    fn touching_ranges_have_zero_magnitude_overlap() {
        let a = square(0.0, 0.0);
        let b = square(1.0, 0.0);
        // The ranges [0, 1] and [1, 2] intersect at one point.
        assert_eq!(polygon_polygon_axis_overlap(&a, &b, &Vector::x()), 0.0);
    }
}

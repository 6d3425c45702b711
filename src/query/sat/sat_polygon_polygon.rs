use crate::query::sat::polygon_polygon_axis_overlap;
use crate::query::Manifold;
use crate::shape::Polygon;

/// Computes the minimum translation vector between two convex polygons.
///
/// The candidate separating axes are the face normals of both polygons. Returns `None` as
/// soon as one of them separates the polygons (polygons that only touch are separated).
/// Otherwise, the returned manifold holds the axis of smallest overlap, oriented from
/// `polygon1` toward `polygon2`.
///
/// Each axis is recorded as the normal that was tested. When both polygons share the same
/// set of normals (e.g. two axis-aligned boxes), this gives the same result as recording the
/// normals of `polygon2` only.
pub fn contact_polygon_polygon(polygon1: &Polygon, polygon2: &Polygon) -> Option<Manifold> {
    let mut manifold = Manifold::new();

    for normal1 in polygon1.normals() {
        let overlap = polygon_polygon_axis_overlap(polygon1, polygon2, normal1);

        if overlap == 0.0 {
            return None;
        }

        manifold.update(normal1, overlap);
    }

    for normal2 in polygon2.normals() {
        let overlap = polygon_polygon_axis_overlap(polygon2, polygon1, normal2);

        if overlap == 0.0 {
            return None;
        }

        // The overlap is signed relative to `polygon2`, the manifold is relative to `polygon1`.
        manifold.update(normal2, -overlap);
    }

    Some(manifold)
}

/// Tests if two convex polygons overlap.
///
/// If `manifold` is provided, it is filled with the minimum translation vector when the
/// polygons overlap (see [`contact_polygon_polygon`]) and reset to the empty state otherwise.
#[inline]
pub fn sat_polygon_polygon(
    polygon1: &Polygon,
    polygon2: &Polygon,
    manifold: Option<&mut Manifold>,
) -> bool {
    Manifold::write_result(contact_polygon_polygon(polygon1, polygon2), manifold)
}

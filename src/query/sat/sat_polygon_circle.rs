use crate::math::{Real, Vector};
use crate::query::sat::{voronoi_region, VoronoiRegion};
use crate::query::Manifold;
use crate::shape::{Circle, Polygon};
use crate::utils;

/// Computes the minimum translation vector between a convex polygon and a circle.
///
/// For each edge, the Voronoi regions of the edge and of its neighbors determine whether the
/// feature of the polygon closest to the circle center is a vertex or the edge itself. The
/// candidate axis is then the direction from that vertex to the center, or the face normal.
///
/// Returns `None` as soon as one candidate axis separates the shapes. A circle tangent to the
/// polygon is considered colliding, with a zero overlap. The returned manifold is oriented
/// from the polygon toward the circle.
pub fn contact_polygon_circle(polygon: &Polygon, circle: &Circle) -> Option<Manifold> {
    let radius = circle.radius;
    let radius2 = radius * radius;
    let vertices = polygon.vertices();
    let edges = polygon.edges();
    let normals = polygon.normals();
    let mut manifold = Manifold::new();

    for i in 0..polygon.vertex_count() {
        let point = circle.center - vertices[i];

        // Position of the center relative to its closest vertex, if the closest feature of
        // the polygon is a vertex.
        let vertex_dir = match voronoi_region(&point, &edges[i]) {
            VoronoiRegion::Left => {
                let prev = polygon.prev_id(i);
                let prev_point = circle.center - vertices[prev];
                (voronoi_region(&prev_point, &edges[prev]) == VoronoiRegion::Right)
                    .then_some(point)
            }
            VoronoiRegion::Right => {
                let next = polygon.next_id(i);
                let next_point = circle.center - vertices[next];
                (voronoi_region(&next_point, &edges[next]) == VoronoiRegion::Left)
                    .then_some(next_point)
            }
            VoronoiRegion::Middle => None,
        };

        let (normal, overlap): (Vector<Real>, Real) = match vertex_dir {
            Some(dir) => {
                let dist2 = dir.norm_squared();

                if dist2 > radius2 {
                    return None;
                }

                (utils::normalize_or_zero(&dir), radius - dist2.sqrt())
            }
            None => {
                let normal = normals[i];
                let dist = normal.dot(&point);

                if dist > 0.0 && dist.abs() > radius {
                    return None;
                }

                (normal, radius - dist)
            }
        };

        manifold.update(&normal, overlap);
    }

    Some(manifold)
}

/// Computes the minimum translation vector between a circle and a convex polygon.
///
/// This is [`contact_polygon_circle`] with the resulting manifold flipped so that it is
/// oriented from the circle toward the polygon.
#[inline]
pub fn contact_circle_polygon(circle: &Circle, polygon: &Polygon) -> Option<Manifold> {
    contact_polygon_circle(polygon, circle).map(Manifold::flipped)
}

/// Tests if a convex polygon and a circle overlap.
///
/// If `manifold` is provided, it is filled with the minimum translation vector when the
/// shapes overlap (see [`contact_polygon_circle`]) and reset to the empty state otherwise.
#[inline]
pub fn sat_polygon_circle(
    polygon: &Polygon,
    circle: &Circle,
    manifold: Option<&mut Manifold>,
) -> bool {
    Manifold::write_result(contact_polygon_circle(polygon, circle), manifold)
}

/// Tests if a circle and a convex polygon overlap.
///
/// If `manifold` is provided, it is filled with the minimum translation vector when the
/// shapes overlap (see [`contact_circle_polygon`]) and reset to the empty state otherwise.
#[inline]
pub fn sat_circle_polygon(
    circle: &Circle,
    polygon: &Polygon,
    manifold: Option<&mut Manifold>,
) -> bool {
    Manifold::write_result(contact_circle_polygon(circle, polygon), manifold)
}

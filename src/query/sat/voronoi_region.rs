use crate::math::{Real, Vector};

/// Location of a point relative to the Voronoi regions of a segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VoronoiRegion {
    /// The point projects before the start of the segment: its closest feature is the start vertex.
    Left,
    /// The point projects past the end of the segment: its closest feature is the end vertex.
    Right,
    /// The point projects inside of the segment: its closest feature is the segment itself.
    Middle,
}

/// Classifies `point` with respect to the Voronoi regions of a segment.
///
/// `point` is expressed relative to the start vertex of the segment and `edge` is the vector
/// from its start vertex to its end vertex. The region boundaries belong to
/// [`VoronoiRegion::Middle`].
#[inline]
pub fn voronoi_region(point: &Vector<Real>, edge: &Vector<Real>) -> VoronoiRegion {
    let len2 = edge.norm_squared();
    let dot = point.dot(edge);

    if dot < 0.0 {
        VoronoiRegion::Left
    } else if dot > len2 {
        VoronoiRegion::Right
    } else {
        VoronoiRegion::Middle
    }
}

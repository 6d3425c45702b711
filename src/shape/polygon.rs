use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector, MAX_POLY_VERTS};
use crate::utils;
use arrayvec::ArrayVec;

/// Indicates that a polygon could not be built from the given vertices.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// A polygon must have at least three vertices.
    #[error("a polygon needs at least 3 vertices, got {count}.")]
    NotEnoughVertices {
        /// The number of vertices that were given.
        count: usize,
    },
    /// A polygon has at most [`MAX_POLY_VERTS`] vertices.
    #[error("a polygon has at most {max} vertices, got {count}.")]
    TooManyVertices {
        /// The number of vertices that were given.
        count: usize,
        /// The maximum number of vertices of a polygon.
        max: usize,
    },
}

/// A 2D convex polygon with at most [`MAX_POLY_VERTS`] vertices.
///
/// The vertices must be arranged counter-clockwise. Neither convexity nor the
/// winding are checked. The edge vectors and the outward unit normals of each
/// edge are computed once at construction and stored inline, so a polygon never
/// allocates.
///
/// Edge `i` goes from vertex `i` to vertex `(i + 1) % n`, and normal `i` is
/// the normal of edge `i`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(try_from = "PolygonVertices", into = "PolygonVertices")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: ArrayVec<Point<Real>, MAX_POLY_VERTS>,
    edges: ArrayVec<Vector<Real>, MAX_POLY_VERTS>,
    normals: ArrayVec<Vector<Real>, MAX_POLY_VERTS>,
}

impl Polygon {
    /// Creates a new polygon from a counter-clockwise sequence of vertices.
    ///
    /// # Panics
    ///
    /// Panics if there are less than 3 or more than [`MAX_POLY_VERTS`] vertices.
    /// Use [`Polygon::try_new`] to handle this case gracefully.
    pub fn new(vertices: &[Point<Real>]) -> Self {
        Self::try_new(vertices).unwrap_or_else(|err| panic!("invalid polygon: {}", err))
    }

    /// Creates a new polygon from a counter-clockwise sequence of vertices.
    ///
    /// Returns an error if there are less than 3 or more than [`MAX_POLY_VERTS`]
    /// vertices. An edge with zero length is not an error but its normal is set to
    /// zero, which makes the polygon unreliable for collision tests.
    pub fn try_new(vertices: &[Point<Real>]) -> Result<Self, PolygonError> {
        let count = vertices.len();

        if count < 3 {
            return Err(PolygonError::NotEnoughVertices { count });
        }

        if count > MAX_POLY_VERTS {
            return Err(PolygonError::TooManyVertices {
                count,
                max: MAX_POLY_VERTS,
            });
        }

        let mut edges = ArrayVec::new();
        let mut normals = ArrayVec::new();

        for i1 in 0..count {
            let i2 = (i1 + 1) % count;
            let (a, b) = (&vertices[i1], &vertices[i2]);
            edges.push(b - a);

            let normal = match utils::ccw_face_normal([a, b]) {
                Some(normal) => normal.into_inner(),
                None => {
                    log::warn!("Degenerate polygon edge {} from {} to {}.", i1, a, b);
                    Vector::zeros()
                }
            };
            normals.push(normal);
        }

        Ok(Polygon {
            vertices: vertices.iter().copied().collect(),
            edges,
            normals,
        })
    }

    /// Creates the polygon of the axis-aligned box with the minimum corner `corner`
    /// and the extents `size`.
    ///
    /// The four vertices are `corner`, `corner + (w, 0)`, `corner + (w, h)` and
    /// `corner + (0, h)`, in this (counter-clockwise) order.
    pub fn from_corner_and_size(corner: Point<Real>, size: Vector<Real>) -> Self {
        let (w, h) = (size.x, size.y);
        Self::new(&[
            corner,
            corner + Vector::new(w, 0.0),
            corner + Vector::new(w, h),
            corner + Vector::new(0.0, h),
        ])
    }

    /// Creates the polygon covering exactly the given axis-aligned box.
    #[inline]
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::from_corner_and_size(aabb.mins, aabb.extents())
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The edge vectors of this polygon.
    #[inline]
    pub fn edges(&self) -> &[Vector<Real>] {
        &self.edges
    }

    /// The outward unit normals of the edges of this polygon.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The number of vertices (and edges) of this polygon.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Index of the vertex following the vertex `i`.
    #[inline]
    pub fn next_id(&self, i: usize) -> usize {
        (i + 1) % self.vertices.len()
    }

    /// Index of the vertex preceding the vertex `i`.
    #[inline]
    pub fn prev_id(&self, i: usize) -> usize {
        let n = self.vertices.len();
        (i + n - 1) % n
    }

    /// Computes a copy of this polygon moved by the rigid motion `pos`.
    ///
    /// Rigid motions preserve the winding, so edges and normals are rotated instead
    /// of being recomputed.
    pub fn transformed(&self, pos: &Isometry<Real>) -> Self {
        Polygon {
            vertices: self.vertices.iter().map(|pt| pos * pt).collect(),
            edges: self.edges.iter().map(|e| pos * e).collect(),
            normals: self.normals.iter().map(|n| pos * n).collect(),
        }
    }

    /// Computes a copy of this polygon translated by `shift`.
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Polygon {
            vertices: self.vertices.iter().map(|pt| pt + shift).collect(),
            edges: self.edges.clone(),
            normals: self.normals.clone(),
        }
    }
}

/// Serialized form of a [`Polygon`]: only the vertices are stored, the edges and
/// normals are recomputed (and the vertex count checked) on deserialization.
#[cfg(feature = "serde-serialize")]
#[derive(Serialize, Deserialize)]
struct PolygonVertices {
    vertices: Vec<Point<Real>>,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<PolygonVertices> for Polygon {
    type Error = PolygonError;

    fn try_from(data: PolygonVertices) -> Result<Self, PolygonError> {
        Polygon::try_new(&data.vertices)
    }
}

#[cfg(feature = "serde-serialize")]
impl From<Polygon> for PolygonVertices {
    fn from(polygon: Polygon) -> Self {
        PolygonVertices {
            vertices: polygon.vertices.to_vec(),
        }
    }
}

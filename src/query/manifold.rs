use crate::math::{Real, Vector};
use approx::{AbsDiffEq, RelativeEq};

/// The minimum translation vector between two colliding shapes.
///
/// The manifold is the output of the tests of the [`sat`](crate::query::sat) module. It
/// describes the axis along which the two shapes overlap the least:
///
/// * `normal` is the unit axis, oriented from the first shape toward the second one.
/// * `overlap` is the (non-negative) amount of penetration along `normal`.
/// * `vector` is `normal * overlap`: translating the second shape by `vector` (or the first
///   one by `-vector`) separates them.
///
/// A manifold that has not recorded any axis yet is *empty*: its overlap is infinite and its
/// normal and vector are zero. Every test resets the manifold it is given to this state, and
/// leaves it empty when the shapes do not collide.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Manifold {
    /// The collision normal, pointing from the first shape toward the second shape.
    pub normal: Vector<Real>,
    /// The amount of overlap between the two shapes along `normal`.
    pub overlap: Real,
    /// The minimum translation vector, i.e., `normal * overlap`.
    pub vector: Vector<Real>,
}

impl Default for Manifold {
    fn default() -> Self {
        Self::new()
    }
}

impl Manifold {
    /// Creates a new empty manifold.
    #[inline]
    pub fn new() -> Self {
        Manifold {
            normal: Vector::zeros(),
            overlap: Real::INFINITY,
            vector: Vector::zeros(),
        }
    }

    /// Resets this manifold to the empty state.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns `true` if no axis was recorded into this manifold.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.overlap == Real::INFINITY
    }

    /// Records the candidate axis `normal` with the signed `overlap` if it improves on the
    /// axes recorded so far.
    ///
    /// The candidate is kept only if `|overlap|` is strictly smaller than the current overlap.
    /// A negative overlap means the shapes must be pushed apart along `-normal`: the recorded
    /// normal is then flipped. An overlap of exactly zero keeps the previous normal.
    #[inline]
    pub fn update(&mut self, normal: &Vector<Real>, overlap: Real) {
        let abs_overlap = overlap.abs();

        if abs_overlap < self.overlap {
            self.overlap = abs_overlap;

            if overlap < 0.0 {
                self.normal = -normal;
            } else if overlap > 0.0 {
                self.normal = *normal;
            }

            self.vector = self.normal * self.overlap;
        }
    }

    /// Reverses the direction of this manifold, i.e., exchanges the role of the two shapes.
    #[inline]
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.vector = -self.vector;
    }

    /// Returns a new manifold with the direction of `self` reversed.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// Writes this test result into the optional output `out` and returns whether the shapes
    /// collide. An output of a non-colliding pair is left empty.
    #[inline]
    pub(crate) fn write_result(result: Option<Self>, out: Option<&mut Self>) -> bool {
        match (result, out) {
            (Some(manifold), Some(out)) => {
                *out = manifold;
                true
            }
            (None, Some(out)) => {
                out.reset();
                false
            }
            (result, None) => result.is_some(),
        }
    }
}

impl AbsDiffEq for Manifold {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        (self.overlap == other.overlap || self.overlap.abs_diff_eq(&other.overlap, epsilon))
            && self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.vector.abs_diff_eq(&other.vector, epsilon)
    }
}

impl RelativeEq for Manifold {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.overlap.relative_eq(&other.overlap, epsilon, max_relative)
            && self.normal.relative_eq(&other.normal, epsilon, max_relative)
            && self.vector.relative_eq(&other.vector, epsilon, max_relative)
    }
}

use crate::math::{Real, Vector, DEFAULT_EPSILON};

/// Normalizes `v`, or returns the zero vector if its norm is not greater than
/// [`DEFAULT_EPSILON`].
///
/// This is the normalization used by every query of this crate: a zero-length
/// direction never produces NaNs in a manifold.
#[inline]
pub fn normalize_or_zero(v: &Vector<Real>) -> Vector<Real> {
    v.try_normalize(DEFAULT_EPSILON).unwrap_or_else(Vector::zeros)
}

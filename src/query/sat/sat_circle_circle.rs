use crate::query::Manifold;
use crate::shape::Circle;
use crate::utils;
use num::Zero;

/// Computes the minimum translation vector between two circles.
///
/// Returns `None` if the circles are disjoint or tangent. Otherwise the manifold normal points
/// from the center of `circle1` toward the center of `circle2`. It is zero if both centers
/// coincide.
pub fn contact_circle_circle(circle1: &Circle, circle2: &Circle) -> Option<Manifold> {
    let center2_1 = circle2.center - circle1.center;
    let distance_squared = center2_1.norm_squared();
    let sum_radius = circle1.radius + circle2.radius;

    if distance_squared >= sum_radius * sum_radius {
        return None;
    }

    if distance_squared.is_zero() {
        log::debug!("Coincident circle centers: the collision normal is undefined.");
    }

    let mut manifold = Manifold::new();
    manifold.update(
        &utils::normalize_or_zero(&center2_1),
        sum_radius - distance_squared.sqrt(),
    );

    Some(manifold)
}

/// Tests if two circles overlap.
///
/// If `manifold` is provided, it is filled with the minimum translation vector when the
/// circles overlap (see [`contact_circle_circle`]) and reset to the empty state otherwise.
#[inline]
pub fn sat_circle_circle(
    circle1: &Circle,
    circle2: &Circle,
    manifold: Option<&mut Manifold>,
) -> bool {
    Manifold::write_result(contact_circle_circle(circle1, circle2), manifold)
}

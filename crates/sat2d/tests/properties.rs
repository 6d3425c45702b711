//! Randomized checks of the symmetry properties of the SAT tests.

use approx::assert_relative_eq;
use oorandom::Rand32;
use sat2d::math::{Point, Real, Vector};
use sat2d::query::{self, sat};
use sat2d::shape::{Circle, Polygon, Shape};

const NUM_SAMPLES: usize = 2000;
const TAU: Real = core::f64::consts::TAU as Real;

fn random_range(rng: &mut Rand32, min: Real, max: Real) -> Real {
    min + (max - min) * Real::from(rng.rand_float())
}

/// A regular polygon with a random number of vertices, size, position and orientation.
fn random_polygon(rng: &mut Rand32) -> Polygon {
    let nvertices = rng.rand_range(3..9) as usize;
    let radius = random_range(rng, 0.5, 2.0);
    let center = Point::new(random_range(rng, -2.0, 2.0), random_range(rng, -2.0, 2.0));
    let start = random_range(rng, 0.0, TAU);
    let vertices: Vec<_> = (0..nvertices)
        .map(|i| {
            let angle = start + TAU * i as Real / nvertices as Real;
            center + Vector::new(angle.cos(), angle.sin()) * radius
        })
        .collect();

    Polygon::new(&vertices)
}

fn random_circle(rng: &mut Rand32) -> Circle {
    let center = Point::new(random_range(rng, -2.0, 2.0), random_range(rng, -2.0, 2.0));
    Circle::new(center, random_range(rng, 0.25, 1.5))
}

#[test]
fn polygon_polygon_penetration_is_symmetric() {
    let mut rng = Rand32::new(42);
    let mut num_collisions = 0;

    for _ in 0..NUM_SAMPLES {
        let poly1 = random_polygon(&mut rng);
        let poly2 = random_polygon(&mut rng);
        let m12 = sat::contact_polygon_polygon(&poly1, &poly2);
        let m21 = sat::contact_polygon_polygon(&poly2, &poly1);

        assert_eq!(m12.is_some(), m21.is_some());

        if let (Some(m12), Some(m21)) = (m12, m21) {
            num_collisions += 1;
            assert_eq!(m12.overlap, m21.overlap);
            assert_relative_eq!(m12.normal, -m21.normal, epsilon = 1.0e-4);
        }
    }

    assert!(num_collisions > 0);
}

#[test]
fn circle_polygon_is_dual_to_polygon_circle() {
    let mut rng = Rand32::new(1234);

    for _ in 0..NUM_SAMPLES {
        let poly = random_polygon(&mut rng);
        let circle = random_circle(&mut rng);
        let m1 = sat::contact_polygon_circle(&poly, &circle);
        let m2 = sat::contact_circle_polygon(&circle, &poly);

        assert_eq!(m1.is_some(), m2.is_some());

        if let (Some(m1), Some(m2)) = (m1, m2) {
            assert_eq!(m1.overlap, m2.overlap);
            assert_eq!(m1.normal, -m2.normal);
            assert_eq!(m1.vector, -m2.vector);
        }
    }
}

#[test]
fn moving_along_the_translation_vector_separates_the_shapes() {
    let mut rng = Rand32::new(7);
    let margin = 1.0e-3;

    for _ in 0..NUM_SAMPLES {
        let poly1 = random_polygon(&mut rng);
        let poly2 = random_polygon(&mut rng);

        if let Some(m) = sat::contact_polygon_polygon(&poly1, &poly2) {
            assert_relative_eq!(m.normal.norm(), 1.0, epsilon = 1.0e-4);
            let shift = m.vector + m.normal * margin;
            assert!(!sat::sat_polygon_polygon(
                &poly1,
                &poly2.translated(&shift),
                None
            ));
        }

        let circle = random_circle(&mut rng);

        if let Some(m) = sat::contact_polygon_circle(&poly1, &circle) {
            let shift = m.vector + m.normal * margin;
            assert!(!sat::sat_polygon_circle(
                &poly1,
                &circle.translated(&shift),
                None
            ));
        }
    }
}

#[test]
fn circle_circle_matches_center_distance() {
    let mut rng = Rand32::new(99);

    for _ in 0..NUM_SAMPLES {
        let c1 = random_circle(&mut rng);
        let c2 = random_circle(&mut rng);
        let dist = (c2.center - c1.center).norm();
        let sum_radius = c1.radius + c2.radius;
        let collides = query::intersection_test(&Shape::Circle(c1), &Shape::Circle(c2));

        assert_eq!(
            collides,
            (c2.center - c1.center).norm_squared() < sum_radius * sum_radius
        );

        if let Some(m) = sat::contact_circle_circle(&c1, &c2) {
            assert_relative_eq!(m.overlap, sum_radius - dist, epsilon = 1.0e-4);
            assert_relative_eq!(m.normal * dist, c2.center - c1.center, epsilon = 1.0e-4);
        }
    }
}

//! Implementation details of the intersection test.

pub use self::intersection_test_shape_shape::intersection_test;

mod intersection_test_shape_shape;

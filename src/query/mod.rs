//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::contact()`](contact()) to compute the minimum translation vector between two
//!   overlapping shapes.
//! * [`query::intersection_test()`](intersection_test()) to determine if two shapes are
//!   intersecting or not.
//!
//! # Specific cases
//! The functions of the [`sat`] module are the specialized versions of the ones above. They
//! have the form `[operation]_[shape1]_[shape2]()` where `[operation]` is `sat` (boolean test
//! with an optional output [`Manifold`]) or `contact` (returns the [`Manifold`] of colliding
//! shapes), and `[shape1]`, `[shape2]` are `polygon` or `circle`.

pub use self::contact::contact;
pub use self::intersection_test::intersection_test;
pub use self::manifold::Manifold;

mod contact;
mod intersection_test;
mod manifold;
pub mod sat;

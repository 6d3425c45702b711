//! Implementation details of the `contact` function.

pub use self::contact_shape_shape::contact;

mod contact_shape_shape;

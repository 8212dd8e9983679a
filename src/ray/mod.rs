//! This module holds the [`Ray`] and [`Plane`] definitions and the matrix form of the
//! ray/plane intersection, [`intersect`].
mod matrix;
mod ray_impl;

pub use self::matrix::*;
pub use self::ray_impl::*;

//! This module holds the [`Lanes`] trait, the register type every batched kernel computes with.
//!
//! A [`Lanes`] value carries [`Lanes::WIDTH`] scalars which are processed by one instruction.
//! Plain `f32`/`f64` are the width-one case and are always available; the `wide` SIMD vectors
//! are implemented behind the `simd` feature.

#[cfg(feature = "simd")]
mod lanes_simd;

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

use crate::Real;

/// A fixed number of scalar lanes which are added, subtracted, multiplied and divided
/// lane-wise.
pub trait Lanes:
    Copy
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Type of a single lane.
    type Scalar: Real;

    /// Number of lanes.
    const WIDTH: usize;

    /// Broadcasts `value` into every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// Builds the register lane by lane, calling `f` with each lane index in order.
    fn from_fn<F: FnMut(usize) -> Self::Scalar>(f: F) -> Self;

    /// Writes the first `min(out.len(), WIDTH)` lanes into `out`.
    fn store(self, out: &mut [Self::Scalar]);

    /// Returns lane `index`.
    ///
    /// Panics if `index >= WIDTH`.
    fn extract(self, index: usize) -> Self::Scalar;

    /// Loads the first `WIDTH` values of `values`.
    ///
    /// Panics if `values` holds less than `WIDTH` values.
    #[inline(always)]
    fn load(values: &[Self::Scalar]) -> Self {
        let values = &values[..Self::WIDTH];
        Self::from_fn(|i| values[i])
    }

    /// Returns the register `[0, 1, 2, ..., WIDTH - 1]`.
    #[inline(always)]
    fn indexes_from_zero() -> Self {
        Self::from_fn(|i| nalgebra::convert(i as f64))
    }

    /// Copies the lanes into a new vector.
    fn to_vec(self) -> Vec<Self::Scalar> {
        let mut out = vec![Zero::zero(); Self::WIDTH];
        self.store(&mut out);
        out
    }
}

macro_rules! impl_scalar_lanes {
    ($t:ty) => {
        impl Lanes for $t {
            type Scalar = $t;

            const WIDTH: usize = 1;

            #[inline(always)]
            fn splat(value: $t) -> Self {
                value
            }

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> $t>(mut f: F) -> Self {
                f(0)
            }

            #[inline(always)]
            fn store(self, out: &mut [$t]) {
                if let Some(first) = out.first_mut() {
                    *first = self;
                }
            }

            #[inline(always)]
            fn extract(self, index: usize) -> $t {
                assert!(index == 0, "lane {} out of range for width 1", index);
                self
            }
        }
    };
}

impl_scalar_lanes!(f32);
impl_scalar_lanes!(f64);

/// The widest register for `f32` this build supports.
#[cfg(feature = "simd")]
pub type DefaultLanes = wide::f32x8;

/// The widest register for `f32` this build supports.
#[cfg(not(feature = "simd"))]
pub type DefaultLanes = f32;

#[cfg(test)]
mod tests {
    use super::Lanes;

    #[test]
    fn test_scalar_lanes() {
        assert_eq!(<f32 as Lanes>::WIDTH, 1);
        assert_eq!(<f64 as Lanes>::splat(3.5), 3.5);
        assert_eq!(<f32 as Lanes>::indexes_from_zero(), 0.0);
        assert_eq!(<f64 as Lanes>::load(&[2.0, 9.0]), 2.0);
        assert_eq!(Lanes::to_vec(4.0f32), vec![4.0]);
        assert_eq!(Lanes::extract(4.0f64, 0), 4.0);
    }

    #[test]
    #[should_panic]
    fn test_scalar_extract_out_of_range() {
        Lanes::extract(4.0f32, 1);
    }

    #[test]
    fn test_scalar_store_into_empty_slice() {
        let mut out: [f32; 0] = [];
        1.0f32.store(&mut out);
        assert!(out.is_empty());
    }
}

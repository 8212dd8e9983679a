//! This file contains the [`Lanes`] implementations for the SIMD vectors of the `wide` crate,
//! which map onto SSE/AVX registers on x86_64 and NEON registers on aarch64.

use wide::{f32x4, f32x8, f64x2, f64x4};

use super::Lanes;

macro_rules! impl_wide_lanes {
    ($register:ty, $t:ty, $width:literal) => {
        impl Lanes for $register {
            type Scalar = $t;

            const WIDTH: usize = $width;

            #[inline(always)]
            fn splat(value: $t) -> Self {
                <$register>::splat(value)
            }

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> $t>(f: F) -> Self {
                <$register>::new(std::array::from_fn::<$t, $width, F>(f))
            }

            #[inline(always)]
            fn store(self, out: &mut [$t]) {
                let lanes = self.to_array();
                let n = out.len().min($width);
                out[..n].copy_from_slice(&lanes[..n]);
            }

            #[inline(always)]
            fn extract(self, index: usize) -> $t {
                self.to_array()[index]
            }

            #[inline(always)]
            fn load(values: &[$t]) -> Self {
                let mut lanes = [0.0; $width];
                lanes.copy_from_slice(&values[..$width]);
                <$register>::new(lanes)
            }
        }
    };
}

impl_wide_lanes!(f32x4, f32, 4);
impl_wide_lanes!(f32x8, f32, 8);
impl_wide_lanes!(f64x2, f64, 2);
impl_wide_lanes!(f64x4, f64, 4);

#![cfg_attr(feature = "bench", feature(test))]
//! A crate which exports rays, planes, and ray/plane intersection kernels over
//! several memory layouts of the plane data.
//!
//! ## About
//!
//! This crate compares memory-layout strategies for a single geometric primitive: intersecting
//! one ray with a family of planes that share a normal. The plane points can be stored as an
//! array of structures ([`AosPlanes`]), as a structure of arrays split into one buffer per
//! coordinate ([`SoaPlanes`]), or as a structure of arrays packed into a single buffer
//! ([`InterleavedPlanes`]). Every layout is consumed by the same batched kernel, which processes
//! [`Lanes::WIDTH`] planes per step, so the layouts can be benchmarked against each other and
//! checked for identical results.
//!
//! [`AosPlanes`]: layout::AosPlanes
//! [`SoaPlanes`]: layout::SoaPlanes
//! [`InterleavedPlanes`]: layout::InterleavedPlanes
//! [`Lanes::WIDTH`]: lanes::Lanes::WIDTH
//!
//! ## Example
//!
//! ```
//! use vecint::batch::batch_intersect_soa;
//! use vecint::layout::SoaPlanes;
//! use vecint::ray::Ray;
//! use nalgebra::{Point3, Vector3};
//!
//! let ray = Ray::new(Point3::new(0.0f32, 0.0, 10.0), Vector3::new(0.0, -1.0, -1.0));
//! let normal = Vector3::new(0.0, 0.0, 1.0);
//!
//! let points: Vec<_> = (0..9).map(|k| Point3::new(0.0, 0.0, 5.0 + k as f32)).collect();
//! let planes = SoaPlanes::<f32>::from_points(&points);
//!
//! let results = batch_intersect_soa(&ray, &normal, &planes);
//! assert_eq!(results.len(), 9);
//! assert_eq!(results[0], 5.0);
//! assert_eq!(results[5], 0.0);
//! ```
//!
//! ## Features
//!
//! - `simd` (default **enabled**) - implements [`Lanes`] for the `wide` SIMD vectors.
//! - `rayon` (default **enabled**) - adds a data-parallel batch kernel.
//! - `serde` (default **disabled**) - adds `Serialize` and `Deserialize` implementations for some types.
//! - `bench` (default **disabled**) - nightly `#[bench]` benchmarks of every layout.
//! - `cli` (default **disabled**) - builds the `vecint-bench` timing binary.
//!
//! [`Lanes`]: lanes::Lanes

#[cfg(all(feature = "bench", test))]
extern crate test;

pub mod axis;
pub mod batch;
pub mod fixture;
pub mod lanes;
pub mod layout;
pub mod ray;
mod utils;

#[cfg(test)]
mod testbase;

use nalgebra::RealField;
use num_traits::Float;

/// Scalar type of every vector, point and lane in this crate.
///
/// Implemented for `f32` and `f64`.
pub trait Real: RealField + Float + Copy + Send + Sync {}

impl<T: RealField + Float + Copy + Send + Sync> Real for T {}

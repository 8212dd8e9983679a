//! Common utilities shared by unit tests.
#![cfg(test)]

use nalgebra::{Point3, Vector3};
use proptest::prelude::*;

use crate::ray::Ray;

/// A vector represented as a tuple
pub type TupleVec = (f32, f32, f32);

/// Generate a `TupleVec` for [`proptest::strategy::Strategy`] from -100 to 100.
/// Positions in this range keep the fp32 error of a single intersection far below the
/// tolerances used by the tests.
pub fn tuplevec_position_strategy() -> impl Strategy<Value = TupleVec> {
    (-100.0_f32..100.0_f32, -100.0_f32..100.0_f32, -100.0_f32..100.0_f32)
}

/// Generate a `TupleVec` for [`proptest::strategy::Strategy`] with a length of at least 0.1
/// and components from -1 to 1.
pub fn tuplevec_direction_strategy() -> impl Strategy<Value = TupleVec> {
    (-1.0_f32..1.0_f32, -1.0_f32..1.0_f32, -1.0_f32..1.0_f32)
        .prop_filter("direction too short", |v| tuple_to_vector(v).norm() > 0.1)
}

/// Generate `(origin, direction, plane point, plane normal)` such that the angle between the
/// direction and the normal is bounded away from 90 degrees.
pub fn non_parallel_strategy() -> impl Strategy<Value = (TupleVec, TupleVec, TupleVec, TupleVec)> {
    (
        tuplevec_position_strategy(),
        tuplevec_direction_strategy(),
        tuplevec_position_strategy(),
        tuplevec_direction_strategy(),
    )
        .prop_filter("ray almost parallel to plane", |(_, d, _, n)| {
            let d = tuple_to_vector(d);
            let n = tuple_to_vector(n);
            (d.dot(&n) / (d.norm() * n.norm())).abs() > 0.1
        })
}

/// Generate a ray origin, a ray direction, a shared normal and between 1 and 40 plane points,
/// for comparing the batched kernels against each other.
pub fn plane_batch_strategy(
) -> impl Strategy<Value = (TupleVec, TupleVec, TupleVec, Vec<TupleVec>)> {
    (
        tuplevec_position_strategy(),
        tuplevec_direction_strategy(),
        tuplevec_direction_strategy(),
        prop::collection::vec(tuplevec_position_strategy(), 1..40),
    )
        .prop_filter("ray almost parallel to planes", |(_, d, n, _)| {
            let d = tuple_to_vector(d);
            let n = tuple_to_vector(n);
            (d.dot(&n) / (d.norm() * n.norm())).abs() > 0.1
        })
}

/// Convert a `TupleVec` to a [`Point3`].
pub fn tuple_to_point(tpl: &TupleVec) -> Point3<f32> {
    Point3::new(tpl.0, tpl.1, tpl.2)
}

/// Convert a `TupleVec` to a [`Vector3`].
pub fn tuple_to_vector(tpl: &TupleVec) -> Vector3<f32> {
    Vector3::new(tpl.0, tpl.1, tpl.2)
}

/// Convert a `TupleVec` origin and direction to a [`Ray`].
pub fn tuples_to_ray(origin: &TupleVec, direction: &TupleVec) -> Ray<f32> {
    Ray::new(tuple_to_point(origin), tuple_to_vector(direction))
}

/// Asserts that two parameter sequences agree elementwise, relative to the magnitude `scales`
/// of the terms each parameter was computed from.
pub fn assert_parameters_close(actual: &[f32], expected: &[f32], scales: &[f32]) {
    assert_eq!(actual.len(), expected.len());
    for (i, ((a, e), scale)) in actual.iter().zip(expected).zip(scales).enumerate() {
        let tolerance = 1e-4 * scale;
        assert!(
            (a - e).abs() <= tolerance,
            "parameter {} differs: {} != {}",
            i,
            a,
            e
        );
    }
}

//! Demonstration inputs: the ray, normal and stacked planes the benchmarks run on.
//!
//! The demonstration ray starts at `(0, 0, 10)` and points along `(0, -1, -1)`, the planes are
//! horizontal (normal `(0, 0, 1)`) and plane `k` passes through `(0, 0, 5 + k)`. Plane `k` is
//! therefore hit at `t = 5 - k`.
//!
//! Every function returns fresh values.

use nalgebra::{convert, Point3, Vector3};
use num_traits::Zero;

use crate::axis::Axis;
use crate::lanes::Lanes;
use crate::layout::{InterleavedPlanes, Interleaving, SoaPlanes};
use crate::ray::Ray;
use crate::Real;

/// The demonstration ray.
pub fn demo_ray<T: Real>() -> Ray<T> {
    Ray::new(
        Point3::new(T::zero(), T::zero(), convert(10.0)),
        Vector3::new(T::zero(), -T::one(), -T::one()),
    )
}

/// The normal shared by all demonstration planes.
pub fn demo_normal<T: Real>() -> Vector3<T> {
    Vector3::z()
}

/// The points `(0, 0, 5 + k)` for `k` in `0..n`.
pub fn demo_points<T: Real>(n: usize) -> Vec<Point3<T>> {
    (0..n)
        .map(|k| Point3::new(T::zero(), T::zero(), convert(5.0 + k as f64)))
        .collect()
}

/// Value of lane group `chunk` of the given coordinate for the demonstration planes.
fn demo_chunk<L: Lanes>(chunk: usize, axis: Axis) -> L {
    match axis {
        Axis::X | Axis::Y => L::splat(Zero::zero()),
        Axis::Z => L::indexes_from_zero() + L::splat(convert((5 + chunk * L::WIDTH) as f64)),
    }
}

/// Fills `chunks` lane groups of split coordinate buffers with the demonstration planes,
/// building each z chunk from the lane indexes instead of transposing points.
///
/// # Examples
/// ```
/// use vecint::fixture::{demo_points, fill_soa};
///
/// let planes = fill_soa::<f32>(4);
/// assert_eq!(planes.to_points(), demo_points::<f32>(4));
/// ```
pub fn fill_soa<L: Lanes>(chunks: usize) -> SoaPlanes<L> {
    SoaPlanes::from_chunk_fn(chunks * L::WIDTH, demo_chunk::<L>)
}

/// Fills `chunks` lane groups of an interleaved buffer with the demonstration planes, in the
/// chunk order `interleaving` declares.
pub fn fill_interleaved<L: Lanes>(
    chunks: usize,
    interleaving: Interleaving,
) -> InterleavedPlanes<L> {
    InterleavedPlanes::from_chunk_fn(chunks * L::WIDTH, interleaving, demo_chunk::<L>)
}

/// A ray, the shared plane normal and the plane points of one benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture<T: Real> {
    /// The ray intersected with every plane.
    pub ray: Ray<T>,
    /// The normal of every plane.
    pub normal: Vector3<T>,
    /// One point per plane.
    pub points: Vec<Point3<T>>,
}

impl<T: Real> Fixture<T> {
    /// Creates a fixture from its parts.
    pub fn new(ray: Ray<T>, normal: Vector3<T>, points: Vec<Point3<T>>) -> Fixture<T> {
        Fixture {
            ray,
            normal,
            points,
        }
    }

    /// The demonstration ray and normal with `n` stacked planes.
    pub fn demonstration(n: usize) -> Fixture<T> {
        Fixture::new(demo_ray(), demo_normal(), demo_points(n))
    }

    /// The ray parameters the demonstration planes are hit at, `5 - k` for plane `k`.
    pub fn demonstration_parameters(n: usize) -> Vec<T> {
        (0..n).map(|k| convert(5.0 - k as f64)).collect()
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{Point3, Vector3};

    use crate::batch::batch_intersect_interleaved;
    use crate::fixture::{demo_normal, demo_points, demo_ray, fill_interleaved, fill_soa, Fixture};
    use crate::layout::{InterleavedPlanes, Interleaving};

    #[test]
    fn test_demo_values() {
        let ray = demo_ray::<f64>();
        assert_eq!(ray.origin, Point3::new(0.0, 0.0, 10.0));
        assert_eq!(ray.direction, Vector3::new(0.0, -1.0, -1.0));
        assert_eq!(demo_normal::<f64>(), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(
            demo_points::<f32>(3),
            vec![
                Point3::new(0.0, 0.0, 5.0),
                Point3::new(0.0, 0.0, 6.0),
                Point3::new(0.0, 0.0, 7.0),
            ]
        );
    }

    #[test]
    fn test_fixtures_are_fresh() {
        let mut fixture = Fixture::<f32>::demonstration(2);
        fixture.points.clear();
        assert_eq!(Fixture::<f32>::demonstration(2).points.len(), 2);
    }

    #[test]
    fn test_scalar_fills_match_points() {
        let points = demo_points::<f32>(6);
        assert_eq!(fill_soa::<f32>(6).to_points(), points);
        for interleaving in Interleaving::ALL {
            let planes = fill_interleaved::<f32>(6, interleaving);
            let expected = InterleavedPlanes::<f32>::from_points(&points, interleaving);
            assert_eq!(planes.as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn test_filled_planes_give_demonstration_parameters() {
        let fixture = Fixture::<f32>::demonstration(0);
        let planes = fill_interleaved::<f32>(12, Interleaving::ChunkMajor);
        let results = batch_intersect_interleaved(&fixture.ray, &fixture.normal, &planes);
        assert_eq!(
            results.to_vec(),
            Fixture::<f32>::demonstration_parameters(12)
        );
    }

    #[cfg(feature = "simd")]
    #[test]
    fn test_wide_fills_match_points() {
        use crate::axis::Axis;
        use crate::lanes::Lanes;
        use crate::layout::SoaPlanes;
        use wide::{f32x4, f32x8, f64x2};

        let points = demo_points::<f32>(16);
        let planes = fill_soa::<f32x8>(2);
        let expected = SoaPlanes::<f32x8>::from_points(&points);
        assert_eq!(planes.to_points(), expected.to_points());
        assert_eq!(Lanes::to_vec(planes.chunk(Axis::Z, 1))[0], 13.0);

        for interleaving in Interleaving::ALL {
            let planes = fill_interleaved::<f32x4>(4, interleaving);
            let expected = InterleavedPlanes::<f32x4>::from_points(&points, interleaving);
            let lanes = |planes: &InterleavedPlanes<f32x4>| -> Vec<f32> {
                planes
                    .as_slice()
                    .iter()
                    .flat_map(|l| Lanes::to_vec(*l))
                    .collect()
            };
            assert_eq!(lanes(&planes), lanes(&expected));
        }

        let planes = fill_interleaved::<f64x2>(3, Interleaving::FieldMajor);
        assert_eq!(planes.to_points(), demo_points::<f64>(6));
    }
}

//! The batched ray/plane kernels: one ray against many planes which share a normal.
//!
//! Every kernel computes, for each plane point `p`,
//!
//! ```text
//! t = dot(p - origin, normal) / dot(direction, normal)
//! ```
//!
//! one lane group of [`Lanes::WIDTH`] planes at a time. The denominator is the same for the
//! whole batch and is computed once per call. A ray parallel to the planes divides by zero and
//! yields `+inf`, `-inf` or `NaN` lanes.
//!
//! Batches whose length is not a multiple of the lane width are padded: the last lane group is
//! computed in full and the padding lanes are hidden by [`ResultBatch`]. No plane is dropped.

mod results;

#[cfg(feature = "rayon")]
mod parallel;

pub use self::results::*;

#[cfg(feature = "rayon")]
pub use self::parallel::*;

use nalgebra::Vector3;

use crate::axis::Axis;
use crate::lanes::Lanes;
use crate::layout::{AosPlanes, InterleavedPlanes, PlaneLayout, SoaPlanes};
use crate::ray::Ray;

/// The splatted ray and normal terms every lane group of one kernel call shares.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KernelTerms<L: Lanes> {
    origin: [L; 3],
    normal: [L; 3],
    denom: L,
}

impl<L: Lanes> KernelTerms<L> {
    #[inline(always)]
    pub(crate) fn new(ray: &Ray<L::Scalar>, normal: &Vector3<L::Scalar>) -> KernelTerms<L> {
        KernelTerms {
            origin: Axis::ALL.map(|axis| L::splat(ray.origin[axis])),
            normal: Axis::ALL.map(|axis| L::splat(normal[axis])),
            denom: L::splat(ray.denominator(normal)),
        }
    }

    /// Ray parameters of lane group `chunk`.
    #[inline(always)]
    pub(crate) fn parameters<P: PlaneLayout<L> + ?Sized>(&self, planes: &P, chunk: usize) -> L {
        let x = planes.load_chunk(chunk, Axis::X);
        let y = planes.load_chunk(chunk, Axis::Y);
        let z = planes.load_chunk(chunk, Axis::Z);

        let nom_x = (x - self.origin[Axis::X]) * self.normal[Axis::X];
        let nom_y = (y - self.origin[Axis::Y]) * self.normal[Axis::Y];
        let nom_z = (z - self.origin[Axis::Z]) * self.normal[Axis::Z];

        (nom_x + nom_y + nom_z) / self.denom
    }
}

/// Computes the ray parameter of every plane in `planes`, in any layout, into `results`.
///
/// `results` is resized to the batch; after the call `results[i]` is the parameter of plane `i`.
pub fn intersect_batch<L, P>(
    ray: &Ray<L::Scalar>,
    normal: &Vector3<L::Scalar>,
    planes: &P,
    results: &mut ResultBatch<L::Scalar>,
) where
    L: Lanes,
    P: PlaneLayout<L> + ?Sized,
{
    let chunks = planes.chunk_count();
    results.prepare(planes.len(), chunks * L::WIDTH);

    let terms = KernelTerms::<L>::new(ray, normal);
    for (chunk, out) in results
        .padded_mut()
        .chunks_exact_mut(L::WIDTH)
        .enumerate()
    {
        terms.parameters(planes, chunk).store(out);
    }
}

/// Computes the ray parameter of every plane of an array-of-structures batch, gathering one
/// coordinate of `L::WIDTH` records per load.
///
/// # Examples
/// ```
/// use vecint::batch::{intersect_aos, ResultBatch};
/// use vecint::layout::AosPlanes;
/// use vecint::ray::Ray;
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::new(0.0f32, 0.0, 10.0), Vector3::new(0.0, -1.0, -1.0));
/// let normal = Vector3::new(0.0, 0.0, 1.0);
/// let planes: AosPlanes<f32> = (5..8).map(|z| Point3::new(0.0, 0.0, z as f32)).collect();
///
/// let mut results = ResultBatch::new();
/// intersect_aos::<f32>(&ray, &normal, &planes, &mut results);
/// assert_eq!(results.as_slice(), &[5.0, 4.0, 3.0]);
/// ```
pub fn intersect_aos<L: Lanes>(
    ray: &Ray<L::Scalar>,
    normal: &Vector3<L::Scalar>,
    planes: &AosPlanes<L::Scalar>,
    results: &mut ResultBatch<L::Scalar>,
) {
    intersect_batch::<L, _>(ray, normal, planes, results);
}

/// Computes the ray parameter of every plane of a split structure-of-arrays batch, reading
/// chunk `i` of the x, y and z buffers for lane group `i`.
pub fn intersect_soa<L: Lanes>(
    ray: &Ray<L::Scalar>,
    normal: &Vector3<L::Scalar>,
    planes: &SoaPlanes<L>,
    results: &mut ResultBatch<L::Scalar>,
) {
    intersect_batch::<L, _>(ray, normal, planes, results);
}

/// Computes the ray parameter of every plane of an interleaved structure-of-arrays batch,
/// reading the chunks at the slots the batch's [`Interleaving`] assigns.
///
/// [`Interleaving`]: crate::layout::Interleaving
pub fn intersect_interleaved<L: Lanes>(
    ray: &Ray<L::Scalar>,
    normal: &Vector3<L::Scalar>,
    planes: &InterleavedPlanes<L>,
    results: &mut ResultBatch<L::Scalar>,
) {
    intersect_batch::<L, _>(ray, normal, planes, results);
}

/// Like [`intersect_aos`], returning a new [`ResultBatch`].
pub fn batch_intersect_aos<L: Lanes>(
    ray: &Ray<L::Scalar>,
    normal: &Vector3<L::Scalar>,
    planes: &AosPlanes<L::Scalar>,
) -> ResultBatch<L::Scalar> {
    let mut results = ResultBatch::new();
    intersect_aos::<L>(ray, normal, planes, &mut results);
    results
}

/// Like [`intersect_soa`], returning a new [`ResultBatch`].
pub fn batch_intersect_soa<L: Lanes>(
    ray: &Ray<L::Scalar>,
    normal: &Vector3<L::Scalar>,
    planes: &SoaPlanes<L>,
) -> ResultBatch<L::Scalar> {
    let mut results = ResultBatch::new();
    intersect_soa(ray, normal, planes, &mut results);
    results
}

/// Like [`intersect_interleaved`], returning a new [`ResultBatch`].
pub fn batch_intersect_interleaved<L: Lanes>(
    ray: &Ray<L::Scalar>,
    normal: &Vector3<L::Scalar>,
    planes: &InterleavedPlanes<L>,
) -> ResultBatch<L::Scalar> {
    let mut results = ResultBatch::new();
    intersect_interleaved(ray, normal, planes, &mut results);
    results
}


#[cfg(all(feature = "bench", test))]
mod bench {
    use nalgebra::{Point3, Vector3};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test::{black_box, Bencher};

    use crate::batch::{intersect_aos, intersect_interleaved, intersect_soa, ResultBatch};
    use crate::lanes::DefaultLanes;
    use crate::layout::{AosPlanes, InterleavedPlanes, Interleaving, SoaPlanes};
    use crate::ray::Ray;

    /// Generate the ray, normal and plane points used for benchmarks.
    fn random_planes() -> (Ray<f32>, Vector3<f32>, Vec<Point3<f32>>) {
        let seed = [0; 32];
        let mut rng = StdRng::from_seed(seed);

        let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Vector3::new(0.0, -1.0, -1.0));
        let normal = Vector3::new(0.0, 0.0, 1.0);
        let points = (0..1024)
            .map(|_| {
                Point3::new(
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                )
            })
            .collect();

        black_box((ray, normal, points))
    }

    #[bench]
    fn bench_intersect_aos(b: &mut Bencher) {
        let (ray, normal, points) = random_planes();
        let planes = AosPlanes::from_points(&points);
        let mut results = ResultBatch::with_capacity(points.len());

        b.iter(|| {
            intersect_aos::<DefaultLanes>(&ray, &normal, &planes, &mut results);
            black_box(&results);
        });
    }

    #[bench]
    fn bench_intersect_aos_scalar(b: &mut Bencher) {
        let (ray, normal, points) = random_planes();
        let planes = AosPlanes::from_points(&points);
        let mut results = ResultBatch::with_capacity(points.len());

        b.iter(|| {
            intersect_aos::<f32>(&ray, &normal, &planes, &mut results);
            black_box(&results);
        });
    }

    #[bench]
    fn bench_intersect_soa(b: &mut Bencher) {
        let (ray, normal, points) = random_planes();
        let planes = SoaPlanes::<DefaultLanes>::from_points(&points);
        let mut results = ResultBatch::with_capacity(points.len());

        b.iter(|| {
            intersect_soa(&ray, &normal, &planes, &mut results);
            black_box(&results);
        });
    }

    #[bench]
    fn bench_intersect_interleaved_chunk_major(b: &mut Bencher) {
        let (ray, normal, points) = random_planes();
        let planes =
            InterleavedPlanes::<DefaultLanes>::from_points(&points, Interleaving::ChunkMajor);
        let mut results = ResultBatch::with_capacity(points.len());

        b.iter(|| {
            intersect_interleaved(&ray, &normal, &planes, &mut results);
            black_box(&results);
        });
    }

    #[bench]
    fn bench_intersect_interleaved_field_major(b: &mut Bencher) {
        let (ray, normal, points) = random_planes();
        let planes =
            InterleavedPlanes::<DefaultLanes>::from_points(&points, Interleaving::FieldMajor);
        let mut results = ResultBatch::with_capacity(points.len());

        b.iter(|| {
            intersect_interleaved(&ray, &normal, &planes, &mut results);
            black_box(&results);
        });
    }
}

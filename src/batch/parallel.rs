//! Data-parallel variant of the batched kernel.

use nalgebra::Vector3;
use rayon::prelude::*;

use crate::batch::{KernelTerms, ResultBatch};
use crate::lanes::Lanes;
use crate::layout::PlaneLayout;
use crate::ray::Ray;

/// Like [`intersect_batch`](crate::batch::intersect_batch), computing the lane groups on the
/// rayon thread pool. Every task writes its own lane group, so the results equal the
/// sequential kernel's bit for bit.
pub fn par_intersect_batch<L, P>(
    ray: &Ray<L::Scalar>,
    normal: &Vector3<L::Scalar>,
    planes: &P,
    results: &mut ResultBatch<L::Scalar>,
) where
    L: Lanes,
    P: PlaneLayout<L> + Sync + ?Sized,
{
    let chunks = planes.chunk_count();
    results.prepare(planes.len(), chunks * L::WIDTH);

    let terms = KernelTerms::<L>::new(ray, normal);
    results
        .padded_mut()
        .par_chunks_mut(L::WIDTH)
        .enumerate()
        .for_each(|(chunk, out)| terms.parameters(planes, chunk).store(out));
}

//! Structure-of-arrays plane storage sharing a single buffer between the coordinates.

use nalgebra::Point3;

use crate::axis::Axis;
use crate::lanes::Lanes;
use crate::layout::{Interleaving, LayoutKind, PlaneLayout};
use crate::utils::chunk_count;

/// Plane points stored as lane-width chunks of all three coordinates in one buffer.
///
/// Where each chunk lives is declared by the batch's [`Interleaving`]; filling and reading both
/// go through [`Interleaving::slot`].
#[derive(Debug, Clone)]
pub struct InterleavedPlanes<L: Lanes> {
    data: Vec<L>,
    interleaving: Interleaving,
    len: usize,
}

impl<L: Lanes> InterleavedPlanes<L> {
    /// Creates an empty batch.
    pub fn new(interleaving: Interleaving) -> InterleavedPlanes<L> {
        InterleavedPlanes {
            data: Vec::new(),
            interleaving,
            len: 0,
        }
    }

    /// Packs `points` into one buffer in the given chunk order. The last lane group is
    /// completed with padding lanes if `points.len()` is not a multiple of the lane width.
    pub fn from_points(points: &[Point3<L::Scalar>], interleaving: Interleaving) -> Self {
        Self::from_chunk_fn(points.len(), interleaving, |chunk, axis| {
            super::gather_chunk(points, chunk, axis)
        })
    }

    /// Builds a batch of `len` planes, storing `f(chunk, axis)` at the slot `interleaving`
    /// assigns to that chunk.
    ///
    /// Lanes of the last chunk past `len` are padding and never reach a result.
    pub fn from_chunk_fn<F: FnMut(usize, Axis) -> L>(
        len: usize,
        interleaving: Interleaving,
        mut f: F,
    ) -> InterleavedPlanes<L> {
        let chunks = chunk_count(len, L::WIDTH);
        let data = (0..3 * chunks)
            .map(|slot| {
                let (chunk, axis) = interleaving.chunk_and_axis(slot, chunks);
                f(chunk, axis)
            })
            .collect();
        InterleavedPlanes {
            data,
            interleaving,
            len,
        }
    }

    /// The chunk order of the buffer.
    pub fn interleaving(&self) -> Interleaving {
        self.interleaving
    }

    /// The whole buffer, in storage order.
    pub fn as_slice(&self) -> &[L] {
        &self.data
    }

    /// The `axis` chunk of lane group `index`.
    ///
    /// Panics if `index` is not below the number of lane groups.
    #[inline(always)]
    pub fn chunk(&self, axis: Axis, index: usize) -> L {
        let chunks = self.data.len() / 3;
        assert!(
            index < chunks,
            "chunk {} out of range for {} chunks",
            index,
            chunks
        );
        self.data[self.interleaving.slot(index, axis, chunks)]
    }

    /// Number of planes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the batch holds no planes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads plane `index` back out of the buffer.
    ///
    /// Panics if `index >= len`.
    pub fn point(&self, index: usize) -> Point3<L::Scalar> {
        assert!(
            index < self.len,
            "plane {} out of range for {} planes",
            index,
            self.len
        );
        let (chunk, lane) = (index / L::WIDTH, index % L::WIDTH);
        Point3::new(
            self.chunk(Axis::X, chunk).extract(lane),
            self.chunk(Axis::Y, chunk).extract(lane),
            self.chunk(Axis::Z, chunk).extract(lane),
        )
    }

    /// Reads all planes back out of the buffer.
    pub fn to_points(&self) -> Vec<Point3<L::Scalar>> {
        (0..self.len).map(|i| self.point(i)).collect()
    }
}

impl<L: Lanes> PlaneLayout<L> for InterleavedPlanes<L> {
    const KIND: LayoutKind = LayoutKind::SoaInterleaved;

    fn len(&self) -> usize {
        self.len
    }

    fn chunk_count(&self) -> usize {
        self.data.len() / 3
    }

    #[inline(always)]
    fn load_chunk(&self, chunk: usize, axis: Axis) -> L {
        self.chunk(axis, chunk)
    }
}

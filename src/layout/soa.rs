//! Structure-of-arrays plane storage with one buffer per coordinate.

use nalgebra::Point3;

use crate::axis::Axis;
use crate::lanes::Lanes;
use crate::layout::{LayoutKind, PlaneLayout};
use crate::utils::chunk_count;

/// Plane points stored as three buffers of lane-width chunks, one per coordinate.
///
/// Chunk `i` of each buffer holds the planes `i * WIDTH .. (i + 1) * WIDTH`, so a lane group is
/// read with one load per coordinate.
#[derive(Debug, Clone)]
pub struct SoaPlanes<L: Lanes> {
    x: Vec<L>,
    y: Vec<L>,
    z: Vec<L>,
    len: usize,
}

impl<L: Lanes> SoaPlanes<L> {
    /// Creates an empty batch.
    pub fn new() -> SoaPlanes<L> {
        SoaPlanes {
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
            len: 0,
        }
    }

    /// Transposes `points` into three coordinate buffers. The last chunk is completed with
    /// padding lanes if `points.len()` is not a multiple of the lane width.
    pub fn from_points(points: &[Point3<L::Scalar>]) -> SoaPlanes<L> {
        Self::from_chunk_fn(points.len(), |chunk, axis| {
            super::gather_chunk(points, chunk, axis)
        })
    }

    /// Builds a batch of `len` planes by calling `f(chunk, axis)` for every chunk of every
    /// coordinate buffer.
    ///
    /// Lanes of the last chunk past `len` are padding and never reach a result.
    pub fn from_chunk_fn<F: FnMut(usize, Axis) -> L>(len: usize, mut f: F) -> SoaPlanes<L> {
        let chunks = chunk_count(len, L::WIDTH);
        let mut buffers = [
            Vec::with_capacity(chunks),
            Vec::with_capacity(chunks),
            Vec::with_capacity(chunks),
        ];
        for chunk in 0..chunks {
            for axis in Axis::ALL {
                buffers[axis].push(f(chunk, axis));
            }
        }
        let [x, y, z] = buffers;
        SoaPlanes { x, y, z, len }
    }

    /// The chunks of one coordinate.
    pub fn buffer(&self, axis: Axis) -> &[L] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Chunk `index` of the `axis` buffer.
    #[inline(always)]
    pub fn chunk(&self, axis: Axis, index: usize) -> L {
        self.buffer(axis)[index]
    }

    /// Number of planes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the batch holds no planes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads plane `index` back out of the coordinate buffers.
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
            self.x[chunk].extract(lane),
            self.y[chunk].extract(lane),
            self.z[chunk].extract(lane),
        )
    }

    /// Reads all planes back out of the coordinate buffers.
    pub fn to_points(&self) -> Vec<Point3<L::Scalar>> {
        (0..self.len).map(|i| self.point(i)).collect()
    }
}

impl<L: Lanes> Default for SoaPlanes<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Lanes> PlaneLayout<L> for SoaPlanes<L> {
    const KIND: LayoutKind = LayoutKind::SoaSplit;

    fn len(&self) -> usize {
        self.len
    }

    fn chunk_count(&self) -> usize {
        self.x.len()
    }

    #[inline(always)]
    fn load_chunk(&self, chunk: usize, axis: Axis) -> L {
        self.chunk(axis, chunk)
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Point3;

    use crate::axis::Axis;
    use crate::layout::{PlaneLayout, SoaPlanes};

    fn points(n: usize) -> Vec<Point3<f64>> {
        (0..n)
            .map(|k| Point3::new(k as f64, -(k as f64), 0.5 * k as f64))
            .collect()
    }

    #[test]
    fn test_scalar_buffers() {
        let planes = SoaPlanes::<f64>::from_points(&points(3));
        assert_eq!(planes.buffer(Axis::X), &[0.0, 1.0, 2.0]);
        assert_eq!(planes.buffer(Axis::Y), &[0.0, -1.0, -2.0]);
        assert_eq!(planes.chunk(Axis::Z, 2), 1.0);
        assert_eq!(planes.chunk_count(), 3);
    }

    #[test]
    fn test_points_read_back() {
        let points = points(5);
        let planes = SoaPlanes::<f64>::from_points(&points);
        assert_eq!(planes.len(), 5);
        assert_eq!(planes.to_points(), points);
    }

    #[test]
    #[should_panic]
    fn test_point_out_of_range() {
        SoaPlanes::<f64>::from_points(&points(2)).point(2);
    }

    #[cfg(feature = "simd")]
    #[test]
    fn test_wide_buffers_are_padded() {
        use crate::lanes::Lanes;
        use wide::f64x4;

        let points = points(6);
        let planes = SoaPlanes::<f64x4>::from_points(&points);
        assert_eq!(planes.chunk_count(), 2);
        assert_eq!(planes.buffer(Axis::X).len(), 2);
        assert_eq!(
            Lanes::to_vec(planes.chunk(Axis::X, 1)),
            vec![4.0, 5.0, 0.0, 0.0]
        );
        assert_eq!(
            Lanes::to_vec(planes.load_chunk(0, Axis::Y)),
            vec![0.0, -1.0, -2.0, -3.0]
        );
        assert_eq!(planes.to_points(), points);
    }
}

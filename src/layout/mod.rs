//! Containers presenting the points of a plane batch in the three memory layouts, and the
//! [`PlaneLayout`] trait through which the batched kernels read them.
//!
//! ```text
//! Aos:            [x0 y0 z0] [x1 y1 z1] [x2 y2 z2] ...        gather per lane
//! SoaSplit:       x: [x0 x1 x2 x3] [x4 ...]                   one chunk per load
//!                 y: [y0 y1 y2 y3] [y4 ...]
//!                 z: [z0 z1 z2 z3] [z4 ...]
//! SoaInterleaved: [x0..x3] [y0..y3] [z0..z3] [x4..x7] ...     one buffer, order by `Interleaving`
//! ```
//!
//! Every container holds `len` logical planes. The last chunk of a batch whose length is not a
//! multiple of the lane width is completed with padding lanes holding `(0, 0, 0)`.

mod aos;
mod interleaved;
mod soa;

pub use self::aos::*;
pub use self::interleaved::*;
pub use self::soa::*;

use std::fmt::{Display, Formatter, Result};

use nalgebra::Point3;
use num_traits::Zero;

use crate::axis::Axis;
use crate::lanes::Lanes;
use crate::utils::chunk_count;

/// The three physical layouts of a plane batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LayoutKind {
    /// Array of structures, see [`AosPlanes`].
    Aos,
    /// Structure of arrays with one buffer per coordinate, see [`SoaPlanes`].
    SoaSplit,
    /// Structure of arrays in a single buffer, see [`InterleavedPlanes`].
    SoaInterleaved,
}

impl LayoutKind {
    /// All layouts, in the order the benchmarks report them.
    pub const ALL: [LayoutKind; 3] = [
        LayoutKind::Aos,
        LayoutKind::SoaSplit,
        LayoutKind::SoaInterleaved,
    ];
}

impl Display for LayoutKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                LayoutKind::Aos => "aos",
                LayoutKind::SoaSplit => "soa-split",
                LayoutKind::SoaInterleaved => "soa-interleaved",
            }
        )
    }
}

/// Order of the coordinate chunks inside the single buffer of an [`InterleavedPlanes`].
///
/// The fill routines and the kernel both resolve chunk positions through [`Interleaving::slot`],
/// so a buffer is always read in the order it was written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Interleaving {
    /// `x0 y0 z0 x1 y1 z1 ...`: the three chunks of one lane group are adjacent.
    #[default]
    ChunkMajor,
    /// `x0 x1 ... y0 y1 ... z0 z1 ...`: a split layout sharing one allocation.
    FieldMajor,
}

impl Interleaving {
    /// Both orders.
    pub const ALL: [Interleaving; 2] = [Interleaving::ChunkMajor, Interleaving::FieldMajor];

    /// Position of the `axis` chunk of lane group `chunk` in a buffer holding `chunk_count`
    /// lane groups.
    ///
    /// # Examples
    /// ```
    /// use vecint::axis::Axis;
    /// use vecint::layout::Interleaving;
    ///
    /// assert_eq!(Interleaving::ChunkMajor.slot(1, Axis::Y, 2), 4);
    /// assert_eq!(Interleaving::FieldMajor.slot(1, Axis::Y, 2), 3);
    /// ```
    #[inline(always)]
    pub fn slot(self, chunk: usize, axis: Axis, chunk_count: usize) -> usize {
        match self {
            Interleaving::ChunkMajor => chunk * 3 + axis.index(),
            Interleaving::FieldMajor => axis.index() * chunk_count + chunk,
        }
    }

    /// Inverse of [`Interleaving::slot`].
    ///
    /// # Panics
    /// Panics if `slot` is not below `3 * chunk_count`.
    pub fn chunk_and_axis(self, slot: usize, chunk_count: usize) -> (usize, Axis) {
        assert!(
            slot < 3 * chunk_count,
            "slot {} out of range for {} chunks",
            slot,
            chunk_count
        );
        match self {
            Interleaving::ChunkMajor => (slot / 3, Axis::ALL[slot % 3]),
            Interleaving::FieldMajor => (slot % chunk_count, Axis::ALL[slot / chunk_count]),
        }
    }
}

/// A plane batch the batched kernels can read one lane group at a time.
pub trait PlaneLayout<L: Lanes> {
    /// The physical layout of this container.
    const KIND: LayoutKind;

    /// Number of logical planes.
    fn len(&self) -> usize;

    /// Returns true if the batch holds no planes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of lane groups, including a trailing partial one.
    fn chunk_count(&self) -> usize {
        chunk_count(self.len(), L::WIDTH)
    }

    /// Loads the `axis` coordinate of the planes `chunk * WIDTH .. (chunk + 1) * WIDTH`.
    /// Lanes past [`PlaneLayout::len`] hold zero.
    fn load_chunk(&self, chunk: usize, axis: Axis) -> L;
}

/// Loads the `axis` coordinate of the points of lane group `chunk`, padding with zero.
#[inline(always)]
pub(crate) fn gather_chunk<L: Lanes>(points: &[Point3<L::Scalar>], chunk: usize, axis: Axis) -> L {
    let start = chunk * L::WIDTH;
    L::from_fn(|i| match points.get(start + i) {
        Some(p) => p[axis],
        None => Zero::zero(),
    })
}

#[cfg(test)]
mod tests {
    use crate::axis::Axis;
    use crate::layout::{Interleaving, LayoutKind};

    #[test]
    fn test_chunk_major_slots() {
        let slots: Vec<usize> = (0..2)
            .flat_map(|chunk| Axis::ALL.iter().map(move |&axis| (chunk, axis)))
            .map(|(chunk, axis)| Interleaving::ChunkMajor.slot(chunk, axis, 2))
            .collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_field_major_slots() {
        let slots: Vec<usize> = (0..3)
            .map(|chunk| Interleaving::FieldMajor.slot(chunk, Axis::Z, 3))
            .collect();
        assert_eq!(slots, vec![6, 7, 8]);
    }

    /// Test that every slot of a buffer maps back to the chunk it was computed from.
    #[test]
    fn test_slot_round_trip() {
        for interleaving in Interleaving::ALL {
            for chunk_count in 1..5 {
                for slot in 0..3 * chunk_count {
                    let (chunk, axis) = interleaving.chunk_and_axis(slot, chunk_count);
                    assert_eq!(interleaving.slot(chunk, axis, chunk_count), slot);
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_slot_of_empty_buffer() {
        Interleaving::FieldMajor.chunk_and_axis(0, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_slot_past_buffer_end() {
        Interleaving::ChunkMajor.chunk_and_axis(6, 2);
    }

    #[test]
    fn test_layout_names() {
        let names: Vec<String> = LayoutKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["aos", "soa-split", "soa-interleaved"]);
    }
}

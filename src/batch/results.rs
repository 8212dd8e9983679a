//! Storage for the ray parameters produced by the batched kernels.

use std::ops::Index;

use crate::Real;

/// The ray parameters of one batched kernel call, one per plane in plane order.
///
/// The storage is padded to a whole number of lane groups so the kernel can store full
/// registers; only the first [`ResultBatch::len`] values are exposed. A `ResultBatch` can be
/// reused across calls: the kernels resize it in place, which does not allocate once the
/// capacity suffices.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultBatch<T: Real> {
    values: Vec<T>,
    len: usize,
}

impl<T: Real> ResultBatch<T> {
    /// Creates an empty result batch.
    pub fn new() -> ResultBatch<T> {
        ResultBatch {
            values: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty result batch which can hold `capacity` values, padding included,
    /// without reallocating.
    pub fn with_capacity(capacity: usize) -> ResultBatch<T> {
        ResultBatch {
            values: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Resizes the storage to `padded_len` values of which the first `len` are exposed.
    pub(crate) fn prepare(&mut self, len: usize, padded_len: usize) {
        debug_assert!(len <= padded_len);
        self.values.resize(padded_len, T::zero());
        self.len = len;
    }

    /// The padded storage, written by the kernels one lane group at a time.
    pub(crate) fn padded_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// The padded storage, including the padding lanes of a partial last lane group.
    pub fn padded(&self) -> &[T] {
        &self.values
    }

    /// The ray parameter of every plane.
    pub fn as_slice(&self) -> &[T] {
        &self.values[..self.len]
    }

    /// The ray parameters of lane group `index` of a kernel run with `width` lanes. The last
    /// group is cut at [`ResultBatch::len`].
    pub fn lane_group(&self, index: usize, width: usize) -> &[T] {
        let start = index.saturating_mul(width).min(self.len);
        let end = start.saturating_add(width).min(self.len);
        &self.values[start..end]
    }

    /// Number of planes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no results.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the parameter of plane `index`, if present.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Iterates over the parameters in plane order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Copies the parameters into a new vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

impl<T: Real> Index<usize> for ResultBatch<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<'a, T: Real> IntoIterator for &'a ResultBatch<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Utilities module.

/// Number of `width`-sized chunks needed to hold `len` values. The last chunk may be partial.
///
/// ```text
/// chunk_count(0, 4): 0
/// chunk_count(8, 4): 2
/// chunk_count(9, 4): 3
/// ```
#[inline(always)]
pub fn chunk_count(len: usize, width: usize) -> usize {
    (len + width - 1) / width
}

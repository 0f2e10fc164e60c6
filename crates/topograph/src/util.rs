//! Miscellaneous helpers.

use crate::graph::VertexId;

/// Iterative binary search over an ascending slice.
///
/// Half-open bounds (`lo..hi`). Returns the index of some occurrence of `target`, or `None`
/// if it is absent.
pub fn binary_search(sorted: &[VertexId], target: VertexId) -> Option<usize> {
    let (mut lo, mut hi) = (0usize, sorted.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if sorted[mid] < target {
            lo = mid + 1;
        } else if sorted[mid] > target {
            hi = mid;
        } else {
            return Some(mid);
        }
    }
    None
}

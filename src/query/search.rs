//! Binary search
//!
//! Halving search over a sequence sorted ascending by the search key.

use std::cmp::Ordering;

/// Find a record whose key equals `target`
///
/// `sorted` must already be ascending by `key`; this is not checked and an
/// unsorted input gives an unreliable answer. With duplicate keys the first
/// match the halving reaches is returned, which is not necessarily the
/// first occurrence.
///
/// Returns the position within `sorted` and the matching element.
pub fn search<'a, T, K, F>(sorted: &'a [T], target: &K, key: F) -> Option<(usize, &'a T)>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    // Active range is [low, high); mid is the lower middle of it
    let mut low = 0;
    let mut high = sorted.len();

    while low < high {
        let mid = low + (high - low - 1) / 2;
        match key(&sorted[mid]).cmp(target) {
            Ordering::Equal => return Some((mid, &sorted[mid])),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}

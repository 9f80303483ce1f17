//! Partition sort
//!
//! Recursive three-way partition around the middle element.

use std::cmp::Ordering;

/// Sort `items` ascending by `key`, returning a new vector
///
/// Each level splits the input into three groups relative to the key of the
/// middle element: less, equal, greater. Only the outer groups are recursed
/// into, so equal keys keep their input order. Average O(n log n); a pivot
/// that repeatedly lands on an extreme degrades to O(n²).
///
/// The input slice is left untouched.
pub fn sort_by<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let refs: Vec<&T> = items.iter().collect();
    partition_sort(refs, &key).into_iter().cloned().collect()
}

/// Works on references so rows are cloned once, at the end
fn partition_sort<'a, T, K, F>(items: Vec<&'a T>, key: &F) -> Vec<&'a T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items;
    }

    let pivot = key(items[items.len() / 2]);

    let mut left = Vec::new();
    let mut middle = Vec::new();
    let mut right = Vec::new();
    for item in items {
        match key(item).cmp(&pivot) {
            Ordering::Less => left.push(item),
            Ordering::Equal => middle.push(item),
            Ordering::Greater => right.push(item),
        }
    }

    let mut sorted = partition_sort(left, key);
    sorted.append(&mut middle);
    sorted.append(&mut partition_sort(right, key));
    sorted
}

//! Index arithmetic for a complete binary tree stored in a slice.

use std::cmp::Ordering;

use crate::compare::Compare;

/// Index of the parent of `index`. Must not be called with the root index.
pub(crate) const fn parent(index: usize) -> usize {
    (index - 1) >> 1
}

pub(crate) const fn left(index: usize) -> usize {
    (index << 1) + 1
}

pub(crate) const fn right(index: usize) -> usize {
    (index + 1) << 1
}

/// Restores the max-heap property for the subtree rooted at `index`, looking
/// only at `keys[..len]`. Children of `index` must already be heaps.
pub(crate) fn sift_down<T, C>(keys: &mut [T], len: usize, mut index: usize, comparator: &C)
where
    C: Compare<T> + ?Sized,
{
    loop {
        let (left, right) = (left(index), right(index));
        let mut largest = index;
        if left < len && comparator.compare(&keys[left], &keys[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < len && comparator.compare(&keys[right], &keys[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == index {
            return;
        }
        keys.swap(largest, index);
        index = largest;
    }
}

/// Turns `keys` into a max-heap by sifting down every non-leaf, last first.
pub(crate) fn build_max_heap<T, C>(keys: &mut [T], comparator: &C)
where
    C: Compare<T> + ?Sized,
{
    let len = keys.len();
    for index in (0..len / 2).rev() {
        sift_down(keys, len, index, comparator);
    }
}

/// Sorts the max-heap `keys` ascending by repeatedly moving its root behind the shrinking heap
/// prefix.
pub(crate) fn pop_into_place<T, C>(keys: &mut [T], comparator: &C)
where
    C: Compare<T> + ?Sized,
{
    let mut end = keys.len();
    while end > 1 {
        end -= 1;
        keys.swap(0, end);
        sift_down(keys, end, 0, comparator);
    }
}

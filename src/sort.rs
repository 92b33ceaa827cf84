//! In-place slice sorts.
//!
//! These work on plain slices and keep no structure around between calls. [`heap_sort`] builds a
//! max-heap inside the slice itself rather than going through
//! [`PriorityHeap`](crate::PriorityHeap).

use std::cmp::Ordering;

use crate::compare::Natural;
use crate::util;

/// Insertion sort with natural ordering. Stable, `O(n²)` worst case and `O(n)` on sorted input.
///
/// # Examples
///
/// ```
/// use ordered_containers::sort::insertion_sort;
///
/// let mut keys = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// insertion_sort(&mut keys);
/// assert_eq!(keys, [1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn insertion_sort<T: Ord>(keys: &mut [T]) {
    insertion_sort_by(keys, T::cmp);
}

/// Insertion sort with a custom comparator.
pub fn insertion_sort_by<T, F>(keys: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    for i in 1..keys.len() {
        let mut j = i;
        while j > 0 && compare(&keys[j - 1], &keys[j]) == Ordering::Greater {
            keys.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Heap sort with natural ordering. Not stable, `O(n log n)` in every case.
///
/// # Examples
///
/// ```
/// use ordered_containers::sort::heap_sort;
///
/// let mut keys = vec!["pear", "apple", "fig"];
/// heap_sort(&mut keys);
/// assert_eq!(keys, ["apple", "fig", "pear"]);
/// ```
pub fn heap_sort<T: Ord>(keys: &mut [T]) {
    util::build_max_heap(keys, &Natural);
    util::pop_into_place(keys, &Natural);
}

/// Heap sort with a custom comparator.
///
/// # Examples
///
/// ```
/// use ordered_containers::sort::heap_sort_by;
///
/// let mut keys = vec![3, 1, 2];
/// heap_sort_by(&mut keys, |a, b| b.cmp(a));
/// assert_eq!(keys, [3, 2, 1]);
/// ```
pub fn heap_sort_by<T, F>(keys: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    util::build_max_heap(keys, &compare);
    util::pop_into_place(keys, &compare);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = vec![];
        insertion_sort(&mut empty);
        heap_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        heap_sort(&mut one);
        assert_eq!(one, [1]);
    }

    #[test]
    fn test_reverse_input() {
        let mut a = vec![5, 4, 3, 2, 1];
        let mut b = a.clone();
        insertion_sort(&mut a);
        heap_sort(&mut b);
        assert_eq!(a, [1, 2, 3, 4, 5]);
        assert_eq!(b, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insertion_sort_is_stable() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        insertion_sort_by(&mut pairs, |x, y| x.0.cmp(&y.0));
        assert_eq!(pairs, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_heap_sort_matches_std() {
        let mut keys = vec![9, -3, 7, 7, 0, 12, -3, 5, 1, 1, 4];
        let mut expected = keys.clone();
        expected.sort();
        heap_sort(&mut keys);
        assert_eq!(keys, expected);
    }
}

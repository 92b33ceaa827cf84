//! An array backed binary max-heap.
//!
//! The keys live in one `Vec` read as a complete binary tree: the children of index `i` sit at
//! `2i + 1` and `2i + 2`. Every key compares greater than or equal to its children under the
//! heap's comparison strategy, so the maximum is always at index `0`.
//!
//! # Examples
//!
//! ```
//! use ordered_containers::PriorityHeap;
//!
//! let mut heap = PriorityHeap::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//! assert_eq!(heap.peek(), Some(&9));
//!
//! heap.insert(7);
//! let mut drained = Vec::new();
//! while let Some(key) = heap.extract() {
//!     drained.push(key);
//! }
//! assert_eq!(drained, [9, 7, 6, 5, 4, 3, 2, 1, 1]);
//! ```
//!
//! A min-heap is a max-heap with the order flipped:
//!
//! ```
//! use ordered_containers::compare::{Natural, Reverse};
//! use ordered_containers::PriorityHeap;
//!
//! let mut heap = PriorityHeap::from_vec_with(vec![3, 1, 2], Reverse(Natural));
//! assert_eq!(heap.extract(), Some(1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Compare, Natural};
use crate::error::{Error, Result};
use crate::util;

/// A binary max-heap ordered by the comparison strategy `C`.
#[derive(Clone)]
pub struct PriorityHeap<T, C = Natural> {
    keys: Vec<T>,
    comparator: C,
}

impl<T: Ord> PriorityHeap<T> {
    /// Generates a new, empty heap using the keys' natural order.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Like [`PriorityHeap::new`] but with room for `capacity` keys before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            comparator: Natural,
        }
    }

    /// Builds a heap out of `keys` in `O(n)` using the keys' natural order.
    pub fn from_vec(keys: Vec<T>) -> Self {
        Self::from_vec_with(keys, Natural)
    }
}

impl<T, C: Default> Default for PriorityHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> PriorityHeap<T, C> {
    /// Generates a new, empty heap ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            keys: Vec::new(),
            comparator,
        }
    }

    /// The number of keys in the heap.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the heap has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The largest key, or `None` if the heap is empty. Never modifies the heap.
    pub fn peek(&self) -> Option<&T> {
        self.keys.first()
    }

    /// The keys in heap order, i.e. the implicit tree read level by level.
    pub fn as_slice(&self) -> &[T] {
        &self.keys
    }

    /// Consumes the heap and returns its keys in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.keys
    }

    /// Drops every key.
    pub fn clear(&mut self) {
        log::debug!("clearing heap of {} keys", self.keys.len());
        self.keys.clear();
    }
}

impl<T, C: Compare<T>> PriorityHeap<T, C> {
    /// Builds a heap out of `keys` in `O(n)`, ordered by `comparator`.
    pub fn from_vec_with(keys: Vec<T>, comparator: C) -> Self {
        let mut heap = Self { keys, comparator };
        heap.heapify();
        heap
    }

    /// Replaces the contents of the heap with `keys`, then restores the heap property over the
    /// whole array in `O(n)`. Cheaper than inserting the keys one by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::PriorityHeap;
    ///
    /// let mut heap = PriorityHeap::new();
    /// heap.insert(100);
    /// heap.build_from([3, 1, 4]);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&4));
    /// ```
    pub fn build_from<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.keys.clear();
        self.keys.extend(keys);
        self.heapify();
    }

    /// Removes and returns the largest key, or `None` if the heap is empty.
    pub fn extract(&mut self) -> Option<T> {
        let last = self.keys.pop()?;
        if self.keys.is_empty() {
            return Some(last);
        }
        let max = std::mem::replace(&mut self.keys[0], last);
        let len = self.keys.len();
        util::sift_down(&mut self.keys, len, 0, &self.comparator);
        Some(max)
    }

    /// Adds `key` to the heap in `O(log n)`.
    ///
    /// The new last slot starts out holding the lesser of `key` and the current last key (or
    /// `key` itself in an empty heap), then gets increased to `key` and climbs towards the root
    /// while its parent compares less than it.
    ///
    /// # Panics
    ///
    /// If the comparator claims `key` is less than that starting value, see
    /// [`PriorityHeap::increase_key`].
    pub fn insert(&mut self, key: T) {
        let placeholder = match self.keys.last() {
            Some(last) if self.comparator.compare(last, &key) == Ordering::Less => last,
            _ => &key,
        };
        self.assert_not_smaller(&key, placeholder);
        self.keys.push(key);
        self.sift_up(self.keys.len() - 1);
    }

    /// [`PriorityHeap::insert`] for a key that may be absent.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `key` is `None`, in which case the heap is unchanged.
    pub fn try_insert(&mut self, key: Option<T>) -> Result<()> {
        let key = key.ok_or(Error::InvalidArgument("insert key is absent"))?;
        self.insert(key);
        Ok(())
    }

    /// Replaces the key at `index` (in [`PriorityHeap::as_slice`] order) with the larger `key`
    /// and moves it up to where it belongs.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds, or if `key` compares less than the key it replaces. Making a
    /// key smaller here would break the heap, which only happens through a misbehaving comparator
    /// or a logic error in the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::PriorityHeap;
    ///
    /// let mut heap = PriorityHeap::from_vec(vec![5, 3, 1]);
    /// let last = heap.len() - 1;
    /// heap.increase_key(last, 10);
    ///
    /// assert_eq!(heap.peek(), Some(&10));
    /// ```
    pub fn increase_key(&mut self, index: usize, key: T) {
        self.assert_not_smaller(&key, &self.keys[index]);
        self.keys[index] = key;
        self.sift_up(index);
    }

    /// Consumes the heap and returns its keys sorted in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        util::pop_into_place(&mut self.keys, &self.comparator);
        self.keys
    }

    fn assert_not_smaller(&self, key: &T, current: &T) {
        assert!(
            self.comparator.compare(key, current) != Ordering::Less,
            "new key is smaller than current key"
        );
    }

    fn heapify(&mut self) {
        log::debug!("building heap from {} keys", self.keys.len());
        util::build_max_heap(&mut self.keys, &self.comparator);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = util::parent(index);
            if self.comparator.compare(&self.keys[parent], &self.keys[index]) != Ordering::Less {
                break;
            }
            self.keys.swap(index, parent);
            index = parent;
        }
        log::trace!("key settled at index {}", index);
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PriorityHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with(iter.into_iter().collect(), C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityHeap").field("keys", &self.keys).finish()
    }
}

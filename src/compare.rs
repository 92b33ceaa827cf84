//! Comparison strategies shared by [`OrderedTree`](crate::OrderedTree) and
//! [`PriorityHeap`](crate::PriorityHeap).
//!
//! Both containers are generic over a strategy `C: Compare<T>` which is handed
//! over at construction. Element types with a natural order get [`Natural`] as
//! the default, so the common case needs no strategy at all.
//!
//! # Examples
//!
//! ```
//! use ordered_containers::compare::{Compare, Natural, Reverse};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reverse(Natural).compare(&1, &2), Ordering::Greater);
//!
//! // Any `Fn(&T, &T) -> Ordering` is a strategy too.
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over `T`.
///
/// Implementations must be consistent: the containers rely on the order being
/// transitive and on `compare(a, b)` being the reverse of `compare(b, a)`.
/// They must also be free of side effects on the container being operated on.
pub trait Compare<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The element type's own [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the wrapped strategy. `PriorityHeap<T, Reverse<Natural>>` is a min-heap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reverse<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

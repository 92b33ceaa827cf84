//! This crate exposes two comparison-driven ordered containers along with a couple of slice sorts.
//!
//! ## Binary Search Tree
//!
//! [`OrderedTree`] is a Binary Search Tree. Each node stores a key and has up to two children.
//! The invariant that makes it useful is:
//!
//! 1. For every node, all the keys in its left subtree compare less than its own key.
//! 2. For every node, all the keys in its right subtree compare greater than or equal to its own
//!    key.
//!
//! Searching, inserting, and deleting take `O(height)`. The tree does not rebalance itself, so the
//! height depends on insertion order. Nodes also point back at their parents which lets any node
//! find its in-order successor and predecessor without a trip from the root.
//!
//! ## Binary Heap
//!
//! [`PriorityHeap`] is a binary max-heap stored in a single array. Every key compares greater than
//! or equal to its children, so the largest key is always at the front. Peeking is `O(1)`,
//! inserting and extracting are `O(log n)`, and building from an existing sequence is `O(n)`.
//!
//! ## Ordering
//!
//! Both containers take a [`Compare`] strategy at construction. Keys with an [`Ord`]
//! implementation can use [`Natural`], the default, and any `Fn(&T, &T) -> Ordering` closure
//! works as a strategy too.
//!
//! Neither container does any locking. Wrap one in a `Mutex` to share it between threads.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
mod error;
pub mod heap;
pub mod sort;
pub mod tree;
mod util;

pub use compare::{Compare, Natural, Reverse};
pub use error::{Error, Result};
pub use heap::PriorityHeap;
pub use tree::{NodeId, NodeRef, OrderedTree};

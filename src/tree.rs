//! An unbalanced Binary Search Tree whose nodes keep parent back-references so that any node can
//! navigate to its minimum, maximum, successor, and predecessor without starting from the root.
//!
//! Nodes live in an arena owned by the tree. Child edges are owning slot indices and parent edges
//! are plain slot indices, so there are no reference cycles and walking upwards is `O(1)` per
//! step. Callers hold [`NodeId`] handles. A handle stays valid until its own node is deleted, no
//! matter how many other nodes are inserted or deleted around it.
//!
//! # Examples
//!
//! ```
//! use ordered_containers::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for key in [5, 3, 8, 1, 4] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//!
//! // `5` has two children so its successor `8` takes its place.
//! let five = tree.search(&5).unwrap();
//! let eight = tree.search(&8).unwrap();
//! assert_eq!(tree.delete(five), Some(5));
//!
//! // The handle for `8` still points at `8`.
//! assert_eq!(tree.key(eight), Some(&8));
//! assert_eq!(tree.root(), Some(eight));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 8]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Compare, Natural};
use crate::error::{Error, Result};

/// A slot index. `None` is the absent child or parent.
type Link = Option<usize>;

/// A handle to a node of an [`OrderedTree`].
///
/// Handles are only meaningful for the tree that produced them. Once the node is deleted the
/// handle goes stale: every lookup with it returns `None`, even after the tree reuses the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

struct Node<T> {
    key: T,
    parent: Link,
    left: Link,
    right: Link,
}

struct Slot<T> {
    // Bumped every time the slot is vacated so older `NodeId`s stop matching.
    generation: u32,
    node: Option<Node<T>>,
}

/// A Binary Search Tree ordered by the comparison strategy `C`. Keys comparing less than a node
/// go to its left subtree and everything else, ties included, goes to its right subtree.
///
/// The tree never rebalances, so every operation is `O(height)` and inserting sorted input
/// degrades it into a list.
pub struct OrderedTree<T, C = Natural> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    root: Link,
    len: usize,
    comparator: C,
}

impl<T: Ord> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree` using the keys' natural order.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Like [`OrderedTree::new`] but with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut tree = Self::new();
        tree.slots.reserve(capacity);
        tree
    }
}

impl<T, C: Default> Default for OrderedTree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> OrderedTree<T, C> {
    /// Generates a new, empty `OrderedTree` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.extend([1, 3, 2]);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
            comparator,
        }
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root.map(|index| self.id(index))
    }

    /// Whether `id` refers to a node currently in this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.resolve(id).is_some()
    }

    /// The key stored in the node `id`, or `None` if the handle is stale.
    pub fn key(&self, id: NodeId) -> Option<&T> {
        self.resolve(id).map(|index| &self.entry(index).key)
    }

    /// A borrowed view of the node `id` for navigating the tree, or `None` if the handle is
    /// stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.extend([20, 10, 30, 25]);
    ///
    /// let root = tree.node(tree.root().unwrap()).unwrap();
    /// assert_eq!(root.key(), &20);
    /// assert_eq!(root.successor().map(|n| *n.key()), Some(25));
    /// assert_eq!(root.predecessor().map(|n| *n.key()), Some(10));
    /// assert_eq!(root.maximum().key(), &30);
    /// ```
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T, C>> {
        self.resolve(id).map(|index| NodeRef { tree: self, index })
    }

    /// The node with the smallest key in the whole tree.
    pub fn minimum(&self) -> Option<NodeId> {
        self.root.map(|root| self.id(self.minimum_index(root)))
    }

    /// The node with the largest key in the whole tree.
    pub fn maximum(&self) -> Option<NodeId> {
        self.root.map(|root| self.id(self.maximum_index(root)))
    }

    /// The smallest node of the subtree rooted at `id`.
    pub fn minimum_of(&self, id: NodeId) -> Option<NodeId> {
        self.resolve(id).map(|index| self.id(self.minimum_index(index)))
    }

    /// The largest node of the subtree rooted at `id`.
    pub fn maximum_of(&self, id: NodeId) -> Option<NodeId> {
        self.resolve(id).map(|index| self.id(self.maximum_index(index)))
    }

    /// The node visited right after `id` in order. `None` if `id` is the largest node or is
    /// stale.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.resolve(id)
            .and_then(|index| self.successor_index(index))
            .map(|index| self.id(index))
    }

    /// The node visited right before `id` in order. `None` if `id` is the smallest node or is
    /// stale.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.resolve(id)
            .and_then(|index| self.predecessor_index(index))
            .map(|index| self.id(index))
    }

    /// Calls `visitor` with every key in ascending order.
    ///
    /// The tree is borrowed for the whole walk so it cannot be modified from inside `visitor`.
    pub fn traverse<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        for key in self.iter() {
            visitor(key);
        }
    }

    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            tree: self,
            next: self.root.map(|root| self.minimum_index(root)),
            remaining: self.len,
        }
    }

    /// Deletes the node `id` and returns its key. Stale handles are ignored and give `None`.
    ///
    /// Only the deleted node goes away. Every other node keeps its identity, so handles the caller
    /// holds to them remain valid, including the handle of the successor that gets spliced into
    /// the deleted node's position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// let one = tree.insert(1);
    /// let two = tree.insert(2);
    ///
    /// assert_eq!(tree.delete(one), Some(1));
    /// assert_eq!(tree.delete(one), None);
    /// assert_eq!(tree.key(two), Some(&2));
    /// ```
    pub fn delete(&mut self, id: NodeId) -> Option<T> {
        let index = self.resolve(id)?;
        let (left, right) = {
            let node = self.entry(index);
            (node.left, node.right)
        };

        match (left, right) {
            (None, right) => {
                log::trace!("delete slot {}: no left child", index);
                self.transplant(index, right);
            }
            (left @ Some(_), None) => {
                log::trace!("delete slot {}: no right child", index);
                self.transplant(index, left);
            }
            (Some(left), Some(right)) => {
                // The successor is the minimum of the right subtree so it has no left child.
                let successor = self.minimum_index(right);
                log::trace!(
                    "delete slot {}: two children, splicing in successor slot {}",
                    index,
                    successor
                );
                if self.entry(successor).parent != Some(index) {
                    let successor_right = self.entry(successor).right;
                    self.transplant(successor, successor_right);
                    self.entry_mut(successor).right = Some(right);
                    self.entry_mut(right).parent = Some(successor);
                }
                self.transplant(index, Some(successor));
                self.entry_mut(successor).left = Some(left);
                self.entry_mut(left).parent = Some(successor);
            }
        }

        self.len -= 1;
        Some(self.release(index).key)
    }

    /// Removes every node. All outstanding handles go stale.
    pub fn clear(&mut self) {
        log::debug!("clearing tree of {} nodes", self.len);
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() && retire_generation(slot) {
                self.free.push(index);
            }
        }
        self.root = None;
        self.len = 0;
    }

    /// Puts `source` where `target` hangs from its parent (or at the root) and points `source`
    /// back at that parent. `target` keeps its own links.
    fn transplant(&mut self, target: usize, source: Link) {
        let parent = self.entry(target).parent;
        match parent {
            None => self.root = source,
            Some(parent) => {
                let parent = self.entry_mut(parent);
                if parent.left == Some(target) {
                    parent.left = source;
                } else {
                    parent.right = source;
                }
            }
        }
        if let Some(source) = source {
            self.entry_mut(source).parent = parent;
        }
    }

    fn minimum_index(&self, mut index: usize) -> usize {
        while let Some(left) = self.entry(index).left {
            index = left;
        }
        index
    }

    fn maximum_index(&self, mut index: usize) -> usize {
        while let Some(right) = self.entry(index).right {
            index = right;
        }
        index
    }

    fn successor_index(&self, index: usize) -> Link {
        if let Some(right) = self.entry(index).right {
            return Some(self.minimum_index(right));
        }
        let mut child = index;
        let mut parent = self.entry(index).parent;
        while let Some(ancestor) = parent {
            let node = self.entry(ancestor);
            if node.right != Some(child) {
                break;
            }
            child = ancestor;
            parent = node.parent;
        }
        parent
    }

    fn predecessor_index(&self, index: usize) -> Link {
        if let Some(left) = self.entry(index).left {
            return Some(self.maximum_index(left));
        }
        let mut child = index;
        let mut parent = self.entry(index).parent;
        while let Some(ancestor) = parent {
            let node = self.entry(ancestor);
            if node.left != Some(child) {
                break;
            }
            child = ancestor;
            parent = node.parent;
        }
        parent
    }

    fn resolve(&self, id: NodeId) -> Link {
        match self.slots.get(id.index) {
            Some(slot) if slot.generation == id.generation && slot.node.is_some() => Some(id.index),
            _ => None,
        }
    }

    fn id(&self, index: usize) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index].generation,
        }
    }

    fn entry(&self, index: usize) -> &Node<T> {
        self.slots[index]
            .node
            .as_ref()
            .expect("Links only point at occupied slots")
    }

    fn entry_mut(&mut self, index: usize) -> &mut Node<T> {
        self.slots[index]
            .node
            .as_mut()
            .expect("Links only point at occupied slots")
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) -> Node<T> {
        let slot = &mut self.slots[index];
        let node = slot.node.take().expect("Released slots are occupied");
        if retire_generation(slot) {
            self.free.push(index);
        }
        node
    }
}

/// Moves a vacated slot to its next generation. Returns `false` once the generation counter is
/// exhausted, in which case the slot is never handed out again.
fn retire_generation<T>(slot: &mut Slot<T>) -> bool {
    match slot.generation.checked_add(1) {
        Some(generation) => {
            slot.generation = generation;
            true
        }
        None => {
            log::debug!("slot generation exhausted, leaving slot unused");
            false
        }
    }
}

impl<T, C: Compare<T>> OrderedTree<T, C> {
    /// Finds a node whose key compares equal to `key`. With duplicate keys this is the one closest
    /// to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// let id = tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(id));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &T) -> Option<NodeId> {
        let mut cursor = self.root;
        while let Some(index) = cursor {
            let node = self.entry(index);
            cursor = match self.comparator.compare(key, &node.key) {
                Ordering::Equal => return Some(self.id(index)),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// [`OrderedTree::search`] for a key that may be absent.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `key` is `None`.
    pub fn try_search(&self, key: Option<&T>) -> Result<Option<NodeId>> {
        let key = key.ok_or(Error::InvalidArgument("search key is absent"))?;
        Ok(self.search(key))
    }

    /// Inserts `key` as a new leaf and returns its handle. Equal keys are kept, the newcomer going
    /// to the right of the existing ones.
    pub fn insert(&mut self, key: T) -> NodeId {
        let mut parent = None;
        let mut goes_left = false;
        let mut cursor = self.root;
        while let Some(index) = cursor {
            let node = self.entry(index);
            goes_left = self.comparator.compare(&key, &node.key) == Ordering::Less;
            parent = Some(index);
            cursor = if goes_left { node.left } else { node.right };
        }

        let index = self.allocate(Node {
            key,
            parent,
            left: None,
            right: None,
        });
        match parent {
            None => self.root = Some(index),
            Some(parent) if goes_left => self.entry_mut(parent).left = Some(index),
            Some(parent) => self.entry_mut(parent).right = Some(index),
        }
        self.len += 1;
        self.id(index)
    }

    /// [`OrderedTree::insert`] for a key that may be absent.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `key` is `None`, in which case the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::{Error, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.try_insert(Some(1)).is_ok());
    /// assert!(matches!(tree.try_insert(None), Err(Error::InvalidArgument(_))));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn try_insert(&mut self, key: Option<T>) -> Result<NodeId> {
        let key = key.ok_or(Error::InvalidArgument("insert key is absent"))?;
        Ok(self.insert(key))
    }
}

impl<T, C: Compare<T>> Extend<T> for OrderedTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for OrderedTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed node of an [`OrderedTree`]. Navigation methods return further views into the same
/// tree.
pub struct NodeRef<'a, T, C = Natural> {
    tree: &'a OrderedTree<T, C>,
    index: usize,
}

impl<'a, T, C> Clone for NodeRef<'a, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, C> Copy for NodeRef<'a, T, C> {}

impl<'a, T, C> NodeRef<'a, T, C> {
    /// The handle of this node.
    pub fn id(&self) -> NodeId {
        self.tree.id(self.index)
    }

    /// The key stored in this node.
    pub fn key(&self) -> &'a T {
        &self.tree.entry(self.index).key
    }

    /// The parent node. `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.tree.entry(self.index).parent.map(|index| self.at(index))
    }

    /// The left child.
    pub fn left(&self) -> Option<Self> {
        self.tree.entry(self.index).left.map(|index| self.at(index))
    }

    /// The right child.
    pub fn right(&self) -> Option<Self> {
        self.tree.entry(self.index).right.map(|index| self.at(index))
    }

    /// The leftmost node of the subtree rooted here. This node itself if it has no left child.
    pub fn minimum(&self) -> Self {
        self.at(self.tree.minimum_index(self.index))
    }

    /// The rightmost node of the subtree rooted here. This node itself if it has no right child.
    pub fn maximum(&self) -> Self {
        self.at(self.tree.maximum_index(self.index))
    }

    /// The next node in order, or `None` if this is the largest node of the tree.
    pub fn successor(&self) -> Option<Self> {
        self.tree
            .successor_index(self.index)
            .map(|index| self.at(index))
    }

    /// The previous node in order, or `None` if this is the smallest node of the tree.
    pub fn predecessor(&self) -> Option<Self> {
        self.tree
            .predecessor_index(self.index)
            .map(|index| self.at(index))
    }

    fn at(&self, index: usize) -> Self {
        Self {
            tree: self.tree,
            index,
        }
    }
}

impl<'a, T: fmt::Debug, C> fmt::Debug for NodeRef<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id())
            .field("key", self.key())
            .finish()
    }
}

/// In-order iterator over the keys of an [`OrderedTree`], created by [`OrderedTree::iter`].
pub struct Iter<'a, T, C = Natural> {
    tree: &'a OrderedTree<T, C>,
    next: Link,
    remaining: usize,
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        self.next = self.tree.successor_index(index);
        self.remaining -= 1;
        Some(&self.tree.entry(index).key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, C> ExactSizeIterator for Iter<'a, T, C> {}

//! The recursive tree node.
//!
//! This module provides [`Node`], an ordered tree where every node owns a
//! payload and a sequence of child nodes of the same type.
//!
//! # Overview
//!
//! - Children are owned by value: no aliasing, no back-pointers, no cycles
//! - Child order is insertion order and is preserved by every operation
//! - Cloning a node produces an independent copy of the whole subtree
//!
//! The collection interface mirrors `Vec`: indexing with `[]` panics on an
//! out-of-range index, [`Node::get`] returns `None` instead.
//!
//! # Examples
//!
//! ```rust
//! use arbor::Node;
//!
//! let mut tree = Node::with_values(1, [2, 3, 4]);
//! assert_eq!(tree.child_count(), 3);
//!
//! let removed = tree.remove_at(1);
//! assert_eq!(removed.value(), &3);
//! assert_eq!(tree[1].value(), &4);
//!
//! assert!(tree.get(5).is_none());
//! ```
//!
//! # Time Complexity
//!
//! | Operation      | Complexity     |
//! |----------------|----------------|
//! | `get` / `[]`   | O(1)           |
//! | `append`       | O(1) amortized |
//! | `insert`       | O(k)           |
//! | `remove_at`    | O(k)           |
//! | `remove_last`  | O(1)           |
//! | `node_count`   | O(n)           |
//! | `==` / `hash`  | O(n)           |
//!
//! `k` is the number of immediate children, `n` the number of nodes in the subtree.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::slice;

use crate::traversal::TraversalOrder;

/// A node of an ordered tree.
///
/// A `Node` holds a payload of type `V` and an ordered list of children.
/// Each child is exclusively owned by its parent, so moving or cloning a
/// node moves or clones its whole subtree.
///
/// # Examples
///
/// ```rust
/// use arbor::Node;
///
/// let tree = Node::with_children("root", [
///     Node::with_values("left", ["a", "b"]),
///     Node::new("right"),
/// ]);
///
/// assert_eq!(tree.value(), &"root");
/// assert_eq!(tree[0].child_count(), 2);
/// assert!(tree[1].is_leaf());
/// ```
#[derive(Clone)]
pub struct Node<V> {
    pub(crate) value: V,
    pub(crate) children: Vec<Self>,
}

impl<V> Node<V> {
    /// Creates a leaf node holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::Node;
    ///
    /// let leaf = Node::new(42);
    /// assert!(leaf.is_leaf());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Creates a node with the given children, in the order given.
    #[must_use]
    pub fn with_children<I>(value: V, children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self {
            value,
            children: children.into_iter().collect(),
        }
    }

    /// Creates a node whose children are leaves holding `values`, in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::Node;
    ///
    /// let tree = Node::with_values(1, [2, 3]);
    /// assert_eq!(tree[0].value(), &2);
    /// assert!(tree[1].is_leaf());
    /// ```
    #[must_use]
    pub fn with_values<I>(value: V, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self {
            value,
            children: values.into_iter().map(Self::new).collect(),
        }
    }

    /// Returns a reference to the payload.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the payload.
    #[inline]
    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the node and returns its payload, dropping the children.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consumes the node and returns its payload and children.
    #[inline]
    pub fn into_parts(self) -> (V, Vec<Self>) {
        (self.value, self.children)
    }

    /// Returns the immediate children.
    #[inline]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the immediate children as a mutable slice.
    ///
    /// The slice allows editing children in place but not adding or
    /// removing them; use [`append`](Self::append) and
    /// [`remove_at`](Self::remove_at) for that.
    #[inline]
    pub fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    /// Returns the number of immediate children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of nodes in this subtree, including `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::Node;
    ///
    /// let tree = Node::with_children(1, [Node::with_values(2, [3, 4]), Node::new(5)]);
    /// assert_eq!(tree.node_count(), 5);
    /// ```
    pub fn node_count(&self) -> usize {
        self.traverse_nodes(TraversalOrder::DepthFirst).count()
    }

    /// Returns the number of edges on the longest path from `self` to a leaf.
    ///
    /// A leaf has height 0.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Returns the child at `index`, or `None` if `index` is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::Node;
    ///
    /// let tree = Node::with_values(1, [2, 3]);
    /// assert_eq!(tree.get(0).map(|child| *child.value()), Some(2));
    /// assert!(tree.get(5).is_none());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Self> {
        self.children.get(index)
    }

    /// Returns the child at `index` mutably, or `None` if `index` is out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.children.get_mut(index)
    }

    /// Replaces the child at `index` and returns the previous child.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.child_count()`.
    #[track_caller]
    pub fn replace_at(&mut self, index: usize, child: Self) -> Self {
        std::mem::replace(&mut self[index], child)
    }

    /// Inserts `child` at `index`, shifting later children to the right.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.child_count()`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, child: Self) {
        let count = self.children.len();
        assert!(
            index <= count,
            "insertion index {index} out of range for node with {count} children"
        );
        self.children.insert(index, child);
    }

    /// Appends `child` after the last child.
    #[inline]
    pub fn append(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Appends a leaf holding `value` after the last child.
    #[inline]
    pub fn append_value(&mut self, value: V) {
        self.children.push(Self::new(value));
    }

    /// Removes and returns the child at `index`, shifting later children to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.child_count()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::Node;
    ///
    /// let mut tree = Node::with_values(1, [2, 3, 4]);
    /// assert_eq!(tree.remove_at(1).into_value(), 3);
    /// assert_eq!(tree, Node::with_values(1, [2, 4]));
    /// ```
    #[track_caller]
    pub fn remove_at(&mut self, index: usize) -> Self {
        let count = self.children.len();
        if index >= count {
            out_of_range(index, count);
        }
        self.children.remove(index)
    }

    /// Removes every child.
    #[inline]
    pub fn remove_all(&mut self) {
        self.children.clear();
    }

    /// Removes and returns the first child.
    ///
    /// # Panics
    ///
    /// Panics if the node is a leaf.
    #[track_caller]
    pub fn remove_first(&mut self) -> Self {
        assert!(!self.is_leaf(), "cannot remove the first child of a leaf node");
        self.children.remove(0)
    }

    /// Removes the first `count` children.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.child_count()`.
    #[track_caller]
    pub fn remove_first_n(&mut self, count: usize) {
        let available = self.children.len();
        assert!(
            count <= available,
            "cannot remove {count} children from a node with {available} children"
        );
        self.children.drain(..count);
    }

    /// Removes and returns the last child.
    ///
    /// # Panics
    ///
    /// Panics if the node is a leaf.
    #[track_caller]
    pub fn remove_last(&mut self) -> Self {
        match self.children.pop() {
            Some(child) => child,
            None => panic!("cannot remove the last child of a leaf node"),
        }
    }

    /// Removes the last `count` children.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.child_count()`.
    #[track_caller]
    pub fn remove_last_n(&mut self, count: usize) {
        let available = self.children.len();
        assert!(
            count <= available,
            "cannot remove {count} children from a node with {available} children"
        );
        self.children.truncate(available - count);
    }

    /// Returns an iterator over the immediate children.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Self> {
        self.children.iter()
    }

    /// Returns an iterator over the immediate children that allows modifying each child.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Self> {
        self.children.iter_mut()
    }
}

#[cold]
#[track_caller]
fn out_of_range(index: usize, count: usize) -> ! {
    panic!("child index {index} out of range for node with {count} children")
}

impl<V> Index<usize> for Node<V> {
    type Output = Self;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.children.get(index) {
            Some(child) => child,
            None => out_of_range(index, self.children.len()),
        }
    }
}

impl<V> IndexMut<usize> for Node<V> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let count = self.children.len();
        match self.children.get_mut(index) {
            Some(child) => child,
            None => out_of_range(index, count),
        }
    }
}

impl<V> From<V> for Node<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V> Extend<Node<V>> for Node<V> {
    fn extend<I: IntoIterator<Item = Node<V>>>(&mut self, children: I) {
        self.children.extend(children);
    }
}

impl<V> Extend<V> for Node<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, values: I) {
        self.children.extend(values.into_iter().map(Self::new));
    }
}

impl<'a, V> IntoIterator for &'a Node<V> {
    type Item = &'a Node<V>;
    type IntoIter = slice::Iter<'a, Node<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut Node<V> {
    type Item = &'a mut Node<V>;
    type IntoIter = slice::IterMut<'a, Node<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter_mut()
    }
}

// =============================================================================
// Equality and Hashing
// =============================================================================

/// Two nodes are equal when their payloads are equal and their children are
/// equal pairwise, in order.
impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.children == other.children
    }
}

impl<V: Eq> Eq for Node<V> {}

/// Computes a hash over the whole subtree.
///
/// The payload is hashed first, then the child count, then every child in
/// order. This ensures that:
///
/// - Equal trees produce equal hash values (Hash-Eq consistency)
/// - Reordering children changes the hash (with high probability)
/// - Moving a node to a different depth changes the hash (with high probability)
///
/// # Examples
///
/// ```rust
/// use arbor::Node;
/// use std::collections::HashSet;
///
/// let mut seen = HashSet::new();
/// seen.insert(Node::with_values(1, [2, 3]));
/// assert!(seen.contains(&Node::with_values(1, [2, 3])));
/// assert!(!seen.contains(&Node::with_values(1, [3, 2])));
/// ```
impl<V: Hash> Hash for Node<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.children.len().hash(state);
        for child in &self.children {
            child.hash(state);
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            formatter.debug_tuple("Node").field(&self.value).finish()
        } else {
            formatter
                .debug_tuple("Node")
                .field(&self.value)
                .field(&self.children)
                .finish()
        }
    }
}

/// Renders the subtree as an indented outline, one payload per line.
///
/// # Examples
///
/// ```rust
/// use arbor::Node;
///
/// let tree = Node::with_children(1, [Node::with_values(2, [5, 6]), Node::new(3)]);
/// assert_eq!(
///     tree.to_string(),
///     "1\n├── 2\n│   ├── 5\n│   └── 6\n└── 3"
/// );
/// ```
impl<V: fmt::Display> fmt::Display for Node<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.value)?;
        write_outline(formatter, &self.children, &mut String::new())
    }
}

fn write_outline<V: fmt::Display>(
    formatter: &mut fmt::Formatter<'_>,
    children: &[Node<V>],
    prefix: &mut String,
) -> fmt::Result {
    for (index, child) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();
        let (branch, indent) = if is_last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        write!(formatter, "\n{prefix}{branch}{}", child.value)?;

        let restore = prefix.len();
        prefix.push_str(indent);
        write_outline(formatter, &child.children, prefix)?;
        prefix.truncate(restore);
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

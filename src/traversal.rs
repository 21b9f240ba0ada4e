//! Depth-first and breadth-first traversal.
//!
//! Both orders visit every node of a subtree exactly once:
//!
//! - [`TraversalOrder::DepthFirst`] is pre-order: a node, then each of its
//!   children's subtrees in order.
//! - [`TraversalOrder::BreadthFirst`] is level order: the root, then all
//!   nodes one level down left to right, and so on.
//!
//! [`Traverse`] is a lazy iterator, so any iterator adapter that stops early
//! (`find`, `take_while`, `all`, ...) stops the walk. The callback-style
//! [`Node::traverse`] and [`Node::try_traverse`] are built on it.
//!
//! # Auxiliary Space
//!
//! | Order          | Space | Storage                                   |
//! |----------------|-------|-------------------------------------------|
//! | `DepthFirst`   | O(h)  | stack of child-slice iterators, one per level |
//! | `BreadthFirst` | O(w)  | FIFO queue of pending nodes               |
//!
//! `h` is the height and `w` the maximum width of the tree.
//!
//! # Examples
//!
//! ```rust
//! use arbor::{Node, TraversalOrder};
//!
//! let tree = Node::with_children(1, [Node::with_values(2, [5, 6]), Node::new(3), Node::new(4)]);
//!
//! let mut visited = Vec::new();
//! let completed = tree.traverse(TraversalOrder::DepthFirst, |value| {
//!     visited.push(*value);
//!     *value != 5
//! });
//!
//! assert!(!completed);
//! assert_eq!(visited, vec![1, 2, 5]);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use smallvec::SmallVec;

use crate::node::Node;

/// Inline capacity of the depth-first stack before it spills to the heap.
const INLINE_DEPTH: usize = 16;

/// The order in which a traversal visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    /// Pre-order: a node before its children, children left to right.
    #[default]
    DepthFirst,
    /// Level order: all nodes at one depth before any node at the next.
    BreadthFirst,
}

enum Pending<'a, V> {
    DepthFirst {
        root: Option<&'a Node<V>>,
        stack: SmallVec<[slice::Iter<'a, Node<V>>; INLINE_DEPTH]>,
    },
    BreadthFirst {
        queue: VecDeque<&'a Node<V>>,
    },
}

/// A lazy iterator over the nodes of a subtree.
///
/// Created by [`Node::traverse_nodes`].
pub struct Traverse<'a, V> {
    pending: Pending<'a, V>,
}

impl<'a, V> Traverse<'a, V> {
    pub(crate) fn new(root: &'a Node<V>, order: TraversalOrder) -> Self {
        let pending = match order {
            TraversalOrder::DepthFirst => Pending::DepthFirst {
                root: Some(root),
                stack: SmallVec::new(),
            },
            TraversalOrder::BreadthFirst => {
                let mut queue = VecDeque::new();
                queue.push_back(root);
                Pending::BreadthFirst { queue }
            }
        };
        Self { pending }
    }

    /// Returns the order this iterator walks in.
    pub const fn order(&self) -> TraversalOrder {
        match self.pending {
            Pending::DepthFirst { .. } => TraversalOrder::DepthFirst,
            Pending::BreadthFirst { .. } => TraversalOrder::BreadthFirst,
        }
    }
}

impl<'a, V> Iterator for Traverse<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.pending {
            Pending::DepthFirst { root, stack } => {
                if let Some(node) = root.take() {
                    if !node.is_leaf() {
                        stack.push(node.children().iter());
                    }
                    return Some(node);
                }
                while let Some(siblings) = stack.last_mut() {
                    if let Some(node) = siblings.next() {
                        if !node.is_leaf() {
                            stack.push(node.children().iter());
                        }
                        return Some(node);
                    }
                    stack.pop();
                }
                None
            }
            Pending::BreadthFirst { queue } => {
                let node = queue.pop_front()?;
                queue.extend(node.children());
                Some(node)
            }
        }
    }
}

impl<V> FusedIterator for Traverse<'_, V> {}

impl<V> fmt::Debug for Traverse<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Traverse")
            .field("order", &self.order())
            .finish_non_exhaustive()
    }
}

/// A lazy iterator over the payloads of a subtree.
///
/// Created by [`Node::values`].
#[derive(Debug)]
pub struct Values<'a, V> {
    nodes: Traverse<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(Node::value)
    }
}

impl<V> FusedIterator for Values<'_, V> {}

impl<V> Node<V> {
    /// Returns a lazy iterator over every node of this subtree in `order`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::{Node, TraversalOrder};
    ///
    /// let tree = Node::with_children(1, [Node::with_values(2, [5, 6]), Node::new(3)]);
    /// let leaves = tree
    ///     .traverse_nodes(TraversalOrder::BreadthFirst)
    ///     .filter(|node| node.is_leaf())
    ///     .count();
    /// assert_eq!(leaves, 3);
    /// ```
    pub fn traverse_nodes(&self, order: TraversalOrder) -> Traverse<'_, V> {
        Traverse::new(self, order)
    }

    /// Returns a lazy iterator over every payload of this subtree in `order`.
    pub fn values(&self, order: TraversalOrder) -> Values<'_, V> {
        Values {
            nodes: self.traverse_nodes(order),
        }
    }

    /// Visits every payload in `order` until `visitor` returns `false`.
    ///
    /// Returns `true` if every node was visited, `false` if the visitor
    /// stopped the traversal. No node is visited after the visitor returns
    /// `false`.
    pub fn traverse<F>(&self, order: TraversalOrder, visitor: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        self.values(order).all(visitor)
    }

    /// Visits every payload in `order` with a fallible visitor.
    ///
    /// Returns `Ok(true)` if every node was visited and `Ok(false)` if the
    /// visitor returned `Ok(false)`. The first error is returned as is and no
    /// further node is visited.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visitor`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::{Node, TraversalOrder};
    ///
    /// let tree = Node::with_values(1, [2, 3]);
    /// let mut seen = Vec::new();
    /// let result = tree.try_traverse(TraversalOrder::DepthFirst, |value| {
    ///     seen.push(*value);
    ///     if *value == 2 { Err("two") } else { Ok(true) }
    /// });
    ///
    /// assert_eq!(result, Err("two"));
    /// assert_eq!(seen, vec![1, 2]);
    /// ```
    pub fn try_traverse<E, F>(&self, order: TraversalOrder, mut visitor: F) -> Result<bool, E>
    where
        F: FnMut(&V) -> Result<bool, E>,
    {
        for value in self.values(order) {
            if !visitor(value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

// =============================================================================
// Tests
// =============================================================================

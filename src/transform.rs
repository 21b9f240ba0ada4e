//! Structure-preserving and flattening transforms.
//!
//! - [`map`](Node::map) / [`map_ref`](Node::map_ref) build a tree of identical
//!   shape whose payloads are the transformed values.
//! - [`try_map`](Node::try_map) / [`try_map_ref`](Node::try_map_ref) stop at
//!   the first failure and return only the error.
//! - [`flat_map`](Node::flat_map) / [`try_flat_map`](Node::try_flat_map)
//!   discard the structure and collect transformed values in traversal order.
//!
//! The mapping transforms call the function in depth-first pre-order.
//!
//! # Laws
//!
//! For any tree `t` and total functions `f` and `g`:
//!
//! ```text
//! t.map_ref(|v| v.clone()) == t                                  // identity
//! t.map_ref(f).map_ref(g) == t.map_ref(|v| g(&f(v)))             // composition
//! t.map_ref(f).node_count() == t.node_count()                    // shape
//! ```

use crate::node::Node;
use crate::traversal::TraversalOrder;

impl<V> Node<V> {
    /// Consumes the tree and returns a tree of the same shape with every
    /// payload replaced by `function(payload)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::Node;
    ///
    /// let tree = Node::with_values(1, [2, 3]);
    /// let labels = tree.map(|value| format!("#{value}"));
    /// let expected = Node::with_values("#1".to_string(), ["#2".to_string(), "#3".to_string()]);
    /// assert_eq!(labels, expected);
    /// ```
    pub fn map<U, F>(self, mut function: F) -> Node<U>
    where
        F: FnMut(V) -> U,
    {
        self.map_with(&mut function)
    }

    fn map_with<U, F>(self, function: &mut F) -> Node<U>
    where
        F: FnMut(V) -> U,
    {
        let value = function(self.value);
        let mut children = Vec::with_capacity(self.children.len());
        for child in self.children {
            children.push(child.map_with(function));
        }
        Node { value, children }
    }

    /// Returns a tree of the same shape with every payload replaced by
    /// `function(&payload)`, leaving `self` untouched.
    pub fn map_ref<U, F>(&self, mut function: F) -> Node<U>
    where
        F: FnMut(&V) -> U,
    {
        self.map_ref_with(&mut function)
    }

    fn map_ref_with<U, F>(&self, function: &mut F) -> Node<U>
    where
        F: FnMut(&V) -> U,
    {
        let value = function(&self.value);
        let mut children = Vec::with_capacity(self.children.len());
        for child in &self.children {
            children.push(child.map_ref_with(function));
        }
        Node { value, children }
    }

    /// Fallible version of [`map`](Self::map).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`. Nodes after the failing
    /// one in pre-order are not transformed and no partial tree is returned.
    pub fn try_map<U, E, F>(self, mut function: F) -> Result<Node<U>, E>
    where
        F: FnMut(V) -> Result<U, E>,
    {
        self.try_map_with(&mut function)
    }

    fn try_map_with<U, E, F>(self, function: &mut F) -> Result<Node<U>, E>
    where
        F: FnMut(V) -> Result<U, E>,
    {
        let value = function(self.value)?;
        let mut children = Vec::with_capacity(self.children.len());
        for child in self.children {
            children.push(child.try_map_with(function)?);
        }
        Ok(Node { value, children })
    }

    /// Fallible version of [`map_ref`](Self::map_ref).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::Node;
    ///
    /// let tree = Node::with_values("1", ["2", "three"]);
    /// assert!(tree.try_map_ref(|text| text.parse::<i32>()).is_err());
    ///
    /// let tree = Node::with_values("1", ["2", "3"]);
    /// assert_eq!(tree.try_map_ref(|text| text.parse::<i32>()), Ok(Node::with_values(1, [2, 3])));
    /// ```
    pub fn try_map_ref<U, E, F>(&self, mut function: F) -> Result<Node<U>, E>
    where
        F: FnMut(&V) -> Result<U, E>,
    {
        self.try_map_ref_with(&mut function)
    }

    fn try_map_ref_with<U, E, F>(&self, function: &mut F) -> Result<Node<U>, E>
    where
        F: FnMut(&V) -> Result<U, E>,
    {
        let value = function(&self.value)?;
        let mut children = Vec::with_capacity(self.children.len());
        for child in &self.children {
            children.push(child.try_map_ref_with(function)?);
        }
        Ok(Node { value, children })
    }

    /// Returns `function(&payload)` for every node, in `order`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::{Node, TraversalOrder};
    ///
    /// let tree = Node::with_children(1, [Node::with_values(2, [5, 6]), Node::new(3)]);
    /// let squares = tree.flat_map(TraversalOrder::BreadthFirst, |value| value * value);
    /// assert_eq!(squares, vec![1, 4, 9, 25, 36]);
    /// ```
    pub fn flat_map<U, F>(&self, order: TraversalOrder, function: F) -> Vec<U>
    where
        F: FnMut(&V) -> U,
    {
        self.values(order).map(function).collect()
    }

    /// Fallible version of [`flat_map`](Self::flat_map).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`; no partial result is
    /// returned.
    pub fn try_flat_map<U, E, F>(&self, order: TraversalOrder, function: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&V) -> Result<U, E>,
    {
        self.values(order).map(function).collect()
    }
}

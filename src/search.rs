//! Predicate search over a subtree.
//!
//! Searches run on top of [`Traverse`](crate::Traverse), so
//! [`find_first`](Node::find_first) stops the walk at the first match while
//! [`find_all`](Node::find_all) always walks the whole subtree. Results come
//! back in the traversal order requested.
//!
//! # Examples
//!
//! ```rust
//! use arbor::{Node, TraversalOrder};
//!
//! let tree = Node::with_children(1, [Node::with_values(2, [5, 6]), Node::new(3), Node::new(4)]);
//!
//! let even = tree.find_first(TraversalOrder::BreadthFirst, |value| value % 2 == 0);
//! assert_eq!(even, Some(&2));
//!
//! let odd: Vec<&i32> = tree.find_all(TraversalOrder::DepthFirst, |value| value % 2 == 1);
//! assert_eq!(odd, vec![&1, &5, &3]);
//! ```

use crate::node::Node;
use crate::traversal::TraversalOrder;

impl<V> Node<V> {
    /// Returns the first payload in `order` that satisfies `predicate`.
    ///
    /// The traversal stops as soon as a match is found.
    pub fn find_first<P>(&self, order: TraversalOrder, mut predicate: P) -> Option<&V>
    where
        P: FnMut(&V) -> bool,
    {
        self.values(order).find(|&value| predicate(value))
    }

    /// Returns the first node in `order` whose payload satisfies `predicate`.
    pub fn find_first_node<P>(&self, order: TraversalOrder, mut predicate: P) -> Option<&Self>
    where
        P: FnMut(&V) -> bool,
    {
        self.traverse_nodes(order).find(|node| predicate(node.value()))
    }

    /// Returns every payload that satisfies `predicate`, in `order`.
    pub fn find_all<P>(&self, order: TraversalOrder, mut predicate: P) -> Vec<&V>
    where
        P: FnMut(&V) -> bool,
    {
        self.values(order).filter(|&value| predicate(value)).collect()
    }

    /// Returns `true` if any payload in the subtree satisfies `predicate`.
    pub fn contains_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        self.find_first(TraversalOrder::DepthFirst, predicate).is_some()
    }

    /// Fallible version of [`find_first`](Self::find_first).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`; nodes after the
    /// failing one are not examined.
    pub fn try_find_first<E, P>(
        &self,
        order: TraversalOrder,
        mut predicate: P,
    ) -> Result<Option<&V>, E>
    where
        P: FnMut(&V) -> Result<bool, E>,
    {
        for value in self.values(order) {
            if predicate(value)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Fallible version of [`find_all`](Self::find_all).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`. No partial result is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::{Node, TraversalOrder};
    ///
    /// let tree = Node::with_values("root", ["12", "x", "7"]);
    /// let result = tree.try_find_all(TraversalOrder::DepthFirst, |value| {
    ///     value.parse::<u32>().map(|number| number > 5)
    /// });
    /// assert!(result.is_err());
    /// ```
    pub fn try_find_all<E, P>(
        &self,
        order: TraversalOrder,
        mut predicate: P,
    ) -> Result<Vec<&V>, E>
    where
        P: FnMut(&V) -> Result<bool, E>,
    {
        let mut found = Vec::new();
        for value in self.values(order) {
            if predicate(value)? {
                found.push(value);
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Node<i32> {
        Node::with_children(
            1,
            [Node::with_values(2, [5, 6]), Node::new(3), Node::new(4)],
        )
    }

    #[rstest]
    #[case(TraversalOrder::DepthFirst, Some(5))]
    #[case(TraversalOrder::BreadthFirst, Some(3))]
    fn test_find_first_depends_on_order(
        #[case] order: TraversalOrder,
        #[case] expected: Option<i32>,
    ) {
        let tree = sample();
        assert_eq!(tree.find_first(order, |value| *value > 2).copied(), expected);
    }

    #[rstest]
    fn test_find_first_stops_at_match() {
        let tree = sample();
        let mut examined = 0;
        let _ = tree.find_first(TraversalOrder::DepthFirst, |value| {
            examined += 1;
            *value == 2
        });
        assert_eq!(examined, 2);
    }

    #[rstest]
    fn test_find_all_returns_empty_without_match() {
        assert!(sample().find_all(TraversalOrder::DepthFirst, |value| *value > 100).is_empty());
    }

    #[rstest]
    fn test_try_find_first_stops_on_error() {
        let tree = sample();
        let mut examined = Vec::new();
        let result: Result<Option<&i32>, String> =
            tree.try_find_first(TraversalOrder::DepthFirst, |value| {
                examined.push(*value);
                if *value == 5 { Err(format!("bad {value}")) } else { Ok(false) }
            });
        assert_eq!(result, Err("bad 5".to_string()));
        assert_eq!(examined, vec![1, 2, 5]);
    }

    #[rstest]
    fn test_find_first_node_returns_subtree() {
        let tree = sample();
        let node = tree.find_first_node(TraversalOrder::DepthFirst, |value| *value == 2);
        assert_eq!(node.map(Node::child_count), Some(2));
    }
}

//! Identity-keyed lookup and mutation.
//!
//! When the payload implements [`Identifiable`], nodes can be addressed by the
//! payload's id instead of by position. Two scopes are offered:
//!
//! - **Tree-wide**: [`find_node`](Node::find_node),
//!   [`find_node_mut`](Node::find_node_mut), [`find_value`](Node::find_value),
//!   [`contains_id`](Node::contains_id), [`append_to`](Node::append_to) and
//!   [`append_value_to`](Node::append_value_to) search the whole subtree in
//!   depth-first pre-order.
//! - **Immediate children**: [`child`](Node::child),
//!   [`child_mut`](Node::child_mut), [`replace_child`](Node::replace_child)
//!   and [`remove_child`](Node::remove_child) only look one level down.
//!
//! Ids are expected to be unique among siblings. When an id occurs more than
//! once, every operation resolves to the first occurrence in pre-order from
//! the receiver: the receiver itself, then its first child's subtree, and so
//! on. Duplicates are never reported as an error.
//!
//! # Examples
//!
//! ```rust
//! use arbor::{Identifiable, Node};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Item {
//!     id: String,
//!     label: &'static str,
//! }
//!
//! impl Identifiable for Item {
//!     type Id = String;
//!
//!     fn id(&self) -> &String {
//!         &self.id
//!     }
//! }
//!
//! let item = |id: &str, label| Item { id: id.to_string(), label };
//!
//! let mut tree = Node::with_values(item("1", "root"), [item("2", "left"), item("3", "right")]);
//!
//! assert!(tree.append_value_to(&"2".to_string(), item("4", "leaf")));
//! assert_eq!(tree.find_value(&"4".to_string()).map(|item| item.label), Some("leaf"));
//! assert_eq!(tree[0].child_count(), 1);
//! assert!(tree[1].is_leaf());
//!
//! assert!(!tree.append_value_to(&"9".to_string(), item("5", "lost")));
//! assert_eq!(tree.node_count(), 4);
//! ```

use crate::node::Node;
use crate::traversal::TraversalOrder;

/// A payload with a stable identity.
///
/// The id must not change while the payload is stored in a tree, and should
/// be unique among the children of any single node.
pub trait Identifiable {
    /// The identity type.
    type Id: PartialEq;

    /// Returns the identity of this payload.
    fn id(&self) -> &Self::Id;
}

macro_rules! identifiable_by_value {
    ($($type:ty),* $(,)?) => {
        $(
            impl Identifiable for $type {
                type Id = Self;

                #[inline]
                fn id(&self) -> &Self::Id {
                    self
                }
            }
        )*
    };
}

identifiable_by_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool, String,
    &'static str,
);

impl<V: Identifiable> Node<V> {
    /// Returns the id of this node's payload.
    #[inline]
    pub fn id(&self) -> &V::Id {
        self.value.id()
    }

    /// Returns the first node in the subtree whose id equals `id`.
    ///
    /// The receiver is checked before any of its descendants.
    pub fn find_node(&self, id: &V::Id) -> Option<&Self> {
        self.traverse_nodes(TraversalOrder::DepthFirst).find(|node| node.id() == id)
    }

    /// Returns the first node in the subtree whose id equals `id`, mutably.
    ///
    /// The returned reference is a handle for editing that subtree in place.
    pub fn find_node_mut(&mut self, id: &V::Id) -> Option<&mut Self> {
        if self.value.id() == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_node_mut(id))
    }

    /// Returns the payload of the first node in the subtree whose id equals `id`.
    pub fn find_value(&self, id: &V::Id) -> Option<&V> {
        self.find_node(id).map(Self::value)
    }

    /// Returns `true` if any node in the subtree has the given id.
    pub fn contains_id(&self, id: &V::Id) -> bool {
        self.find_node(id).is_some()
    }

    /// Returns the first immediate child whose id equals `id`.
    pub fn child(&self, id: &V::Id) -> Option<&Self> {
        self.children.iter().find(|child| child.id() == id)
    }

    /// Returns the first immediate child whose id equals `id`, mutably.
    pub fn child_mut(&mut self, id: &V::Id) -> Option<&mut Self> {
        self.children.iter_mut().find(|child| child.id() == id)
    }

    /// Replaces the first immediate child whose id equals `id`.
    ///
    /// Returns the displaced child, or `None` without changing anything when
    /// no child matches. The replacement keeps the position of the old child
    /// and does not need to share its id.
    pub fn replace_child(&mut self, id: &V::Id, replacement: Self) -> Option<Self> {
        self.child_mut(id).map(|slot| std::mem::replace(slot, replacement))
    }

    /// Removes and returns the first immediate child whose id equals `id`.
    ///
    /// Returns `None` without changing anything when no child matches.
    pub fn remove_child(&mut self, id: &V::Id) -> Option<Self> {
        let position = self.children.iter().position(|child| child.id() == id)?;
        Some(self.children.remove(position))
    }

    /// Appends `child` to the first node in the subtree whose id equals `id`.
    ///
    /// Returns `false` and leaves the tree untouched when no node matches.
    pub fn append_to(&mut self, id: &V::Id, child: Self) -> bool {
        match self.find_node_mut(id) {
            Some(target) => {
                target.append(child);
                true
            }
            None => {
                tracing::trace!("append target not found; tree left unchanged");
                false
            }
        }
    }

    /// Appends a leaf holding `value` to the first node in the subtree whose id equals `id`.
    ///
    /// Returns `false` and leaves the tree untouched when no node matches.
    pub fn append_value_to(&mut self, id: &V::Id, value: V) -> bool {
        self.append_to(id, Self::new(value))
    }
}

//! Field access on node payloads.
//!
//! The tree never looks inside its payloads. To read or rewrite one field of
//! a payload, callers pass an accessor: a [`Lens`] that pairs a getter with a
//! setter. Nodes apply it to their own payload only:
//!
//! - [`Node::field`] reads the focused field
//! - [`Node::set_field`] / [`Node::modify_field`] return the node with the field rewritten
//! - [`Node::map_field`] projects the field of every payload into a tree of the same shape
//!
//! [`FieldLens`] is the stock accessor for a named struct field and is what
//! the [`lens!`](crate::lens) macro builds.
//!
//! # Examples
//!
//! ```
//! use arbor::{lens, Node};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Entry { name: String, size: u64 }
//!
//! let size = lens!(Entry, size);
//! let entry = |name: &str, size| Entry { name: name.to_string(), size };
//!
//! let tree = Node::with_values(entry("/", 0), [entry("a.txt", 12), entry("b.txt", 30)]);
//!
//! let sizes = tree.map_field(&size);
//! assert_eq!(sizes, Node::with_values(0, [12, 30]));
//!
//! let tree = tree.set_field(&size, 42);
//! assert_eq!(*tree.field(&size), 42);
//! ```

use std::fmt;

use crate::node::Node;

/// A getter/setter pair focused on one field `A` of a payload `S`.
///
/// Implementations must agree with themselves: setting a field and reading
/// it back returns the value set, and setting the value just read leaves
/// the payload unchanged.
pub trait Lens<S, A> {
    /// Returns the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Returns `source` with the focused field replaced by `value`.
    fn set(&self, source: S, value: A) -> S;
}

/// An accessor for a named field, built from two plain functions.
///
/// Both functions are `fn` pointers, so a `FieldLens` is `Copy`, `Send` and
/// `Sync` regardless of the payload type.
///
/// # Examples
///
/// ```
/// use arbor::{FieldLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x = FieldLens::new("x", |point: &Point| &point.x, |point: &mut Point, x| point.x = x);
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(*x.get(&point), 10);
/// assert_eq!(x.set(point, 5), Point { x: 5, y: 20 });
/// assert_eq!(x.name(), "x");
/// ```
pub struct FieldLens<S, A> {
    name: &'static str,
    getter: fn(&S) -> &A,
    setter: fn(&mut S, A),
}

impl<S, A> FieldLens<S, A> {
    /// Creates an accessor for the field called `name`.
    #[must_use]
    pub const fn new(name: &'static str, getter: fn(&S) -> &A, setter: fn(&mut S, A)) -> Self {
        Self {
            name,
            getter,
            setter,
        }
    }

    /// Returns the field name given at construction.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<S, A> Lens<S, A> for FieldLens<S, A> {
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, mut source: S, value: A) -> S {
        (self.setter)(&mut source, value);
        source
    }
}

impl<S, A> Clone for FieldLens<S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for FieldLens<S, A> {}

impl<S, A> fmt::Debug for FieldLens<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("FieldLens").field(&self.name).finish()
    }
}

/// Builds a [`FieldLens`] for `field` of payload type `Type`.
///
/// # Examples
///
/// ```
/// use arbor::{lens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Task { title: String, done: bool }
///
/// let done = lens!(Task, done);
/// let task = done.set(Task { title: "write docs".to_string(), done: false }, true);
/// assert!(*done.get(&task));
/// ```
#[macro_export]
macro_rules! lens {
    ($payload:ty, $field:ident) => {
        $crate::optics::FieldLens::new(
            stringify!($field),
            |payload: &$payload| &payload.$field,
            |payload: &mut $payload, value| payload.$field = value,
        )
    };
}

impl<V> Node<V> {
    /// Reads the field of this node's payload focused by `lens`.
    pub fn field<'a, A, L>(&'a self, lens: &L) -> &'a A
    where
        L: Lens<V, A>,
    {
        lens.get(&self.value)
    }

    /// Returns this node with the focused field of its payload set to `value`.
    ///
    /// Children are carried over unchanged.
    #[must_use]
    pub fn set_field<A, L>(self, lens: &L, value: A) -> Self
    where
        L: Lens<V, A>,
    {
        let Self {
            value: payload,
            children,
        } = self;
        Self {
            value: lens.set(payload, value),
            children,
        }
    }

    /// Returns this node with the focused field of its payload rewritten by `function`.
    #[must_use]
    pub fn modify_field<A, L, F>(self, lens: &L, function: F) -> Self
    where
        L: Lens<V, A>,
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = lens.get(&self.value).clone();
        self.set_field(lens, function(current))
    }

    /// Projects the focused field of every payload into a tree of the same shape.
    pub fn map_field<A, L>(&self, lens: &L) -> Node<A>
    where
        L: Lens<V, A>,
        A: Clone,
    {
        self.map_ref(|value| lens.get(value).clone())
    }
}

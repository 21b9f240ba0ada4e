//! # arbor
//!
//! A value-semantic, ordered tree container.
//!
//! ## Overview
//!
//! Every [`Node`] owns a payload and an ordered sequence of child nodes of the
//! same type. Children are owned by value, so a tree is acyclic by
//! construction and cloning a node yields a fully independent copy.
//!
//! On top of the node type the crate layers:
//!
//! - **Traversal**: depth-first (pre-order) and breadth-first walks with early exit
//! - **Search**: first/all lookups driven by a predicate
//! - **Identity**: tree-wide and child-level operations keyed by [`Identifiable::id`]
//! - **Transform**: shape-preserving `map` and order-flattening `flat_map`
//! - **Optics**: field access on payloads through an explicit [`Lens`]
//! - **Codec**: `serde` support with a strict default and a [`Lenient`] mode
//!
//! ## Feature Flags
//!
//! - `optics`: payload field access through [`Lens`] accessors (default)
//! - `serde`: `Serialize`/`Deserialize` for [`Node`], [`codec::decode`] and the
//!   [`Lenient`] decoder (default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use arbor::prelude::*;
//!
//! let tree = Node::with_children(1, [
//!     Node::with_values(2, [5, 6]),
//!     Node::new(3),
//!     Node::new(4),
//! ]);
//!
//! let depth_first: Vec<i32> = tree.values(TraversalOrder::DepthFirst).copied().collect();
//! assert_eq!(depth_first, vec![1, 2, 5, 6, 3, 4]);
//!
//! let breadth_first: Vec<i32> = tree.values(TraversalOrder::BreadthFirst).copied().collect();
//! assert_eq!(breadth_first, vec![1, 2, 3, 4, 5, 6]);
//!
//! let doubled = tree.map_ref(|value| value * 2);
//! assert_eq!(doubled[0][1].value(), &12);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use arbor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::identity::Identifiable;
    pub use crate::node::Node;
    #[cfg(feature = "optics")]
    pub use crate::optics::{FieldLens, Lens};
    pub use crate::traversal::TraversalOrder;

    #[cfg(feature = "serde")]
    pub use crate::codec::Lenient;
}

pub mod identity;
pub mod node;
#[cfg(feature = "optics")]
pub mod optics;
pub mod search;
pub mod transform;
pub mod traversal;

#[cfg(feature = "serde")]
pub mod codec;

pub use identity::Identifiable;
pub use node::Node;
#[cfg(feature = "optics")]
pub use optics::{FieldLens, Lens};
pub use traversal::{Traverse, TraversalOrder, Values};

#[cfg(feature = "serde")]
pub use codec::{DecodeError, Lenient};

//! Serde support for [`Node`].
//!
//! A node is encoded as a struct with exactly two fields:
//!
//! ```text
//! { "value": <payload>, "children": [ <node>, ... ] }
//! ```
//!
//! `children` is always written, as an empty sequence for a leaf.
//!
//! # Decoding Policies
//!
//! | Type          | Malformed child entry                                     |
//! |---------------|-----------------------------------------------------------|
//! | [`Node<V>`]   | the whole decode fails with the format's own error        |
//! | [`Lenient<V>`]| the entry and its descendants are dropped and counted     |
//!
//! [`decode`] applies the strict rules and additionally reports the path of
//! the failing child in a [`DecodeError`].
//!
//! The strict decoder also accepts a missing `children` field (read as no
//! children) and the sequence form `[value, children]` used by
//! non-self-describing formats. Unknown and duplicate fields are rejected.
//!
//! # Examples
//!
//! ```rust
//! use arbor::{Lenient, Node};
//!
//! let tree = Node::with_values(1, [2, 3]);
//! let json = serde_json::to_string(&tree).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"value":1,"children":[{"value":2,"children":[]},{"value":3,"children":[]}]}"#
//! );
//! assert_eq!(serde_json::from_str::<Node<i32>>(&json).unwrap(), tree);
//!
//! let damaged = r#"{"value":1,"children":[{"value":2},{"value":"three"}]}"#;
//! assert!(serde_json::from_str::<Node<i32>>(damaged).is_err());
//!
//! let lenient: Lenient<i32> = serde_json::from_str(damaged).unwrap();
//! assert_eq!(lenient.skipped(), 1);
//! assert_eq!(lenient.into_tree(), Node::with_values(1, [2]));
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::node::Node;

const NODE_NAME: &str = "Node";
const FIELDS: &[&str] = &["value", "children"];

// =============================================================================
// Encoding
// =============================================================================

impl<V: Serialize> Serialize for Node<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct(NODE_NAME, FIELDS.len())?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

// =============================================================================
// Strict Decoding
// =============================================================================

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
    Value,
    Children,
}

/// Child indices from the root down to the node being decoded.
///
/// An index is pushed before a child is decoded and popped once it decodes,
/// so after a failure the path names the failing child.
type ChildPath = Vec<usize>;

struct NodeSeed<'p, V> {
    path: &'p mut ChildPath,
    marker: PhantomData<V>,
}

impl<'p, V> NodeSeed<'p, V> {
    const fn new(path: &'p mut ChildPath) -> Self {
        Self {
            path,
            marker: PhantomData,
        }
    }
}

impl<'de, V> DeserializeSeed<'de> for NodeSeed<'_, V>
where
    V: Deserialize<'de>,
{
    type Value = Node<V>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct(NODE_NAME, FIELDS, self)
    }
}

impl<'de, V> Visitor<'de> for NodeSeed<'_, V>
where
    V: Deserialize<'de>,
{
    type Value = Node<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a tree node with `value` and `children`")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut value = None;
        let mut children = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Value => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    value = Some(map.next_value()?);
                }
                Field::Children => {
                    if children.is_some() {
                        return Err(de::Error::duplicate_field("children"));
                    }
                    children = Some(map.next_value_seed(ChildrenSeed::new(&mut *self.path))?);
                }
            }
        }
        let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
        Ok(Node {
            value,
            children: children.unwrap_or_default(),
        })
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let value = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &"a `[value, children]` pair"))?;
        let children = seq
            .next_element_seed(ChildrenSeed::new(self.path))?
            .ok_or_else(|| de::Error::invalid_length(1, &"a `[value, children]` pair"))?;
        Ok(Node { value, children })
    }
}

struct ChildrenSeed<'p, V> {
    path: &'p mut ChildPath,
    marker: PhantomData<V>,
}

impl<'p, V> ChildrenSeed<'p, V> {
    const fn new(path: &'p mut ChildPath) -> Self {
        Self {
            path,
            marker: PhantomData,
        }
    }
}

impl<'de, V> DeserializeSeed<'de> for ChildrenSeed<'_, V>
where
    V: Deserialize<'de>,
{
    type Value = Vec<Node<V>>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }
}

impl<'de, V> Visitor<'de> for ChildrenSeed<'_, V>
where
    V: Deserialize<'de>,
{
    type Value = Vec<Node<V>>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of tree nodes")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // Cap the preallocation: the size hint comes from untrusted input.
        let mut children = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(1024));
        loop {
            self.path.push(children.len());
            match seq.next_element_seed(NodeSeed::new(&mut *self.path))? {
                Some(child) => children.push(child),
                None => {
                    self.path.pop();
                    return Ok(children);
                }
            }
            self.path.pop();
        }
    }
}

impl<'de, V> Deserialize<'de> for Node<V>
where
    V: Deserialize<'de>,
{
    /// Decodes a tree, returning the format's own error unchanged on failure.
    ///
    /// Use [`decode`] to also learn which child failed.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        NodeSeed::new(&mut ChildPath::new()).deserialize(deserializer)
    }
}

/// A strict decoding failure together with the child that caused it.
///
/// The wrapped error is the format's error, untouched, so format-specific
/// classification (end of input, syntax, data) remains available through
/// [`inner`](Self::inner).
#[derive(Debug, thiserror::Error)]
#[error("{}{source}", ChildPathDisplay(.path))]
pub struct DecodeError<E> {
    path: ChildPath,
    source: E,
}

impl<E> DecodeError<E> {
    /// Returns the child indices from the root down to the failing node.
    ///
    /// The path is empty when the root itself failed.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Returns the format's error.
    pub const fn inner(&self) -> &E {
        &self.source
    }

    /// Consumes the wrapper and returns the format's error.
    pub fn into_inner(self) -> E {
        self.source
    }
}

struct ChildPathDisplay<'a>(&'a [usize]);

impl fmt::Display for ChildPathDisplay<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in self.0 {
            write!(formatter, "children[{index}]: ")?;
        }
        Ok(())
    }
}

/// Strictly decodes a tree and reports the path of the failing child.
///
/// The decoding rules are those of the `Deserialize` impl for [`Node`].
///
/// # Errors
///
/// Returns a [`DecodeError`] wrapping the format's error and the child path
/// at which decoding stopped.
///
/// # Examples
///
/// ```rust
/// use arbor::{Node, codec};
///
/// let json = r#"{"value":1,"children":[{"value":2},{"value":3,"children":[{"value":"x"}]}]}"#;
/// let mut deserializer = serde_json::Deserializer::from_str(json);
/// let error = codec::decode::<_, i32>(&mut deserializer).unwrap_err();
///
/// assert_eq!(error.path(), &[1, 0]);
/// assert!(error.to_string().starts_with("children[1]: children[0]: "));
/// assert!(error.inner().is_data());
/// ```
pub fn decode<'de, D, V>(deserializer: D) -> Result<Node<V>, DecodeError<D::Error>>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    let mut path = ChildPath::new();
    let decoded = NodeSeed::new(&mut path).deserialize(deserializer);
    decoded.map_err(|source| DecodeError { path, source })
}

// =============================================================================
// Lenient Decoding
// =============================================================================

/// A tree decoded with the skip-on-error policy.
///
/// Any entry of a `children` sequence that cannot be decoded as a node is
/// dropped together with everything below it, and counted. Entries below a
/// successfully decoded child are judged independently, so one bad leaf only
/// costs that leaf. The root itself must decode; otherwise deserialization
/// fails as it would for [`Node`].
///
/// Each dropped entry is logged with `tracing::warn!` carrying its depth and
/// its index among its siblings.
///
/// Lenient decoding buffers each child before deciding, so it requires a
/// self-describing format such as JSON. Buffering reads values without a
/// type hint, which loses payloads that a format can only produce when asked
/// for the exact type. In JSON this affects integers outside the 64-bit
/// range: a `Lenient<u128>` or `Lenient<i128>` counts such children as
/// skipped even though [`Node`] decodes them. The root is read directly and
/// is not affected. Decode those trees strictly.
///
/// # Examples
///
/// ```rust
/// use arbor::{Lenient, Node};
///
/// let json = r#"{"value":"root","children":[{"value":"a","children":[{"oops":true}]},{"value":"b"}]}"#;
/// let decoded: Lenient<String> = serde_json::from_str(json).unwrap();
///
/// assert_eq!(decoded.skipped(), 1);
/// assert_eq!(decoded.tree().node_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lenient<V> {
    tree: Node<V>,
    skipped: usize,
}

impl<V> Lenient<V> {
    /// Returns the decoded tree.
    pub const fn tree(&self) -> &Node<V> {
        &self.tree
    }

    /// Returns the number of child entries that were dropped.
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns `true` if no entry was dropped.
    pub const fn is_complete(&self) -> bool {
        self.skipped == 0
    }

    /// Consumes the wrapper and returns the decoded tree.
    pub fn into_tree(self) -> Node<V> {
        self.tree
    }

    /// Consumes the wrapper and returns the decoded tree and the number of dropped entries.
    pub fn into_parts(self) -> (Node<V>, usize) {
        (self.tree, self.skipped)
    }
}

impl<V> From<Lenient<V>> for Node<V> {
    fn from(lenient: Lenient<V>) -> Self {
        lenient.tree
    }
}

impl<V: Serialize> Serialize for Lenient<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.tree.serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LenientRaw<V> {
    value: V,
    #[serde(default = "Vec::new")]
    children: Vec<LenientEntry<V>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientEntry<V> {
    Node(LenientRaw<V>),
    #[allow(dead_code)]
    Invalid(IgnoredAny),
}

impl<V> LenientRaw<V> {
    fn into_node(self, depth: usize, skipped: &mut usize) -> Node<V> {
        let mut children = Vec::with_capacity(self.children.len());
        for (index, entry) in self.children.into_iter().enumerate() {
            match entry {
                LenientEntry::Node(raw) => children.push(raw.into_node(depth + 1, skipped)),
                LenientEntry::Invalid(_) => {
                    *skipped += 1;
                    tracing::warn!(depth = depth + 1, index, "dropping undecodable child entry");
                }
            }
        }
        Node {
            value: self.value,
            children,
        }
    }
}

impl<'de, V> Deserialize<'de> for Lenient<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = LenientRaw::<V>::deserialize(deserializer)?;
        let mut skipped = 0;
        let tree = raw.into_node(0, &mut skipped);
        if skipped > 0 {
            tracing::debug!(skipped, "lenient decode finished with dropped entries");
        }
        Ok(Self { tree, skipped })
    }
}

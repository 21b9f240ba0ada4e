#![cfg(feature = "optics")]

//! Unit tests for lens-based field access on node payloads.

use arbor::{FieldLens, Lens, Node, TraversalOrder, lens};
use rstest::{fixture, rstest};

#[derive(Debug, Clone, PartialEq)]
struct File {
    name: String,
    bytes: u64,
}

fn file(name: &str, bytes: u64) -> File {
    File {
        name: name.to_string(),
        bytes,
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Labelled<T> {
    label: T,
    weight: u8,
}

#[fixture]
fn files() -> Node<File> {
    Node::with_children(
        file("/", 0),
        [
            Node::with_values(file("src", 0), [file("lib.rs", 1200), file("node.rs", 5400)]),
            Node::new(file("Cargo.toml", 300)),
        ],
    )
}

fn shape<V>(node: &Node<V>) -> Vec<usize> {
    node.traverse_nodes(TraversalOrder::DepthFirst)
        .map(Node::child_count)
        .collect()
}

// =============================================================================
// Node Field Operations
// =============================================================================

#[rstest]
fn test_map_field_projects_every_node(files: Node<File>) {
    let bytes = lens!(File, bytes);
    let sizes = files.map_field(&bytes);
    assert_eq!(shape(&sizes), shape(&files));
    let total: u64 = sizes.values(TraversalOrder::DepthFirst).sum();
    assert_eq!(total, 6900);
}

#[rstest]
fn test_field_reads_own_payload_only(files: Node<File>) {
    let name = lens!(File, name);
    assert_eq!(files.field(&name), "/");
    assert_eq!(files[0].field(&name), "src");
}

#[rstest]
fn test_set_field_on_child(mut files: Node<File>) {
    let bytes = lens!(File, bytes);
    let manifest = files.remove_at(1).set_field(&bytes, 42);
    files.append(manifest);
    assert_eq!(*files[1].field(&bytes), 42);
    assert_eq!(files[1].value().name, "Cargo.toml");
}

#[rstest]
fn test_modify_field_with_explicit_accessor(files: Node<File>) {
    let name = FieldLens::new(
        "name",
        |file: &File| &file.name,
        |file: &mut File, name| file.name = name,
    );
    let renamed = files.modify_field(&name, |name| format!("{name}root"));
    assert_eq!(renamed.value().name, "/root");
    assert_eq!(renamed.child_count(), 2);
}

#[rstest]
fn test_modify_field_matches_set_field() {
    let bytes = lens!(File, bytes);
    let node = Node::with_values(file("a", 1), [file("b", 5)]);
    let modified = node.clone().modify_field(&bytes, |value| value + 1);
    assert_eq!(modified, node.set_field(&bytes, 2));
}

// =============================================================================
// Accessor Laws
// =============================================================================

#[rstest]
#[case(file("a", 1), 7)]
#[case(file("b", 0), 0)]
#[case(file("c", u64::MAX), 3)]
fn test_set_then_get_returns_value(#[case] source: File, #[case] value: u64) {
    let bytes = lens!(File, bytes);
    assert_eq!(*bytes.get(&bytes.set(source, value)), value);
}

#[rstest]
fn test_setting_current_value_is_identity() {
    let name = lens!(File, name);
    let source = file("same", 9);
    let current = name.get(&source).clone();
    assert_eq!(name.set(source.clone(), current), source);
}

#[rstest]
fn test_second_set_wins() {
    let bytes = lens!(File, bytes);
    let twice = bytes.set(bytes.set(file("a", 1), 2), 3);
    assert_eq!(twice, bytes.set(file("a", 1), 3));
}

// =============================================================================
// Generic Payloads
// =============================================================================

#[rstest]
fn test_lens_on_generic_payload() {
    let label = lens!(Labelled<&'static str>, label);
    let labelled = |label, weight| Labelled { label, weight };
    let tree = Node::with_values(labelled("root", 1), [labelled("leaf", 2)]);
    let labels = tree.map_field(&label);
    assert_eq!(labels, Node::with_values("root", ["leaf"]));
    assert_eq!(tree[0].value().weight, 2);
    assert_eq!(label.name(), "label");
}

#[rstest]
fn test_field_lens_is_copy() {
    let bytes = lens!(File, bytes);
    let copy = bytes;
    assert_eq!(*bytes.get(&file("x", 4)), *copy.get(&file("x", 4)));
}

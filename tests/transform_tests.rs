//! Unit tests for map / flat-map transforms.

use arbor::{Node, TraversalOrder};
use rstest::{fixture, rstest};

/// `1 -> [2 -> [5, 6], 3, 4]`
#[fixture]
fn sample() -> Node<i32> {
    Node::with_children(1, [Node::with_values(2, [5, 6]), Node::new(3), Node::new(4)])
}

fn shape<V>(node: &Node<V>) -> Vec<usize> {
    node.traverse_nodes(TraversalOrder::DepthFirst)
        .map(Node::child_count)
        .collect()
}

// =============================================================================
// map / map_ref
// =============================================================================

#[rstest]
fn test_map_preserves_shape(sample: Node<i32>) {
    let expected_shape = shape(&sample);
    let mapped = sample.map(|value| value.to_string());
    assert_eq!(shape(&mapped), expected_shape);
    assert_eq!(mapped[0][1].value(), "6");
}

#[rstest]
fn test_map_ref_matches_map(sample: Node<i32>) {
    let by_reference = sample.map_ref(|value| value * 3);
    let by_value = sample.clone().map(|value| value * 3);
    assert_eq!(by_reference, by_value);
}

#[rstest]
fn test_map_changes_payload_type(sample: Node<i32>) {
    let flags = sample.map_ref(|value| value % 2 == 0);
    assert_eq!(
        flags,
        Node::with_children(
            false,
            [Node::with_values(true, [false, true]), Node::new(false), Node::new(true)],
        )
    );
}

#[rstest]
fn test_map_moves_non_clone_payloads() {
    struct Token(u8);
    let tree = Node::with_values(Token(1), [Token(2)]);
    let numbers = tree.map(|Token(number)| number);
    assert_eq!(numbers, Node::with_values(1, [2]));
}

// =============================================================================
// try_map / try_map_ref
// =============================================================================

#[rstest]
fn test_try_map_success() {
    let tree = Node::with_values("10", ["20", "30"]);
    let parsed = tree.try_map(|text| text.parse::<u8>());
    assert_eq!(parsed, Ok(Node::with_values(10, [20, 30])));
}

#[rstest]
fn test_try_map_failure_returns_only_the_error() {
    let tree = Node::with_children("1", [Node::with_values("2", ["nope", "4"]), Node::new("bad")]);
    let mut attempted = Vec::new();
    let result = tree.try_map_ref(|text| {
        attempted.push(*text);
        text.parse::<i32>().map_err(|_| format!("cannot parse {text}"))
    });
    assert_eq!(result, Err("cannot parse nope".to_string()));
    assert_eq!(attempted, vec!["1", "2", "nope"]);
}

// =============================================================================
// flat_map
// =============================================================================

#[rstest]
#[case(TraversalOrder::DepthFirst, vec![10, 20, 50, 60, 30, 40])]
#[case(TraversalOrder::BreadthFirst, vec![10, 20, 30, 40, 50, 60])]
fn test_flat_map_order(
    sample: Node<i32>,
    #[case] order: TraversalOrder,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(sample.flat_map(order, |value| value * 10), expected);
}

#[rstest]
fn test_try_flat_map_failure(sample: Node<i32>) {
    let result = sample.try_flat_map(TraversalOrder::DepthFirst, |value| {
        u8::try_from(value * 100)
    });
    assert!(result.is_err());
}

#[rstest]
fn test_try_flat_map_success(sample: Node<i32>) {
    let result = sample.try_flat_map(TraversalOrder::BreadthFirst, |value| u8::try_from(*value));
    assert_eq!(result, Ok(vec![1, 2, 3, 4, 5, 6]));
}

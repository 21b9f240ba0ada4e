//! Benchmark for Node traversal, search and transforms.
//!
//! Trees are built with a fixed branching factor so that depth-first and
//! breadth-first costs can be compared at several sizes.

use arbor::{Node, TraversalOrder};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const BRANCHING: usize = 4;

/// Builds a complete tree with `BRANCHING` children per inner node whose
/// payloads are breadth-first positions.
fn build_tree(size: usize) -> Node<usize> {
    fn build(index: usize, size: usize) -> Node<usize> {
        let first_child = index * BRANCHING + 1;
        let children = (first_child..first_child + BRANCHING)
            .filter(|child| *child < size)
            .map(|child| build(child, size));
        Node::with_children(index, children)
    }
    build(0, size)
}

// =============================================================================
// Traversal Benchmark
// =============================================================================

fn benchmark_traverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traverse");

    for size in [100, 1000, 10000] {
        let tree = build_tree(size);

        for order in [TraversalOrder::DepthFirst, TraversalOrder::BreadthFirst] {
            group.bench_with_input(
                BenchmarkId::new(format!("{order:?}"), size),
                &tree,
                |bencher, tree| {
                    bencher.iter(|| {
                        let mut sum = 0_usize;
                        tree.traverse(order, |value| {
                            sum += black_box(*value);
                            true
                        });
                        black_box(sum)
                    });
                },
            );
        }
    }

    group.finish();
}

// =============================================================================
// Search Benchmark
// =============================================================================

fn benchmark_find(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find");

    for size in [100, 1000, 10000] {
        let tree = build_tree(size);
        let target = size - 1;

        group.bench_with_input(
            BenchmarkId::new("find_first_last_value", size),
            &tree,
            |bencher, tree| {
                bencher.iter(|| {
                    black_box(tree.find_first(TraversalOrder::DepthFirst, |value| {
                        *value == black_box(target)
                    }))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("find_node_by_id", size),
            &tree,
            |bencher, tree| {
                bencher.iter(|| black_box(tree.find_node(black_box(&target))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Transform Benchmark
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in [100, 1000, 10000] {
        let tree = build_tree(size);

        group.bench_with_input(BenchmarkId::new("map_ref", size), &tree, |bencher, tree| {
            bencher.iter(|| black_box(tree.map_ref(|value| value * 2)));
        });

        group.bench_with_input(
            BenchmarkId::new("clone_then_map", size),
            &tree,
            |bencher, tree| {
                bencher.iter(|| black_box(tree.clone().map(|value| value * 2)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("flat_map", size),
            &tree,
            |bencher, tree| {
                bencher.iter(|| {
                    black_box(tree.flat_map(TraversalOrder::BreadthFirst, |value| value + 1))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_traverse, benchmark_find, benchmark_map);
criterion_main!(benches);

//! Benchmarks for graph query performance
//!
//! Classification rebuilds its adjacency snapshot on every call, and the
//! walks share per-vertex results across starts, so these track how both
//! scale with layered graphs of growing width and depth.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphscope::graph::{Edge, Graph, Node};

/// Create a layered DAG where every node links to `fan_out` nodes in the next layer
fn create_layered_graph(layers: u32, width: u32, fan_out: u32) -> Graph<u32> {
    let mut graph = Graph::new();
    let id = |layer: u32, slot: u32| layer * width + slot + 1;

    for layer in 0..layers {
        for slot in 0..width {
            graph.add_node(Node::new(id(layer, slot)));
        }
    }

    for layer in 0..layers.saturating_sub(1) {
        for slot in 0..width {
            for offset in 0..fan_out {
                let target = (slot + offset) % width;
                let edge = Edge::new(id(layer, slot), id(layer + 1, target))
                    .expect("layered ids start at 1");
                graph.add_edge(edge);
            }
        }
    }

    graph
}

/// Benchmark root/leaf/orphan classification
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    for width in [10u32, 50, 200] {
        let graph = create_layered_graph(5, width, 2);
        group.bench_with_input(BenchmarkId::new("root_nodes", width), &graph, |b, graph| {
            b.iter(|| black_box(graph.root_nodes().len()))
        });
        group.bench_with_input(BenchmarkId::new("leaf_nodes", width), &graph, |b, graph| {
            b.iter(|| black_box(graph.leaf_nodes().len()))
        });
    }

    group.finish();
}

/// Benchmark the path walks
fn bench_walks(c: &mut Criterion) {
    let mut group = c.benchmark_group("walks");

    for layers in [8u32, 32, 128] {
        let graph = create_layered_graph(layers, 8, 2);
        group.bench_with_input(BenchmarkId::new("max_depth", layers), &graph, |b, graph| {
            b.iter(|| black_box(graph.max_depth()))
        });
        group.bench_with_input(
            BenchmarkId::new("has_circular_paths", layers),
            &graph,
            |b, graph| b.iter(|| black_box(graph.has_circular_paths())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_classification, bench_walks);
criterion_main!(benches);

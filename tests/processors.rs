//! Epoch processor invariants: WTM degenerating to an unweighted mean at
//! zero neighbour weight, the two-vertex WTM smoothing worked example,
//! CHL inducing a square's sides, and Welford's reduction matching a
//! sequential pass over the same values.

mod common;

use std::sync::Arc;

use gngt_core::{Graph, Processor, VertexData, Void, Welford, Wtm};

use common::{grid_samples, PlaneModel, PlaneVertex, Point2};

#[test]
fn wtm_with_zero_neighbour_weight_equals_wta_mean() {
    let mut graph: Graph<PlaneVertex, Void> = Graph::new();
    let left = graph.add_vertex(VertexData::new(Point2::new(-1.0, 0.0)));
    let right = graph.add_vertex(VertexData::new(Point2::new(1.0, 0.0)));
    graph.connect(&left, &right, Void).unwrap();

    let proc = Processor::with_graph(&mut graph);
    let model = PlaneModel::new(0.0);

    // left wins everything near -1, right wins everything near +1; with
    // neighbour_weight == 0 the other vertex's contribution is below any
    // positive epsilon and is excluded, so each prototype becomes the
    // unweighted mean of exactly the samples it won.
    let samples = vec![
        Point2::new(-1.1, 0.0),
        Point2::new(-0.9, 0.2),
        Point2::new(0.9, -0.1),
        Point2::new(1.2, 0.1),
    ];

    let wtm = Wtm;
    wtm.update_prototypes(proc.index(), 1, &samples, &model, 1, 1e-9)
        .unwrap();

    let left_expected = Point2::new((-1.1 + -0.9) / 2.0, (0.0 + 0.2) / 2.0);
    let right_expected = Point2::new((0.9 + 1.2) / 2.0, (-0.1 + 0.1) / 2.0);

    let left_got = left.read().prototype;
    let right_got = right.read().prototype;

    assert!((left_got.x - left_expected.x).abs() < 1e-12);
    assert!((left_got.y - left_expected.y).abs() < 1e-12);
    assert!((right_got.x - right_expected.x).abs() < 1e-12);
    assert!((right_got.y - right_expected.y).abs() < 1e-12);
}

#[test]
fn scenario_d_wtm_smoothing_pulls_both_prototypes_toward_each_other() {
    // Two vertices at (-1, 0) and (1, 0), one edge between them, and one
    // sample exactly at each. Each vertex accumulates its own win at full
    // weight (h(0) == 1) plus half weight (neighbour_weight == 0.5) from
    // the other vertex's win reaching it across the edge at distance 1:
    // left's total is (-1,0)*1 + (1,0)*0.5 over weight 1.5, i.e. (-1/3, 0).
    let mut graph: Graph<PlaneVertex, Void> = Graph::new();
    let left = graph.add_vertex(VertexData::new(Point2::new(-1.0, 0.0)));
    let right = graph.add_vertex(VertexData::new(Point2::new(1.0, 0.0)));
    graph.connect(&left, &right, Void).unwrap();

    let proc = Processor::with_graph(&mut graph);
    let model = PlaneModel::new(0.5);
    let samples = vec![Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0)];

    let wtm = Wtm;
    wtm.update_prototypes(proc.index(), 1, &samples, &model, 1, 1e-9)
        .unwrap();

    let left_got = left.read().prototype;
    let right_got = right.read().prototype;

    assert!((left_got.x - (-1.0 / 3.0)).abs() < 1e-12);
    assert!(left_got.y.abs() < 1e-12);
    assert!((right_got.x - (1.0 / 3.0)).abs() < 1e-12);
    assert!(right_got.y.abs() < 1e-12);
}

#[test]
fn scenario_c_chl_induces_the_square_sides_and_never_a_self_loop() {
    // Four corners of a unit square: every two-nearest split the dense
    // grid below induces is exactly one of the four sides. The two
    // diagonal pairs are geometrically tied against an adjacent pair
    // everywhere except the exact centre, and `two_nearest`'s lowest-
    // index tie-break (`src/processors/mod.rs`) always resolves such a
    // tie toward the adjacent corner here, so neither diagonal is ever
    // requested for this vertex insertion order.
    let mut graph: Graph<PlaneVertex, Void> = Graph::new();
    let v00 = graph.add_vertex(VertexData::new(Point2::new(0.0, 0.0)));
    let v10 = graph.add_vertex(VertexData::new(Point2::new(1.0, 0.0)));
    let v11 = graph.add_vertex(VertexData::new(Point2::new(1.0, 1.0)));
    let v01 = graph.add_vertex(VertexData::new(Point2::new(0.0, 1.0)));

    let proc = Processor::with_graph(&mut graph);
    let model = PlaneModel::new(0.1);
    let samples = grid_samples(20);

    let chl = gngt_core::Chl;
    chl.update_edges(&mut graph, proc.index(), 1, &samples, &model)
        .unwrap();

    assert!(graph.find_edge(&v00, &v10).is_some(), "bottom side missing");
    assert!(graph.find_edge(&v10, &v11).is_some(), "right side missing");
    assert!(graph.find_edge(&v11, &v01).is_some(), "top side missing");
    assert!(graph.find_edge(&v01, &v00).is_some(), "left side missing");
    assert!(graph.find_edge(&v00, &v11).is_none(), "unexpected diagonal");
    assert!(graph.find_edge(&v10, &v01).is_none(), "unexpected diagonal");
    assert_eq!(graph.count_edges(), 4);

    let mut self_loop = false;
    graph.for_each_edge(|e| {
        if let Some((a, b)) = e.endpoints() {
            if Arc::ptr_eq(&a, &b) {
                self_loop = true;
            }
        }
    });
    assert!(!self_loop);
}

#[test]
fn welford_reduction_matches_sequential_computation() {
    let values: Vec<f64> = (0..997).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();

    let mut sequential = Welford::new();
    for &x in &values {
        sequential.update(x);
    }

    // Partition into an uneven set of chunks and merge pairwise, the way
    // the epoch-processor reduction combines per-thread accumulators.
    let chunk_sizes = [7usize, 31, 100, 256, 1, 602];
    assert_eq!(chunk_sizes.iter().sum::<usize>(), values.len());

    let mut offset = 0;
    let mut partials = Vec::new();
    for size in chunk_sizes {
        let mut w = Welford::new();
        for &x in &values[offset..offset + size] {
            w.update(x);
        }
        partials.push(w);
        offset += size;
    }

    let mut reduced = Welford::new();
    for w in partials {
        reduced = reduced.merge(w);
    }

    assert_eq!(reduced.count(), sequential.count());
    let rel = |a: f64, b: f64| ((a - b).abs() / a.abs().max(1e-12)).abs();
    assert!(rel(reduced.mean(), sequential.mean()) < 1e-10);
    assert!(rel(reduced.variance(), sequential.variance()) < 1e-10);
}

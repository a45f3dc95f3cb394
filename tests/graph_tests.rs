use maze_paths::graph::generators::{random_graph, random_grid_graph};
use maze_paths::{Error, Graph, MatrixGraph, Point};
use rand::prelude::*;
use rand::rngs::StdRng;

#[test]
fn test_empty_graph_rejected() {
    assert_eq!(MatrixGraph::<i64>::new(0).unwrap_err(), Error::EmptyGraph);
}

#[test]
fn test_set_edge_is_symmetric() {
    let mut graph = MatrixGraph::new(4).unwrap();
    graph.set_edge(0, 3, 7i64).unwrap();
    assert_eq!(graph.edge_weight(0, 3), Some(7));
    assert_eq!(graph.edge_weight(3, 0), Some(7));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_symmetry_holds_after_random_edits() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 20;
    let mut graph = MatrixGraph::new(n).unwrap();

    for _ in 0..300 {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        let w = rng.gen_range(0..10i64); // zero sometimes clears the edge
        graph.set_edge(i, j, w).unwrap();
    }

    for i in 0..n {
        for j in 0..n {
            assert_eq!(graph.edge_weight(i, j), graph.edge_weight(j, i));
        }
    }
}

#[test]
fn test_zero_weight_clears_edge() {
    let mut graph = MatrixGraph::new(3).unwrap();
    graph.set_edge(0, 1, 4i64).unwrap();
    assert!(graph.has_edge(0, 1));

    graph.set_edge(0, 1, 0).unwrap();
    assert!(!graph.has_edge(0, 1));
    assert!(!graph.has_edge(1, 0));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_set_edge_validation() {
    let mut graph = MatrixGraph::new(3).unwrap();
    assert_eq!(graph.set_edge(0, 5, 1i64).unwrap_err(), Error::InvalidVertex(5));
    assert_eq!(graph.set_edge(4, 0, 1).unwrap_err(), Error::InvalidVertex(4));
    assert_eq!(
        graph.set_edge(0, 1, -2).unwrap_err(),
        Error::NegativeWeight { from: 0, to: 1 }
    );
    // Failed calls must not have touched the matrix.
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_from_matrix_checks_dimensions() {
    assert_eq!(
        MatrixGraph::from_matrix(3, vec![0i64; 8]).unwrap_err(),
        Error::DimensionMismatch { expected: 9, got: 8 }
    );
    let graph = MatrixGraph::from_matrix(2, vec![0i64, 3, 3, 0]).unwrap();
    assert_eq!(graph.edge_weight(0, 1), Some(3));
}

#[test]
fn test_validate_non_negative() {
    let graph = MatrixGraph::from_matrix(2, vec![0i64, -1, -1, 0]).unwrap();
    assert_eq!(
        graph.validate_non_negative().unwrap_err(),
        Error::NegativeWeight { from: 0, to: 1 }
    );
}

#[test]
fn test_neighbors_skip_absent_edges() {
    let mut graph = MatrixGraph::new(4).unwrap();
    graph.set_edge(1, 0, 2i64).unwrap();
    graph.set_edge(1, 3, 5).unwrap();

    let mut neighbors: Vec<_> = graph.neighbors(1).collect();
    neighbors.sort();
    assert_eq!(neighbors, vec![(0, 2), (3, 5)]);
    assert_eq!(graph.neighbors(99).count(), 0);
}

#[test]
fn test_coordinate_map_validation() {
    let mut graph = MatrixGraph::<i64>::new(3).unwrap();
    assert_eq!(graph.coord(0), None);
    assert!(graph.coords().is_none());

    assert_eq!(
        graph.set_coords(vec![Point::new(0, 0)]).unwrap_err(),
        Error::CoordinateCountMismatch { expected: 3, got: 1 }
    );

    graph
        .set_coords(vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)])
        .unwrap();
    assert_eq!(graph.coord(2), Some(Point::new(0, 2)));
    assert_eq!(graph.coord(3), None);
}

#[test]
fn test_random_graph_vertex_count_bounds() {
    assert_eq!(
        random_graph::<i64>(1, 0.5).unwrap_err(),
        Error::VertexCountOutOfRange(1)
    );
    assert_eq!(
        random_graph::<i64>(101, 0.5).unwrap_err(),
        Error::VertexCountOutOfRange(101)
    );
}

// Scenario: probability 0 yields no edges, probability 1 a complete graph.
#[test]
fn test_random_graph_probability_extremes() {
    let empty = random_graph::<i64>(10, 0.0).unwrap();
    assert_eq!(empty.edge_count(), 0);

    let complete = random_graph::<i64>(10, 1.0).unwrap();
    assert_eq!(complete.edge_count(), 10 * 9 / 2);
    for i in 0..10 {
        for j in 0..10 {
            assert_eq!(complete.has_edge(i, j), i != j);
        }
    }
}

#[test]
fn test_random_graph_clamps_probability() {
    // Out-of-range probabilities clamp instead of failing.
    assert_eq!(random_graph::<i64>(5, -3.0).unwrap().edge_count(), 0);
    assert_eq!(random_graph::<i64>(5, 42.0).unwrap().edge_count(), 10);
}

#[test]
fn test_random_grid_graph_structure() {
    let rows = 4;
    let cols = 5;
    let graph = random_grid_graph::<i64>(rows, cols, 1.0).unwrap();
    assert_eq!(graph.vertex_count(), rows * cols);
    // Full probability connects every horizontal and vertical neighbor.
    assert_eq!(graph.edge_count(), rows * (cols - 1) + (rows - 1) * cols);

    let coords = graph.coords().expect("grid graphs carry coordinates");
    for (v, p) in coords.iter().enumerate() {
        assert_eq!(p.row, 2 * (v / cols) + 1);
        assert_eq!(p.col, 2 * (v % cols) + 1);
    }

    // Every edge must join doubled-grid neighbors.
    for i in 0..graph.vertex_count() {
        for (j, w) in graph.neighbors(i) {
            assert_eq!(w, 1);
            assert_eq!(coords[i].manhattan(&coords[j]), 2);
        }
    }
}

#[test]
fn test_random_grid_graph_bounds() {
    assert_eq!(
        random_grid_graph::<i64>(1, 1, 0.5).unwrap_err(),
        Error::VertexCountOutOfRange(1)
    );
    assert_eq!(
        random_grid_graph::<i64>(20, 20, 0.5).unwrap_err(),
        Error::VertexCountOutOfRange(400)
    );
}

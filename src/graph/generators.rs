use crate::graph::matrix::MatrixGraph;
use crate::maze::Point;
use crate::{Error, Result};
use num_traits::PrimInt;
use rand::prelude::*;
use std::fmt::Debug;

/// Supported vertex-count range for generated graphs.
const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 100;

fn check_vertex_count(vertices: usize) -> Result<()> {
    if !(MIN_VERTICES..=MAX_VERTICES).contains(&vertices) {
        return Err(Error::VertexCountOutOfRange(vertices));
    }
    Ok(())
}

/// Generates an Erdős–Rényi random undirected graph with unit weights.
///
/// Every unordered vertex pair receives a symmetric weight-1 edge with the
/// given probability. `edge_prob` is clamped to `[0, 1]`; the vertex count
/// must lie in `[2, 100]`. The result carries no coordinate map.
pub fn random_graph<W>(vertices: usize, edge_prob: f64) -> Result<MatrixGraph<W>>
where
    W: PrimInt + Debug,
{
    check_vertex_count(vertices)?;
    let edge_prob = edge_prob.clamp(0.0, 1.0);

    let mut graph = MatrixGraph::new(vertices)?;
    let mut rng = rand::thread_rng();

    for i in 0..vertices {
        for j in (i + 1)..vertices {
            if rng.gen_bool(edge_prob) {
                graph.set_edge(i, j, W::one())?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random undirected graph embedded in a `rows` x `cols` grid.
///
/// Each vertex gets a synthetic doubled-grid coordinate `(2r+1, 2c+1)` and
/// edge candidates are restricted to 4-directional grid neighbors, each
/// drawn with the clamped probability. The coordinate layout matches what
/// [`maze_from_graph`](crate::graph::builder::maze_from_graph) expects, so
/// the result can be rendered as a maze.
pub fn random_grid_graph<W>(rows: usize, cols: usize, edge_prob: f64) -> Result<MatrixGraph<W>>
where
    W: PrimInt + Debug,
{
    let vertices = rows * cols;
    check_vertex_count(vertices)?;
    let edge_prob = edge_prob.clamp(0.0, 1.0);

    let mut graph = MatrixGraph::new(vertices)?;
    let mut rng = rand::thread_rng();

    // Helper to get the vertex index from grid coordinates
    let index = |r: usize, c: usize| -> usize { r * cols + c };

    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols && rng.gen_bool(edge_prob) {
                graph.set_edge(index(r, c), index(r, c + 1), W::one())?;
            }
            if r + 1 < rows && rng.gen_bool(edge_prob) {
                graph.set_edge(index(r, c), index(r + 1, c), W::one())?;
            }
        }
    }

    let coords = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| Point::new(2 * r + 1, 2 * c + 1)))
        .collect();
    graph.set_coords(coords)?;

    Ok(graph)
}

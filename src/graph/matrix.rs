use crate::graph::traits::Graph;
use crate::maze::Point;
use crate::{Error, Result};
use num_traits::PrimInt;
use std::fmt::Debug;

/// An undirected graph stored as a square weight matrix.
///
/// The matrix lives in one contiguous row-major allocation, so a
/// half-constructed matrix cannot exist. A zero entry means "no edge";
/// writes through [`MatrixGraph::set_edge`] are always symmetric, keeping
/// `weight[i][j] == weight[j][i]` as a structural invariant.
///
/// Graphs built from a maze additionally carry a vertex-to-coordinate map
/// used by the doubled-grid path expansion; coordinate-based features are
/// unavailable without it.
#[derive(Debug, Clone)]
pub struct MatrixGraph<W>
where
    W: PrimInt + Debug,
{
    /// Number of vertices in the graph
    vertices: usize,

    /// Row-major `vertices * vertices` weight matrix
    weights: Vec<W>,

    /// Optional vertex index to grid coordinate mapping
    coords: Option<Vec<Point>>,
}

impl<W> MatrixGraph<W>
where
    W: PrimInt + Debug,
{
    /// Creates a graph with the given vertex count and no edges.
    pub fn new(vertices: usize) -> Result<Self> {
        if vertices == 0 {
            return Err(Error::EmptyGraph);
        }
        Ok(MatrixGraph {
            vertices,
            weights: vec![W::zero(); vertices * vertices],
            coords: None,
        })
    }

    /// Creates a graph from a prebuilt row-major weight matrix.
    ///
    /// Only the dimensions are validated here; weight-sign validation is the
    /// concern of the algorithms consuming the graph, so that a negative
    /// entry is rejected at query time rather than silently dropped.
    pub fn from_matrix(vertices: usize, weights: Vec<W>) -> Result<Self> {
        if vertices == 0 {
            return Err(Error::EmptyGraph);
        }
        if weights.len() != vertices * vertices {
            return Err(Error::DimensionMismatch {
                expected: vertices * vertices,
                got: weights.len(),
            });
        }
        Ok(MatrixGraph {
            vertices,
            weights,
            coords: None,
        })
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.vertices {
            return Err(Error::InvalidVertex(v));
        }
        Ok(())
    }

    /// Sets the symmetric edge weight between two vertices.
    ///
    /// A weight of zero removes the edge. Negative weights and out-of-range
    /// indices are rejected before any mutation.
    pub fn set_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight < W::zero() {
            return Err(Error::NegativeWeight { from, to });
        }
        self.weights[from * self.vertices + to] = weight;
        self.weights[to * self.vertices + from] = weight;
        Ok(())
    }

    /// Attaches a vertex-to-coordinate map; one entry per vertex.
    pub fn set_coords(&mut self, coords: Vec<Point>) -> Result<()> {
        if coords.len() != self.vertices {
            return Err(Error::CoordinateCountMismatch {
                expected: self.vertices,
                got: coords.len(),
            });
        }
        self.coords = Some(coords);
        Ok(())
    }

    /// Grid coordinate of a vertex, if the graph carries a coordinate map.
    pub fn coord(&self, vertex: usize) -> Option<Point> {
        self.coords.as_ref().and_then(|c| c.get(vertex).copied())
    }

    /// The full coordinate map, if present.
    pub fn coords(&self) -> Option<&[Point]> {
        self.coords.as_deref()
    }

    /// Validates that no matrix entry is negative; returns the offending
    /// edge otherwise.
    pub fn validate_non_negative(&self) -> Result<()> {
        for i in 0..self.vertices {
            for j in 0..self.vertices {
                if self.weights[i * self.vertices + j] < W::zero() {
                    return Err(Error::NegativeWeight { from: i, to: j });
                }
            }
        }
        Ok(())
    }
}

impl<W> Graph<W> for MatrixGraph<W>
where
    W: PrimInt + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices
    }

    fn edge_count(&self) -> usize {
        let nonzero = self
            .weights
            .iter()
            .filter(|&&w| w != W::zero())
            .count();
        // Symmetric matrix: each undirected edge appears twice.
        nonzero / 2
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if vertex >= self.vertices {
            return Box::new(std::iter::empty());
        }
        let row = &self.weights[vertex * self.vertices..(vertex + 1) * self.vertices];
        Box::new(
            row.iter()
                .enumerate()
                .filter(|(_, &w)| w != W::zero())
                .map(|(u, &w)| (u, w)),
        )
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge_weight(from, to).is_some()
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if from >= self.vertices || to >= self.vertices {
            return None;
        }
        let w = self.weights[from * self.vertices + to];
        if w == W::zero() {
            None
        } else {
            Some(w)
        }
    }
}

use num_traits::PrimInt;
use std::fmt::Debug;

/// Trait representing a weighted undirected graph
pub trait Graph<W>: Debug
where
    W: PrimInt + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of (undirected) edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the neighbors of a vertex with their edge
    /// weights. Yields every nonzero matrix entry, so a negatively weighted
    /// edge introduced through a bulk constructor is still visible to
    /// validation passes.
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

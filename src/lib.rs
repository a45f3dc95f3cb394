//! Maze Paths - shortest-path search over maze-derived and random graphs
//!
//! This library turns a text-based grid maze (or a randomly generated
//! topology) into an undirected weight-matrix graph and computes shortest
//! paths over it: breadth-first search for unweighted queries and Dijkstra's
//! algorithm, backed by an indexed binary min-heap with decrease-key, for
//! weighted ones. Reconstructed paths can be expanded back onto the maze's
//! doubled coordinate grid for rendering by an external layer.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod maze;

pub use algorithm::{bfs, dijkstra, reconstruct, BfsRun, Path};
pub use data_structures::IndexedMinHeap;
/// Re-export main types for convenient use
pub use graph::{builder::MazeGraph, Graph, MatrixGraph};
pub use maze::{Cell, Maze, Point, SymbolSet};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight between {from} and {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Graph must have at least one vertex")]
    EmptyGraph,

    #[error("Weight matrix has {got} entries, expected {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Vertex count {0} outside the supported range [2, 100]")]
    VertexCountOutOfRange(usize),

    #[error("Priority queue capacity must be positive")]
    ZeroCapacity,

    #[error("Maze dimensions {rows}x{cols} exceed the {max}x{max} limit", max = crate::maze::MAX_DIM)]
    MazeTooLarge { rows: usize, cols: usize },

    #[error("Maze row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Maze text contains no rows")]
    EmptyMaze,

    #[error("Maze has no open cells")]
    NoOpenCells,

    #[error("Maze has no start cell")]
    MissingStart,

    #[error("Maze has no goal cell")]
    MissingGoal,

    #[error("Maze has more than one start cell")]
    DuplicateStart,

    #[error("Maze has more than one goal cell")]
    DuplicateGoal,

    #[error("Graph carries no vertex-to-coordinate map")]
    MissingCoordinates,

    #[error("Coordinate map has {got} entries, expected {expected}")]
    CoordinateCountMismatch { expected: usize, got: usize },

    #[error("Vertex coordinate ({row}, {col}) falls outside the maze bounds")]
    CoordinateOutOfBounds { row: usize, col: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

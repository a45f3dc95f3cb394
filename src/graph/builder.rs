//! Construction of graphs from mazes and back again.
//!
//! `from_maze` gives every open cell a dense vertex index in row-major scan
//! order and connects 4-directionally adjacent open cells with unit-weight
//! edges. `maze_from_graph` is the inverse rendering for coordinate-bearing
//! graphs: vertices sit on a doubled grid, with the cell between two
//! adjacent vertices opened when the edge exists.

use crate::graph::matrix::MatrixGraph;
use crate::graph::traits::Graph;
use crate::maze::{Cell, Maze, Point};
use crate::{Error, Result};
use num_traits::PrimInt;
use std::fmt::Debug;

/// A graph derived from a maze, with the vertex indices of its endpoints.
#[derive(Debug, Clone)]
pub struct MazeGraph<W>
where
    W: PrimInt + Debug,
{
    pub graph: MatrixGraph<W>,
    /// Vertex index of the maze's start cell
    pub start: usize,
    /// Vertex index of the maze's goal cell
    pub goal: usize,
}

/// Builds an undirected unit-weight graph from a maze.
///
/// Every non-wall cell becomes one vertex; indices are assigned in row-major
/// scan order and recorded in the graph's coordinate map. Cells sharing a
/// 4-directional border are connected with weight 1.
pub fn from_maze<W>(maze: &Maze) -> Result<MazeGraph<W>>
where
    W: PrimInt + Debug,
{
    // Pass 1: census of open cells.
    let open_cells = maze.iter().filter(|(_, cell)| cell.is_open()).count();
    if open_cells == 0 {
        return Err(Error::NoOpenCells);
    }

    // Pass 2: dense row-major indices, coordinate map, endpoint indices.
    let mut index_map = vec![None; maze.rows() * maze.cols()];
    let mut coords = Vec::with_capacity(open_cells);
    let mut start = None;
    let mut goal = None;
    for (p, cell) in maze.iter() {
        if !cell.is_open() {
            continue;
        }
        let index = coords.len();
        index_map[p.row * maze.cols() + p.col] = Some(index);
        coords.push(p);
        match cell {
            Cell::Start => start = Some(index),
            Cell::Goal => goal = Some(index),
            _ => {}
        }
    }

    // The maze carries exactly one start and goal, both open.
    let start = start.ok_or(Error::MissingStart)?;
    let goal = goal.ok_or(Error::MissingGoal)?;

    // Pass 3: unit-weight edges between 4-adjacent open cells.
    let mut graph = MatrixGraph::new(open_cells)?;
    for (p, cell) in maze.iter() {
        if !cell.is_open() {
            continue;
        }
        let Some(from) = index_map[p.row * maze.cols() + p.col] else {
            continue;
        };
        let mut neighbors = Vec::with_capacity(4);
        if p.row > 0 {
            neighbors.push(Point::new(p.row - 1, p.col));
        }
        if p.row + 1 < maze.rows() {
            neighbors.push(Point::new(p.row + 1, p.col));
        }
        if p.col > 0 {
            neighbors.push(Point::new(p.row, p.col - 1));
        }
        if p.col + 1 < maze.cols() {
            neighbors.push(Point::new(p.row, p.col + 1));
        }
        for n in neighbors {
            if let Some(to) = index_map[n.row * maze.cols() + n.col] {
                graph.set_edge(from, to, W::one())?;
            }
        }
    }
    graph.set_coords(coords)?;

    Ok(MazeGraph { graph, start, goal })
}

/// Renders a coordinate-bearing graph into a maze for visual output.
///
/// Vertex coordinates are expected on a doubled grid (adjacent vertices two
/// cells apart), as produced by
/// [`random_grid_graph`](crate::graph::generators::random_grid_graph).
/// Everything starts as wall; each vertex opens its own cell and each edge
/// between coordinates at Manhattan distance 2 opens the cell in between.
/// `start` and `goal` must be distinct valid vertex indices.
pub fn maze_from_graph<W>(graph: &MatrixGraph<W>, start: usize, goal: usize) -> Result<Maze>
where
    W: PrimInt + Debug,
{
    let coords = graph.coords().ok_or(Error::MissingCoordinates)?;
    if start >= graph.vertex_count() || start == goal {
        return Err(Error::InvalidVertex(start));
    }
    if goal >= graph.vertex_count() {
        return Err(Error::InvalidVertex(goal));
    }

    // Far border wall sits one past the largest coordinate.
    let rows = coords.iter().map(|p| p.row).max().unwrap_or(0) + 2;
    let cols = coords.iter().map(|p| p.col).max().unwrap_or(0) + 2;
    if rows > crate::maze::MAX_DIM || cols > crate::maze::MAX_DIM {
        return Err(Error::MazeTooLarge { rows, cols });
    }

    let mut cells = vec![Cell::Wall; rows * cols];
    for (v, p) in coords.iter().enumerate() {
        cells[p.row * cols + p.col] = if v == start {
            Cell::Start
        } else if v == goal {
            Cell::Goal
        } else {
            Cell::Open
        };
    }

    // Open the intermediate cell for every grid-adjacent edge.
    for i in 0..graph.vertex_count() {
        for (j, _) in graph.neighbors(i) {
            if j <= i {
                continue;
            }
            let (from, to) = (coords[i], coords[j]);
            let dr = from.row.abs_diff(to.row);
            let dc = from.col.abs_diff(to.col);
            // Only axis-aligned distance-2 pairs have a cell in between;
            // anything else cannot be drawn on the doubled grid.
            if !((dr == 2 && dc == 0) || (dr == 0 && dc == 2)) {
                continue;
            }
            let mid = Point::new((from.row + to.row) / 2, (from.col + to.col) / 2);
            if cells[mid.row * cols + mid.col] == Cell::Wall {
                cells[mid.row * cols + mid.col] = Cell::Open;
            }
        }
    }

    Maze::from_cells(rows, cols, cells)
}

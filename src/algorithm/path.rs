use num_traits::PrimInt;
use std::fmt::Debug;

use crate::graph::MatrixGraph;
use crate::maze::{Maze, Point};
use crate::{Error, Result};

/// A reconstructed shortest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<W> {
    /// Vertex indices from start to goal inclusive
    pub nodes: Vec<usize>,

    /// Sum of the traversed edge weights
    pub total_cost: W,
}

/// Rebuilds the start-to-goal vertex sequence from a parent map.
///
/// Walks backward from the goal, taking at most one step per vertex in the
/// map so that a corrupted or cyclic parent chain terminates instead of
/// looping. `Ok(None)` means the walk ran out of parents (or steps) before
/// reaching the start, i.e. the map encodes no path between the endpoints.
pub fn reconstruct(
    parents: &[Option<usize>],
    start: usize,
    goal: usize,
) -> Result<Option<Vec<usize>>> {
    if start >= parents.len() {
        return Err(Error::InvalidVertex(start));
    }
    if goal >= parents.len() {
        return Err(Error::InvalidVertex(goal));
    }

    let mut nodes = Vec::new();
    let mut v = goal;
    loop {
        nodes.push(v);
        if v == start {
            break;
        }
        if nodes.len() >= parents.len() {
            return Ok(None); // cycle guard tripped
        }
        match parents[v] {
            Some(p) => v = p,
            None => return Ok(None),
        }
    }

    nodes.reverse();
    Ok(Some(nodes))
}

/// Expands a vertex path into maze cells on the doubled coordinate grid.
///
/// Maze-derived graphs place adjacent vertices two cells apart, with one
/// wall-or-passage cell in between. For every consecutive pair of path
/// vertices whose coordinates sit at Manhattan distance exactly 2, the
/// intermediate cell is inserted before the destination (unless it is a
/// wall); pairs at distance 0 are skipped and any other distance appends
/// only the destination coordinate. Requires the graph's coordinate map.
pub fn expand_on_maze<W>(
    maze: &Maze,
    graph: &MatrixGraph<W>,
    path: &[usize],
) -> Result<Vec<Point>>
where
    W: PrimInt + Debug,
{
    if graph.coords().is_none() {
        return Err(Error::MissingCoordinates);
    }
    let coord = |v: usize| -> Result<Point> {
        graph.coord(v).ok_or(Error::InvalidVertex(v))
    };

    let Some((&first, rest)) = path.split_first() else {
        return Ok(Vec::new());
    };

    let first = coord(first)?;
    if !maze.contains(first) {
        return Err(Error::CoordinateOutOfBounds {
            row: first.row,
            col: first.col,
        });
    }

    let mut expanded = vec![first];
    let mut prev = first;
    for &v in rest {
        let to = coord(v)?;
        if !maze.contains(to) {
            prev = to;
            continue;
        }

        match prev.manhattan(&to) {
            0 => continue,
            2 => {
                let dr = (to.row as isize - prev.row as isize).signum();
                let dc = (to.col as isize - prev.col as isize).signum();
                let mid = Point::new(
                    (prev.row as isize + dr) as usize,
                    (prev.col as isize + dc) as usize,
                );
                if maze.contains(mid) && !maze.is_wall(mid) {
                    expanded.push(mid);
                }
                expanded.push(to);
            }
            // Not doubled-grid neighbors; keep only the destination.
            _ => expanded.push(to),
        }
        prev = to;
    }

    Ok(expanded)
}

use log::debug;
use num_traits::PrimInt;
use std::collections::VecDeque;
use std::fmt::Debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// Outcome of a breadth-first search between two vertices.
#[derive(Debug, Clone)]
pub struct BfsRun {
    /// True if the goal was dequeued before the frontier emptied
    pub found: bool,

    /// First-discovery parent of each visited vertex; `None` for the start
    /// and for vertices the search never reached
    pub parents: Vec<Option<usize>>,

    /// Vertices in the order they were dequeued
    pub visit_order: Vec<usize>,
}

/// Breadth-first search from `start` toward `goal`.
///
/// Edges with positive weight are treated as unit steps, so the parent map
/// encodes minimum-edge-count paths. The first vertex to discover a
/// neighbor becomes its parent; later discoveries never relax it. The
/// search stops as soon as the goal is dequeued.
///
/// Invalid endpoint indices are a typed error, distinct from the normal
/// `found: false` no-path outcome.
pub fn bfs<W, G>(graph: &G, start: usize, goal: usize) -> Result<BfsRun>
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    if !graph.has_vertex(start) {
        return Err(Error::InvalidVertex(start));
    }
    if !graph.has_vertex(goal) {
        return Err(Error::InvalidVertex(goal));
    }

    let n = graph.vertex_count();
    let mut parents: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut visit_order = Vec::new();
    let mut frontier = VecDeque::new();

    visited[start] = true;
    frontier.push_back(start);

    while let Some(v) = frontier.pop_front() {
        visit_order.push(v);

        if v == goal {
            debug!("bfs: reached goal {goal} after {} visits", visit_order.len());
            return Ok(BfsRun {
                found: true,
                parents,
                visit_order,
            });
        }

        for (u, w) in graph.neighbors(v) {
            if w > W::zero() && !visited[u] {
                visited[u] = true;
                parents[u] = Some(v);
                frontier.push_back(u);
            }
        }
    }

    debug!("bfs: frontier exhausted after {} visits, goal {goal} unreached", visit_order.len());
    Ok(BfsRun {
        found: false,
        parents,
        visit_order,
    })
}

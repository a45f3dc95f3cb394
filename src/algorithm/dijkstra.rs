use log::{debug, trace};
use num_traits::{CheckedAdd, PrimInt};
use std::fmt::Debug;

use crate::algorithm::path::{reconstruct, Path};
use crate::data_structures::IndexedMinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's shortest-path algorithm between two vertices.
///
/// Lazy-deletion variant over the indexed min-heap: superseded queue
/// entries are skipped on extraction via the visited set, and the search
/// exits as soon as the goal is extracted, at which point its distance is
/// final. Distances are `Option`-tagged rather than an "infinity" sentinel,
/// and accumulation uses `checked_add`, so there is no overflow headroom to
/// reason about.
///
/// Every edge weight is validated to be non-negative before any relaxation
/// runs. `Ok(None)` means the endpoints are valid but not connected.
pub fn dijkstra<W, G>(graph: &G, start: usize, goal: usize) -> Result<Option<Path<W>>>
where
    W: PrimInt + CheckedAdd + Debug,
    G: Graph<W>,
{
    if !graph.has_vertex(start) {
        return Err(Error::InvalidVertex(start));
    }
    if !graph.has_vertex(goal) {
        return Err(Error::InvalidVertex(goal));
    }

    let n = graph.vertex_count();

    // Reject negative weights up front, before any state mutation.
    for v in 0..n {
        for (u, w) in graph.neighbors(v) {
            if w < W::zero() {
                return Err(Error::NegativeWeight { from: v, to: u });
            }
        }
    }

    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut parents: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];

    dist[start] = Some(W::zero());
    let mut queue = IndexedMinHeap::with_capacity(n)?;
    queue.push_or_decrease(start, W::zero());

    while let Some((v, dist_v)) = queue.pop() {
        if visited[v] {
            continue; // stale entry superseded by an earlier decrease-key
        }
        visited[v] = true;
        trace!("dijkstra: settled vertex {v} at distance {dist_v:?}");

        if v == goal {
            break;
        }

        for (u, weight) in graph.neighbors(v) {
            if weight <= W::zero() || visited[u] {
                continue;
            }
            // An accumulated cost that no longer fits in W cannot improve
            // any finite distance.
            let Some(new_dist) = dist_v.checked_add(&weight) else {
                continue;
            };
            let improves = match dist[u] {
                None => true,
                Some(current) => new_dist < current,
            };
            if improves {
                dist[u] = Some(new_dist);
                parents[u] = Some(v);
                queue.push_or_decrease(u, new_dist);
            }
        }
    }

    let Some(total_cost) = dist[goal] else {
        debug!("dijkstra: no path from {start} to {goal}");
        return Ok(None);
    };

    let Some(nodes) = reconstruct(&parents, start, goal)? else {
        return Ok(None);
    };
    debug!(
        "dijkstra: path {start} -> {goal} with cost {total_cost:?} over {} nodes",
        nodes.len()
    );
    Ok(Some(Path { nodes, total_cost }))
}

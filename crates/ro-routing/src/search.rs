//! Single-criterion path search trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! [`RoutePlanner`](crate::RoutePlanner) calls the search through the
//! [`PathSearch`] trait, so callers can swap in another algorithm (A*,
//! bidirectional Dijkstra) without touching route building or compromise
//! selection.
//!
//! # Costs
//!
//! Road weights are `u32`; accumulated distances are `u64` with saturating
//! addition, so even pathological inputs cannot wrap around.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ro_core::{Criterion, NodeIx};
use ro_network::{RoadGraph, weight};
use tracing::{debug, warn};

use crate::RoutingResult;

// ── PathSearch trait ──────────────────────────────────────────────────────────

/// Pluggable single-criterion shortest-path search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a planner can be shared across
/// Rayon workers (feature `parallel`).
pub trait PathSearch: Send + Sync {
    /// Cities from `from` to `to` inclusive along a path minimising
    /// `criterion`.
    ///
    /// Returns an empty `Vec` if `to` is unreachable, and `[from]` if
    /// `from == to`.  Unknown city names are an error.
    fn find_path(
        &self,
        graph:     &RoadGraph,
        from:      &str,
        to:        &str,
        criterion: Criterion,
    ) -> RoutingResult<Vec<String>>;
}

// ── DijkstraSearch ────────────────────────────────────────────────────────────

/// Standard Dijkstra over the graph's incidence lists.
///
/// Ties between equal-weight roads go to the one earliest in the incidence
/// list, so the same graph construction always yields the same path.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraSearch;

impl PathSearch for DijkstraSearch {
    fn find_path(
        &self,
        graph:     &RoadGraph,
        from:      &str,
        to:        &str,
        criterion: Criterion,
    ) -> RoutingResult<Vec<String>> {
        find_path(graph, from, to, criterion)
    }
}

/// Free-function form of [`DijkstraSearch::find_path`].
pub fn find_path(
    graph:     &RoadGraph,
    from:      &str,
    to:        &str,
    criterion: Criterion,
) -> RoutingResult<Vec<String>> {
    let src = graph.node(from)?;
    let dst = graph.node(to)?;

    let nodes = dijkstra(graph, src, dst, criterion);
    let path: Vec<String> = nodes.iter().map(|&n| graph.name(n).to_owned()).collect();

    if path.is_empty() {
        debug!(from, to, %criterion, "no path");
    } else {
        debug!(from, to, %criterion, hops = path.len() - 1, "path found");
    }
    Ok(path)
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(graph: &RoadGraph, src: NodeIx, dst: NodeIx, criterion: Criterion) -> Vec<NodeIx> {
    if src == dst {
        return vec![src];
    }

    let n = graph.city_count();
    // dist[v] = best known total to reach v.
    let mut dist = vec![u64::MAX; n];
    // prev[v] = node v was reached from; INVALID for unreached nodes.
    let mut prev = vec![NodeIx::INVALID; n];

    dist[src.index()] = 0;

    // Min-heap: (cost, node).  Reverse makes BinaryHeap (max) behave as
    // min-heap; NodeIx as secondary key keeps pop order deterministic.
    // Relaxation pushes duplicates instead of decreasing keys, so stale
    // entries are skipped on pop.
    let mut heap: BinaryHeap<Reverse<(u64, NodeIx)>> = BinaryHeap::new();
    heap.push(Reverse((0, src)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if cost > dist[node.index()] {
            continue;
        }

        if node == dst {
            return reconstruct(graph, &prev, src, dst);
        }

        for (next, road) in graph.out_edges(node) {
            let new_cost = cost.saturating_add(u64::from(weight(road, criterion)));

            // Strict `<`: the first road reaching a distance keeps it.
            if new_cost < dist[next.index()] {
                dist[next.index()] = new_cost;
                prev[next.index()] = node;
                heap.push(Reverse((new_cost, next)));
            }
        }
    }

    Vec::new()
}

/// Walk `prev` back from `dst`.  A revisited node or a dangling link means
/// the predecessor table is corrupt; both yield "no path" rather than a
/// loop or a truncated path.
pub(crate) fn reconstruct(graph: &RoadGraph, prev: &[NodeIx], src: NodeIx, dst: NodeIx) -> Vec<NodeIx> {
    let mut seen = vec![false; prev.len()];
    let mut path = Vec::new();
    let mut cur = dst;

    loop {
        if seen[cur.index()] {
            warn!(city = graph.name(cur), "cycle in predecessor chain; treating as no path");
            return Vec::new();
        }
        seen[cur.index()] = true;
        path.push(cur);

        if cur == src {
            break;
        }
        cur = prev[cur.index()];
        if cur == NodeIx::INVALID {
            warn!(to = graph.name(dst), "predecessor chain ends before the source; treating as no path");
            return Vec::new();
        }
    }

    path.reverse();
    path
}


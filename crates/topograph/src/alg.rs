//! Topological sorting via Kahn's algorithm.

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use std::collections::VecDeque;

/// Sorts `g` topologically, or reports a cycle.
///
/// Destructive: edges are removed as a side effect. On success the graph has zero edges; on
/// [`Error::CycleDetected`] the residual edges are exactly the ones blocked by a cycle, and
/// the graph is still well-formed (no dangling half-edges). The vertex set is untouched
/// either way. Runs in O(|V| + |E|).
///
/// Use [`topological_sorted`] when the input must survive.
pub fn topological_sort(g: &mut Graph) -> Result<Vec<VertexId>> {
    let mut order: Vec<VertexId> = Vec::with_capacity(g.vertex_count());
    let mut ready: VecDeque<VertexId> = (0..g.vertex_count())
        .filter(|&v| g.in_degree(v) == 0)
        .collect();

    while let Some(u) = ready.pop_front() {
        order.push(u);

        // Snapshot the outgoing list: unlinking mid-iteration must not skip or revisit entries.
        let out: Vec<_> = g.out_entries(u).collect();
        for (handle, v) in out {
            // Pre-removal degree check: this edge is v's last remaining incoming one.
            if g.in_degree(v) == 1 {
                ready.push_back(v);
            }
            g.remove_edge_at(u, handle);
        }
    }

    let remaining = g.edge_count();
    if remaining != 0 {
        return Err(Error::CycleDetected { remaining });
    }
    Ok(order)
}

/// Non-destructive variant of [`topological_sort`]: sorts a clone and leaves `g` intact.
pub fn topological_sorted(g: &Graph) -> Result<Vec<VertexId>> {
    let mut scratch = g.clone();
    topological_sort(&mut scratch)
}

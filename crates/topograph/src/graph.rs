//! Directed graph over a fixed vertex set with dual adjacency bookkeeping.
//!
//! Every edge `(u, v)` is recorded twice: as `v` in `u`'s outgoing list and as `u` in `v`'s
//! incoming list. The two halves are always added and removed together, and `edge_count`
//! tracks the number of such pairs — the sort uses it as its cycle oracle.

use crate::adjacency::{AdjacencyList, EntryHandle};

/// Vertex identity: an index in `[0, vertex_count)`.
pub type VertexId = usize;

#[derive(Debug, Clone, Default)]
struct Vertex {
    out_neighbors: AdjacencyList,
    in_neighbors: AdjacencyList,
}

/// A directed graph with a vertex set fixed at construction time.
///
/// Only edges mutate after construction. Parallel edges between the same pair are permitted
/// and tracked independently; self-loops are permitted.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    num_edges: usize,
}

impl Graph {
    /// A graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertices: vec![Vertex::default(); vertex_count],
            num_edges: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Live edge count, decremented on every removal.
    pub fn edge_count(&self) -> usize {
        self.num_edges
    }

    /// Adds the edge `(u, v)`.
    ///
    /// Precondition: `u` and `v` are in range. Panics otherwise.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        let n = self.vertices.len();
        assert!(u < n && v < n, "edge ({u}, {v}) out of range for {n} vertices");
        self.vertices[u].out_neighbors.push_back(v);
        self.vertices[v].in_neighbors.push_back(u);
        self.num_edges += 1;
    }

    /// Removes the out-edge of `u` named by `handle`, together with its paired in-entry on
    /// the target vertex, and returns the target. Both halves go in the one operation.
    ///
    /// Precondition: `handle` names a live entry of `u`'s outgoing list.
    pub fn remove_edge_at(&mut self, u: VertexId, handle: EntryHandle) -> VertexId {
        let v = self.vertices[u].out_neighbors.remove(handle);
        let back = self.vertices[v]
            .in_neighbors
            .find(u)
            .expect("edge invariant violated: out-entry with no paired in-entry");
        self.vertices[v].in_neighbors.remove(back);
        self.num_edges -= 1;
        v
    }

    /// Removes the first edge `(u, v)` if one exists. Parallel edges are removed one at a
    /// time, earliest-added first.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        let Some(handle) = self.vertices[u].out_neighbors.find(v) else {
            return false;
        };
        self.remove_edge_at(u, handle);
        true
    }

    /// Out-neighbor ids of `v` in insertion order.
    pub fn out_neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices[v].out_neighbors.iter()
    }

    /// In-neighbor ids of `v` in insertion order.
    pub fn in_neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices[v].in_neighbors.iter()
    }

    /// `(handle, target)` pairs for `v`'s outgoing list, for callers that unlink while
    /// iterating over a snapshot.
    pub fn out_entries(&self, v: VertexId) -> impl Iterator<Item = (EntryHandle, VertexId)> + '_ {
        self.vertices[v].out_neighbors.entries()
    }

    pub fn out_degree(&self, v: VertexId) -> usize {
        self.vertices[v].out_neighbors.len()
    }

    pub fn in_degree(&self, v: VertexId) -> usize {
        self.vertices[v].in_neighbors.len()
    }
}

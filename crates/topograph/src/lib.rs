//! Adjacency-list directed graphs with Kahn topological sort and cycle detection.
//!
//! A [`Graph`] owns a fixed vertex set; each vertex keeps an outgoing and an incoming
//! [`AdjacencyList`]. [`alg::topological_sort`] consumes the edges destructively and yields
//! either a topological order or a cycle signal. [`matrix`] reads and writes the `0`/`1`
//! adjacency-matrix wire format.
//!
//! ```
//! use topograph::{Graph, alg};
//!
//! let mut g = Graph::new(3);
//! g.add_edge(0, 1);
//! g.add_edge(1, 2);
//!
//! let order = alg::topological_sort(&mut g).unwrap();
//! assert_eq!(order, vec![0, 1, 2]);
//! assert_eq!(g.edge_count(), 0);
//! ```

pub mod adjacency;
pub mod alg;
mod error;
pub mod graph;
pub mod matrix;
pub mod util;

pub use adjacency::{AdjacencyList, EntryHandle};
pub use error::{Error, Result};
pub use graph::{Graph, VertexId};

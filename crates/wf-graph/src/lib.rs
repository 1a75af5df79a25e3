//! wf-graph: weighted undirected graph and path queries for wayfind.
//!
//! Provides:
//! - Core adjacency structure (`WeightedGraph`) with edge/node mutators
//! - Single-source shortest paths (Dijkstra) and path reconstruction
//! - Minimum spanning tree (Prim)
//! - Heuristic longest path (pruned iterative depth-first search)
//!
//! # Example
//!
//! ```
//! use wf_graph::WeightedGraph;
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge("a", "b", 2.0);
//! graph.add_edge("b", "c", 3.0);
//!
//! let (path, distance) = graph.shortest_path(&"a", &"c").unwrap();
//! assert_eq!(path, vec!["a", "b", "c"]);
//! assert_eq!(distance, 5.0);
//! ```

pub mod error;
pub mod graph;
pub mod longest_path;
pub mod mst;
pub mod shortest_path;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use graph::{Key, WeightedGraph};
pub use mst::{MstEdge, total_cost};
pub use shortest_path::ShortestPathTree;

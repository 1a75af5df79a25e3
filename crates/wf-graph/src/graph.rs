//! Core weighted graph data structure.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{GraphError, GraphResult};

/// Bound for node keys.
///
/// Any clonable, totally-ordered, printable type works as a key. Ordering
/// matters only for deterministic iteration and priority-queue tie-breaking.
pub trait Key: Clone + Ord + fmt::Debug + fmt::Display {}

impl<T: Clone + Ord + fmt::Debug + fmt::Display> Key for T {}

/// An undirected weighted graph.
///
/// Stored as a map of maps (an adjacency list): for every node the inner
/// map holds its neighbors and edge weights. The structure is undirected by
/// construction: `add_edge` inserts both directions atomically, so
/// `nodes[a][b] == nodes[b][a]` always holds.
///
/// Nodes and neighbors iterate in ascending key order regardless of
/// insertion order, which keeps every query deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedGraph<K: Key> {
    pub(crate) nodes: BTreeMap<K, BTreeMap<K, f64>>,
}

impl<K: Key> WeightedGraph<K> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }

    /// Add a node with no edges.
    ///
    /// If the node already exists its neighbor map is reset to empty,
    /// leaving any reverse entries on other nodes dangling. Callers must
    /// not call this on a node whose edges they intend to keep.
    pub fn add_node(&mut self, id: K) {
        self.nodes.insert(id, BTreeMap::new());
    }

    /// Connect two nodes with an undirected weighted edge.
    ///
    /// Endpoints absent from the graph are created. Re-adding an existing
    /// pair updates the weight in both directions.
    pub fn add_edge(&mut self, a: K, b: K, weight: f64) {
        self.nodes
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), weight);
        self.nodes.entry(b).or_default().insert(a, weight);
    }

    /// Iterate over all node ids in ascending order.
    pub fn get_nodes(&self) -> impl Iterator<Item = &K> {
        self.nodes.keys()
    }

    /// Neighbor-to-weight map for a node.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if the node is absent.
    pub fn get_edges(&self, id: &K) -> GraphResult<&BTreeMap<K, f64>> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    /// Whether the node id is present.
    pub fn contains(&self, id: &K) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<K: Key> fmt::Display for WeightedGraph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, neighbors) in &self.nodes {
            write!(f, "{node} ->")?;
            for (neighbor, weight) in neighbors {
                write!(f, " {neighbor}: {weight}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

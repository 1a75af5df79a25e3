//! Minimum spanning tree via Prim's algorithm.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, BinaryHeap};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Key, WeightedGraph};

/// One edge of a spanning tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MstEdge<K: Key> {
    pub from: K,
    pub to: K,
    pub cost: f64,
}

/// Sum of edge costs across a spanning tree.
pub fn total_cost<K: Key>(edges: &[MstEdge<K>]) -> f64 {
    edges.iter().map(|edge| edge.cost).sum()
}

/// Candidate edge ordered by cost, ties broken by ascending `from` then
/// `to` key.
struct Candidate<K: Key> {
    cost: f64,
    from: K,
    to: K,
}

impl<K: Key> PartialEq for Candidate<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Key> Eq for Candidate<K> {}

impl<K: Key> PartialOrd for Candidate<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Key> Ord for Candidate<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl<K: Key> WeightedGraph<K> {
    /// Minimum spanning tree of the connected component containing
    /// `start`, computed with Prim's algorithm.
    ///
    /// Edges are returned in the order they were settled (ascending cost
    /// with the documented tie-break), which is deterministic for a fixed
    /// graph. Nodes outside `start`'s component are silently excluded — a
    /// documented limitation, not an error.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if `start` is absent.
    pub fn minimum_spanning_tree(&self, start: &K) -> GraphResult<Vec<MstEdge<K>>> {
        let seed_edges = self.get_edges(start)?;
        tracing::debug!(%start, nodes = self.len(), "running prim");

        let mut visited: BTreeSet<K> = BTreeSet::new();
        visited.insert(start.clone());

        let mut candidates: BinaryHeap<Reverse<Candidate<K>>> = seed_edges
            .iter()
            .map(|(to, &cost)| {
                Reverse(Candidate {
                    cost,
                    from: start.clone(),
                    to: to.clone(),
                })
            })
            .collect();

        let mut tree = Vec::new();
        while let Some(Reverse(Candidate { cost, from, to })) = candidates.pop() {
            if visited.contains(&to) {
                continue;
            }
            visited.insert(to.clone());

            if let Some(neighbors) = self.nodes.get(&to) {
                for (next, &next_cost) in neighbors {
                    if !visited.contains(next) {
                        candidates.push(Reverse(Candidate {
                            cost: next_cost,
                            from: to.clone(),
                            to: next.clone(),
                        }));
                    }
                }
            }

            tree.push(MstEdge { from, to, cost });
        }

        Ok(tree)
    }
}

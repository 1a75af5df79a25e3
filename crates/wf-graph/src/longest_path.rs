//! Heuristic longest path via pruned iterative depth-first search.

use std::collections::BTreeSet;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Key, WeightedGraph};

impl<K: Key> WeightedGraph<K> {
    /// Longest path found between `start` and `end` by a pruned
    /// depth-first search.
    ///
    /// This is a heuristic, not an exact solver (exact longest path is
    /// NP-hard). A single visited set is shared across the whole search,
    /// so a node expanded once is never expanded again even along a
    /// different incoming path; reaching `end` is always evaluated against
    /// the incumbent regardless of visited status. Branches whose
    /// accumulated length plus the next edge cannot exceed the incumbent
    /// are pruned. Edge weights are used unmodified (no sign-stripping).
    ///
    /// The search uses an explicit stack rather than recursion so large
    /// graphs cannot overflow the call stack. Neighbors are pushed in
    /// ascending key order, so the highest key is explored first; the
    /// result is deterministic for a fixed graph.
    ///
    /// Returns the best path and its length, or `([], 0.0)` when `end` is
    /// never reached. Fails with [`GraphError::NodeNotFound`] if either
    /// endpoint is absent.
    pub fn longest_path(&self, start: &K, end: &K) -> GraphResult<(Vec<K>, f64)> {
        if !self.contains(start) {
            return Err(GraphError::node_not_found(start));
        }
        if !self.contains(end) {
            return Err(GraphError::node_not_found(end));
        }
        tracing::debug!(%start, %end, "running longest-path search");

        let mut visited: BTreeSet<K> = BTreeSet::new();
        let mut stack = vec![(start.clone(), vec![start.clone()], 0.0_f64)];
        let mut best_path: Vec<K> = Vec::new();
        let mut best_length = 0.0_f64;

        while let Some((node, path, length)) = stack.pop() {
            if node == *end && length > best_length {
                best_path = path;
                best_length = length;
            } else if !visited.contains(&node) {
                visited.insert(node.clone());
                let Some(neighbors) = self.nodes.get(&node) else {
                    continue;
                };
                for (neighbor, weight) in neighbors {
                    // Pruning bound: skip branches that cannot beat the incumbent.
                    if length + weight > best_length {
                        let mut extended = path.clone();
                        extended.push(neighbor.clone());
                        stack.push((neighbor.clone(), extended, length + weight));
                    }
                }
            }
        }

        Ok((best_path, best_length))
    }
}

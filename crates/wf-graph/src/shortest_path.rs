//! Single-source shortest paths (Dijkstra) and path reconstruction.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Key, WeightedGraph};

/// Result of one Dijkstra run: per-node distances and predecessors.
///
/// Both maps are keyed by every node in the graph. Unreachable nodes carry
/// `f64::INFINITY` and no predecessor; the start node also has no
/// predecessor.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<K: Key> {
    pub distances: BTreeMap<K, f64>,
    pub predecessors: BTreeMap<K, Option<K>>,
}

impl<K: Key> ShortestPathTree<K> {
    /// Reconstruct the best-known path to `end` by walking predecessors
    /// backward, then reversing.
    ///
    /// If `end` was never reached the walk stops immediately, producing a
    /// singleton path `[end]` with distance `f64::INFINITY`. Callers detect
    /// "no path exists" through the infinite distance, not an error.
    pub fn path_to(&self, end: &K) -> (Vec<K>, f64) {
        let mut path = vec![end.clone()];
        let mut current = end;
        while let Some(Some(prev)) = self.predecessors.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        let distance = self.distances.get(end).copied().unwrap_or(f64::INFINITY);
        (path, distance)
    }
}

/// Priority-queue entry ordered by tentative distance, ties broken by
/// ascending node key so runs are deterministic.
struct HeapEntry<K: Key> {
    dist: f64,
    node: K,
}

impl<K: Key> PartialEq for HeapEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Key> Eq for HeapEntry<K> {}

impl<K: Key> PartialOrd for HeapEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Key> Ord for HeapEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl<K: Key> WeightedGraph<K> {
    /// Shortest distances from `start` to every node in the graph.
    ///
    /// Classic priority-queue relaxation. Edge weights are sign-stripped
    /// (`abs`) before accumulation, so the algorithm stays valid even when
    /// the stored graph holds negative weights. This is deliberate policy
    /// carried by the whole shortest-path family.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if `start` is absent.
    /// Complexity O((V+E) log V).
    pub fn dijkstra(&self, start: &K) -> GraphResult<ShortestPathTree<K>> {
        if !self.contains(start) {
            return Err(GraphError::node_not_found(start));
        }
        tracing::debug!(%start, nodes = self.len(), "running dijkstra");

        let mut distances: BTreeMap<K, f64> = self
            .nodes
            .keys()
            .map(|node| (node.clone(), f64::INFINITY))
            .collect();
        let mut predecessors: BTreeMap<K, Option<K>> = self
            .nodes
            .keys()
            .map(|node| (node.clone(), None))
            .collect();
        distances.insert(start.clone(), 0.0);

        let mut queue = BinaryHeap::new();
        queue.push(Reverse(HeapEntry {
            dist: 0.0,
            node: start.clone(),
        }));

        while let Some(Reverse(HeapEntry { dist, node })) = queue.pop() {
            // Stale entry: a shorter distance was already settled.
            if distances.get(&node).is_some_and(|&best| dist > best) {
                continue;
            }
            let Some(neighbors) = self.nodes.get(&node) else {
                continue;
            };
            for (neighbor, weight) in neighbors {
                let candidate = dist + weight.abs();
                if distances
                    .get(neighbor)
                    .is_some_and(|&best| candidate < best)
                {
                    distances.insert(neighbor.clone(), candidate);
                    predecessors.insert(neighbor.clone(), Some(node.clone()));
                    queue.push(Reverse(HeapEntry {
                        dist: candidate,
                        node: neighbor.clone(),
                    }));
                }
            }
        }

        Ok(ShortestPathTree {
            distances,
            predecessors,
        })
    }

    /// Shortest path between a single pair of nodes.
    ///
    /// Returns the ordered node sequence from `start` to `end` and the
    /// total distance. An unreachable `end` yields `([end], INFINITY)`.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if either endpoint is
    /// absent.
    pub fn shortest_path(&self, start: &K, end: &K) -> GraphResult<(Vec<K>, f64)> {
        if !self.contains(end) {
            return Err(GraphError::node_not_found(end));
        }
        let tree = self.dijkstra(start)?;
        Ok(tree.path_to(end))
    }

    /// Shortest path from `start` to every node, from a single Dijkstra
    /// run.
    ///
    /// Unreachable nodes yield a singleton path and infinite distance,
    /// consistent with [`WeightedGraph::shortest_path`].
    pub fn path_to_all(&self, start: &K) -> GraphResult<BTreeMap<K, (Vec<K>, f64)>> {
        let tree = self.dijkstra(start)?;
        Ok(self
            .nodes
            .keys()
            .map(|node| (node.clone(), tree.path_to(node)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> WeightedGraph<&'static str> {
        let mut graph = WeightedGraph::new();
        graph.add_edge("1", "2", 0.1);
        graph.add_edge("2", "5", 0.2);
        graph.add_edge("5", "3", 5.0);
        graph.add_edge("3", "4", 9.5);
        graph.add_edge("4", "5", 2.3);
        graph.add_edge("1", "5", 1.0);
        graph
    }

    #[test]
    fn dijkstra_distances() {
        let graph = sample_graph();
        let tree = graph.dijkstra(&"1").unwrap();

        assert_eq!(tree.distances[&"1"], 0.0);
        assert_eq!(tree.distances[&"2"], 0.1);
        assert!((tree.distances[&"5"] - 0.3).abs() < 1e-12);
        assert!((tree.distances[&"4"] - 2.6).abs() < 1e-12);
        assert!((tree.distances[&"3"] - 5.3).abs() < 1e-12);
        assert_eq!(tree.predecessors[&"1"], None);
        assert_eq!(tree.predecessors[&"3"], Some("5"));
    }

    #[test]
    fn dijkstra_missing_start_fails_fast() {
        let graph = sample_graph();
        assert!(matches!(
            graph.dijkstra(&"99"),
            Err(GraphError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn dijkstra_strips_weight_signs() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("a", "b", -4.0);
        let tree = graph.dijkstra(&"a").unwrap();
        assert_eq!(tree.distances[&"b"], 4.0);
    }

    #[test]
    fn shortest_path_reference_scenario() {
        let graph = sample_graph();
        let (path, distance) = graph.shortest_path(&"1", &"3").unwrap();
        assert_eq!(path, vec!["1", "2", "5", "3"]);
        assert!((distance - 5.3).abs() < 1e-12);
    }

    #[test]
    fn shortest_path_unreachable_end_is_data_not_error() {
        let mut graph = sample_graph();
        graph.add_node("island");

        let (path, distance) = graph.shortest_path(&"1", &"island").unwrap();
        assert_eq!(path, vec!["island"]);
        assert_eq!(distance, f64::INFINITY);
    }

    #[test]
    fn shortest_path_missing_end_fails_fast() {
        let graph = sample_graph();
        assert!(matches!(
            graph.shortest_path(&"1", &"99"),
            Err(GraphError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn path_to_all_agrees_with_dijkstra() {
        let graph = sample_graph();
        let tree = graph.dijkstra(&"1").unwrap();
        let paths = graph.path_to_all(&"1").unwrap();

        assert_eq!(paths.len(), graph.len());
        for (node, (path, distance)) in &paths {
            assert_eq!(*distance, tree.distances[node]);
            assert_eq!(path.last(), Some(node));
        }
        assert_eq!(paths[&"3"].0, vec!["1", "2", "5", "3"]);
    }

    #[test]
    fn queries_are_idempotent() {
        let graph = sample_graph();
        let first = graph.shortest_path(&"1", &"3").unwrap();
        let second = graph.shortest_path(&"1", &"3").unwrap();
        assert_eq!(first, second);
    }
}

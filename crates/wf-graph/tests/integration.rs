//! Integration tests for wf-graph.

use std::collections::BTreeSet;

use wf_core::{Tolerances, nearly_equal};
use wf_graph::{WeightedGraph, total_cost};

fn reference_graph() -> WeightedGraph<String> {
    let mut graph = WeightedGraph::new();
    for (a, b, w) in [
        ("1", "2", 0.1),
        ("2", "5", 0.2),
        ("5", "3", 5.0),
        ("3", "4", 9.5),
        ("4", "5", 2.3),
        ("1", "5", 1.0),
    ] {
        graph.add_edge(a.to_string(), b.to_string(), w);
    }
    graph
}

#[test]
fn reference_scenario_end_to_end() {
    let graph = reference_graph();

    let tol = Tolerances::default();

    let (path, distance) = graph.shortest_path(&"1".into(), &"3".into()).unwrap();
    assert_eq!(path, vec!["1", "2", "5", "3"]);
    assert!(nearly_equal(distance, 5.3, tol));

    let tree = graph.minimum_spanning_tree(&"1".into()).unwrap();
    assert_eq!(tree.len(), 4);
    assert!(nearly_equal(total_cost(&tree), 7.6, tol));

    let (_, length) = graph.longest_path(&"1".into(), &"3".into()).unwrap();
    assert!(length >= 5.3);
}

#[test]
fn dijkstra_and_path_to_all_agree() {
    let graph = reference_graph();
    let start: String = "1".into();

    let dijkstra = graph.dijkstra(&start).unwrap();
    let paths = graph.path_to_all(&start).unwrap();

    for node in graph.get_nodes() {
        assert_eq!(paths[node].1, dijkstra.distances[node]);
    }
}

#[test]
fn shortest_path_distance_matches_path_edges() {
    let graph = reference_graph();
    let (path, distance) = graph.shortest_path(&"1".into(), &"4".into()).unwrap();

    let summed: f64 = path
        .windows(2)
        .map(|pair| graph.get_edges(&pair[0]).unwrap()[&pair[1]].abs())
        .sum();
    assert!((summed - distance).abs() < 1e-12);
}

#[test]
fn queries_leave_graph_unchanged() {
    let graph = reference_graph();
    let before = graph.clone();

    let start: String = "1".into();
    let end: String = "3".into();
    graph.dijkstra(&start).unwrap();
    graph.shortest_path(&start, &end).unwrap();
    graph.path_to_all(&start).unwrap();
    graph.longest_path(&start, &end).unwrap();
    graph.minimum_spanning_tree(&start).unwrap();

    assert_eq!(graph, before);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    /// Nodes of the connected component containing `start`, by plain BFS.
    fn component(graph: &WeightedGraph<u32>, start: u32) -> BTreeSet<u32> {
        let mut seen = BTreeSet::from([start]);
        let mut frontier = vec![start];
        while let Some(node) = frontier.pop() {
            for neighbor in graph.get_edges(&node).unwrap().keys() {
                if seen.insert(*neighbor) {
                    frontier.push(*neighbor);
                }
            }
        }
        seen
    }

    fn edge_list() -> impl Strategy<Value = Vec<(u32, u32, f64)>> {
        prop::collection::vec((0u32..8, 0u32..8, -10.0f64..10.0), 1..24)
    }

    proptest! {
        #[test]
        fn add_edge_keeps_graph_undirected(edges in edge_list()) {
            let mut graph = WeightedGraph::new();
            for (a, b, w) in edges {
                graph.add_edge(a, b, w);
            }
            for node in graph.get_nodes() {
                for (neighbor, weight) in graph.get_edges(node).unwrap() {
                    prop_assert_eq!(graph.get_edges(neighbor).unwrap()[node], *weight);
                }
            }
        }

        #[test]
        fn path_to_all_matches_dijkstra(edges in edge_list()) {
            let mut graph = WeightedGraph::new();
            for (a, b, w) in edges {
                graph.add_edge(a, b, w);
            }
            let start = *graph.get_nodes().next().unwrap();

            let dijkstra = graph.dijkstra(&start).unwrap();
            let paths = graph.path_to_all(&start).unwrap();
            for node in graph.get_nodes() {
                prop_assert_eq!(paths[node].1, dijkstra.distances[node]);
            }
        }

        #[test]
        fn reconstructed_paths_sum_to_reported_distance(edges in edge_list()) {
            let mut graph = WeightedGraph::new();
            for (a, b, w) in edges {
                graph.add_edge(a, b, w);
            }
            let start = *graph.get_nodes().next().unwrap();

            for (node, (path, distance)) in graph.path_to_all(&start).unwrap() {
                if distance.is_finite() {
                    prop_assert_eq!(path.first(), Some(&start));
                    prop_assert_eq!(path.last(), Some(&node));
                    let summed: f64 = path
                        .windows(2)
                        .map(|pair| graph.get_edges(&pair[0]).unwrap()[&pair[1]].abs())
                        .sum();
                    prop_assert!((summed - distance).abs() < 1e-9);
                } else {
                    prop_assert_eq!(path, vec![node]);
                }
            }
        }

        #[test]
        fn mst_spans_start_component(edges in edge_list()) {
            let mut graph = WeightedGraph::new();
            for (a, b, w) in edges {
                graph.add_edge(a, b, w);
            }
            let start = *graph.get_nodes().next().unwrap();

            let tree = graph.minimum_spanning_tree(&start).unwrap();
            let reachable = component(&graph, start);
            prop_assert_eq!(tree.len(), reachable.len() - 1);

            // Acyclic: each edge attaches exactly one new node.
            let mut attached = BTreeSet::from([start]);
            for edge in &tree {
                prop_assert!(attached.contains(&edge.from));
                prop_assert!(attached.insert(edge.to));
            }
        }
    }
}

//! Timed query report over a graph file.
//!
//! Runs the three query stages (shortest paths to each target, minimum
//! spanning tree, longest paths to each target) against one graph file,
//! printing results and per-stage wall time.

use std::path::Path;

use wf_core::{ReportTimings, Timer};
use wf_graph::total_cost;

use crate::error::CliResult;
use crate::reader;

/// Render a node sequence as `a -> b -> c`.
pub fn format_path(path: &[String]) -> String {
    path.join(" -> ")
}

fn print_stage_break() {
    println!("\n**********\n");
}

/// Run the full report for one graph file and return its stage timings.
///
/// Targets absent from the graph abort the report with the core's
/// not-found error rather than being skipped.
pub fn run_report(path: &Path, source: &str, targets: &[String]) -> CliResult<ReportTimings> {
    let graph = reader::read_graph(path)?;
    println!("Reading {}", path.display());

    let source = source.to_string();
    let mut timings = ReportTimings::default();

    print_stage_break();
    let timer = Timer::start();
    for target in targets {
        let (route, distance) = graph.shortest_path(&source, target)?;
        println!(
            "Shortest path from {} to {}: Path - {}, Distance - {:.2}",
            source,
            target,
            format_path(&route),
            distance
        );
    }
    timings.shortest_path_s = timer.stop();
    println!("Time elapsed: {:.2} seconds", timings.shortest_path_s);

    print_stage_break();
    println!("Minimum spanning tree:");
    let timer = Timer::start();
    let tree = graph.minimum_spanning_tree(&source)?;
    timings.spanning_tree_s = timer.stop();
    for edge in &tree {
        println!(
            "Edge from {} to {}, Distance: {}",
            edge.from, edge.to, edge.cost
        );
    }
    println!(
        "{} edges, total cost {:.2}",
        tree.len(),
        total_cost(&tree)
    );
    println!("Time elapsed: {:.2} seconds", timings.spanning_tree_s);

    print_stage_break();
    println!("Longest paths:");
    let timer = Timer::start();
    for target in targets {
        let (_, length) = graph.longest_path(&source, target)?;
        println!(
            "Biggest distance from {} to {}: {:.2}",
            source, target, length
        );
    }
    timings.longest_path_s = timer.stop();
    println!("Time elapsed: {:.2} seconds", timings.longest_path_s);

    Ok(timings)
}

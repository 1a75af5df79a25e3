use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod error;
mod reader;
mod report;

use error::CliResult;
use report::format_path;
use wf_graph::total_cost;

#[derive(Parser)]
#[command(name = "wf-cli")]
#[command(about = "Wayfind CLI - weighted graph path analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency listing of a graph file
    Print {
        /// Path to the graph description file
        graph_path: PathBuf,
    },
    /// Shortest path between two nodes
    Shortest {
        /// Path to the graph description file
        graph_path: PathBuf,
        /// Start node id
        start: String,
        /// End node id
        end: String,
    },
    /// Shortest paths from one node to every node
    Paths {
        /// Path to the graph description file
        graph_path: PathBuf,
        /// Start node id
        start: String,
    },
    /// Minimum spanning tree of the start node's component
    Mst {
        /// Path to the graph description file
        graph_path: PathBuf,
        /// Start node id
        start: String,
    },
    /// Heuristic longest path between two nodes
    Longest {
        /// Path to the graph description file
        graph_path: PathBuf,
        /// Start node id
        start: String,
        /// End node id
        end: String,
    },
    /// Timed query report over one or more graph files
    Report {
        /// Paths to graph description files
        #[arg(required = true)]
        graph_paths: Vec<PathBuf>,
        /// Source node for every query
        #[arg(long, default_value = "1")]
        source: String,
        /// Target nodes for shortest/longest path queries
        #[arg(long, num_args = 1.., default_values = ["10", "20", "30", "40", "50"])]
        targets: Vec<String>,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Print { graph_path } => cmd_print(&graph_path),
        Commands::Shortest {
            graph_path,
            start,
            end,
        } => cmd_shortest(&graph_path, &start, &end),
        Commands::Paths { graph_path, start } => cmd_paths(&graph_path, &start),
        Commands::Mst { graph_path, start } => cmd_mst(&graph_path, &start),
        Commands::Longest {
            graph_path,
            start,
            end,
        } => cmd_longest(&graph_path, &start, &end),
        Commands::Report {
            graph_paths,
            source,
            targets,
        } => cmd_report(&graph_paths, &source, &targets),
    }
}

fn cmd_print(graph_path: &Path) -> CliResult<()> {
    let graph = reader::read_graph(graph_path)?;
    print!("{graph}");
    println!("{} nodes", graph.len());
    Ok(())
}

fn cmd_shortest(graph_path: &Path, start: &str, end: &str) -> CliResult<()> {
    let graph = reader::read_graph(graph_path)?;
    let (route, distance) = graph.shortest_path(&start.to_string(), &end.to_string())?;

    if distance.is_infinite() {
        println!("No path from {start} to {end}");
    } else {
        println!(
            "Shortest path from {} to {}: Path - {}, Distance - {:.2}",
            start,
            end,
            format_path(&route),
            distance
        );
    }
    Ok(())
}

fn cmd_paths(graph_path: &Path, start: &str) -> CliResult<()> {
    let graph = reader::read_graph(graph_path)?;
    let paths = graph.path_to_all(&start.to_string())?;

    println!("Shortest paths from {start} to all other nodes:");
    for (node, (route, distance)) in &paths {
        if distance.is_infinite() {
            println!("Path from {start} to {node}: unreachable");
        } else {
            println!(
                "Path from {} to {}: {}, Distance: {:.2}",
                start,
                node,
                format_path(route),
                distance
            );
        }
    }
    Ok(())
}

fn cmd_mst(graph_path: &Path, start: &str) -> CliResult<()> {
    let graph = reader::read_graph(graph_path)?;
    let tree = graph.minimum_spanning_tree(&start.to_string())?;

    println!("Minimum spanning tree:");
    for edge in &tree {
        println!(
            "Edge from {} to {}, Distance: {}",
            edge.from, edge.to, edge.cost
        );
    }
    println!("{} edges, total cost {:.2}", tree.len(), total_cost(&tree));
    Ok(())
}

fn cmd_longest(graph_path: &Path, start: &str, end: &str) -> CliResult<()> {
    let graph = reader::read_graph(graph_path)?;
    let (route, length) = graph.longest_path(&start.to_string(), &end.to_string())?;

    if route.is_empty() {
        println!("No path from {start} to {end}");
    } else {
        println!(
            "Longest path from {} to {}: Path - {}, Distance - {:.2}",
            start,
            end,
            format_path(&route),
            length
        );
    }
    Ok(())
}

fn cmd_report(graph_paths: &[PathBuf], source: &str, targets: &[String]) -> CliResult<()> {
    let mut all_timings = Vec::with_capacity(graph_paths.len());
    for path in graph_paths {
        let timings = report::run_report(path, source, targets)?;
        timings.print_summary();
        all_timings.push((path, timings));
    }

    if all_timings.len() > 1 {
        println!("\n**********\n");
        for (path, timings) in &all_timings {
            println!(
                "Total time elapsed for {}: {:.2} seconds",
                path.display(),
                timings.total_seconds()
            );
            println!(
                "Shortest path: {:.2} seconds - Minimum spanning tree: {:.2} seconds - Longest path: {:.2} seconds\n",
                timings.shortest_path_s, timings.spanning_tree_s, timings.longest_path_s
            );
        }
    }
    Ok(())
}

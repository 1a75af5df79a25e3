//! Line-oriented graph file reader.
//!
//! Format: the first non-blank line is a node count, parsed but used for
//! nothing (it is informational only and is not validated against the
//! node ids actually encountered). Every following line is
//! `<node_a> <node_b> <weight>`, whitespace-separated, and feeds one
//! `add_edge` call.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use wf_graph::WeightedGraph;

use crate::error::{CliError, CliResult};

/// Read a graph description from a file.
pub fn read_graph(path: &Path) -> CliResult<WeightedGraph<String>> {
    let file = File::open(path).map_err(|source| CliError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), nodes = graph.len(), "graph loaded");
    Ok(graph)
}

/// Parse a graph description from any buffered reader.
///
/// Blank lines are skipped. Malformed lines fail with [`CliError::Parse`]
/// carrying the 1-based line number.
pub fn parse_graph<R: BufRead>(reader: R) -> CliResult<WeightedGraph<String>> {
    let mut graph = WeightedGraph::new();
    let mut saw_header = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if !saw_header {
            trimmed.parse::<usize>().map_err(|err| CliError::Parse {
                line: line_no,
                message: format!("invalid node count: {err}"),
            })?;
            saw_header = true;
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let [a, b, w] = fields.as_slice() else {
            return Err(CliError::Parse {
                line: line_no,
                message: format!(
                    "expected `<node_a> <node_b> <weight>`, got {} fields",
                    fields.len()
                ),
            });
        };
        let weight: f64 = w.parse().map_err(|err| CliError::Parse {
            line: line_no,
            message: format!("invalid weight {w:?}: {err}"),
        })?;

        graph.add_edge(a.to_string(), b.to_string(), weight);
    }

    Ok(graph)
}

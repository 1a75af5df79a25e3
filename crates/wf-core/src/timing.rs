//! Lightweight performance timing utilities.
//!
//! The CLI report measures where runtime is spent across the three query
//! stages (shortest paths, spanning tree, longest paths). The timer here
//! is a thin stopwatch; `ReportTimings` accumulates per-stage totals and
//! prints a formatted summary.

use std::time::Instant;

/// A simple stopwatch that measures elapsed wall time.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Create and start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in seconds since the timer was started.
    pub fn elapsed_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Stop the timer and return elapsed time in seconds.
    pub fn stop(self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Per-stage timing totals for one graph report.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportTimings {
    pub shortest_path_s: f64,
    pub spanning_tree_s: f64,
    pub longest_path_s: f64,
}

impl ReportTimings {
    /// Total time across all stages (in seconds).
    pub fn total_seconds(&self) -> f64 {
        self.shortest_path_s + self.spanning_tree_s + self.longest_path_s
    }

    /// Print a formatted summary of the per-stage timings.
    pub fn print_summary(&self) {
        let total = self.total_seconds().max(1.0e-12);
        let sp_pct = 100.0 * self.shortest_path_s / total;
        let mst_pct = 100.0 * self.spanning_tree_s / total;
        let lp_pct = 100.0 * self.longest_path_s / total;

        println!("\nTiming summary:");
        println!(
            "  Shortest paths: {:.3}s ({:.1}%)",
            self.shortest_path_s, sp_pct
        );
        println!(
            "  Spanning tree:  {:.3}s ({:.1}%)",
            self.spanning_tree_s, mst_pct
        );
        println!(
            "  Longest paths:  {:.3}s ({:.1}%)",
            self.longest_path_s, lp_pct
        );
        println!("  Total:          {:.3}s", self.total_seconds());
    }
}

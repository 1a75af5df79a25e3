//! wf-core: stable foundation for wayfind.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - timing (stopwatch + per-stage report summary)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WfError, WfResult};
pub use numeric::*;
pub use timing::{ReportTimings, Timer};

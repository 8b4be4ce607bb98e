//! Aggregation engine: derived tallies over a project snapshot.
//!
//! # Responsibility
//! - Compute status counts, assignee workloads and headline stats.
//! - Stay free of I/O, logging and hidden state.

pub mod counts;
pub mod stats;

pub use counts::{AssigneeCounts, ProjectStats, StatusCounts};
pub use stats::{count_by_assignee, count_by_status, flatten_tasks, project_stats};

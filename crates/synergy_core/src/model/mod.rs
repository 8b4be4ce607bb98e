//! Domain model for projects, tasks and display preferences.
//!
//! # Responsibility
//! - Define canonical data structures read by aggregation and view assembly.
//! - Reject malformed entities at the boundary instead of aggregating them.
//!
//! # Invariants
//! - A `Task` is owned by exactly one `Project`.
//! - `TaskStatus` is a closed set; unknown values never reach aggregation.
//! - `Project::progress` is an independent input, never derived from tasks.

pub mod error;
pub mod preference;
pub mod project;
pub mod task;

//! Validation errors for domain entities.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reason why a project or task violates domain invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyProjectId,
    EmptyTaskId,
    EmptyAssignee { task_id: String },
    ProgressOutOfRange { project_id: String, progress: u8 },
    DuplicateTaskId { project_id: String, task_id: String },
    UnknownStatus(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProjectId => write!(f, "project id must not be empty"),
            Self::EmptyTaskId => write!(f, "task id must not be empty"),
            Self::EmptyAssignee { task_id } => {
                write!(f, "task `{task_id}` has an empty assignee")
            }
            Self::ProgressOutOfRange {
                project_id,
                progress,
            } => write!(
                f,
                "project `{project_id}` progress ({progress}) must be within 0..=100"
            ),
            Self::DuplicateTaskId {
                project_id,
                task_id,
            } => write!(
                f,
                "project `{project_id}` contains task id `{task_id}` more than once"
            ),
            Self::UnknownStatus(value) => write!(
                f,
                "unknown task status `{value}`; expected upcoming|in_progress|overdue|completed"
            ),
        }
    }
}

impl Error for ValidationError {}

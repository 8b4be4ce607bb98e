//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and its closed status/priority enumerations.
//! - Normalize missing assignees to the `Unassigned` sentinel.
//!
//! # Invariants
//! - `id` is non-empty; any other string is accepted verbatim.
//! - `assignee` is never blank; absence is spelled `UNASSIGNED`.
//! - Deserialization runs `Task::validate()`.

use crate::model::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Assignee sentinel for tasks nobody has picked up yet.
pub const UNASSIGNED: &str = "Unassigned";

/// Task lifecycle state.
///
/// Closed set: any other wire value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Scheduled but not started.
    Upcoming,
    /// Work is in progress.
    InProgress,
    /// Past its deadline without completion.
    Overdue,
    /// Finished.
    Completed,
}

impl TaskStatus {
    /// Every status in canonical order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Upcoming,
        TaskStatus::InProgress,
        TaskStatus::Overdue,
        TaskStatus::Completed,
    ];

    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::InProgress => "in_progress",
            Self::Overdue => "overdue",
            Self::Completed => "completed",
        }
    }

    /// Human-readable label used by charts and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::InProgress => "In Progress",
            Self::Overdue => "Overdue",
            Self::Completed => "Completed",
        }
    }

    /// Parses a wire string; surrounding whitespace is ignored.
    pub fn parse(value: &str) -> ValidationResult<Self> {
        match value.trim() {
            "upcoming" => Ok(Self::Upcoming),
            "in_progress" => Ok(Self::InProgress),
            "overdue" => Ok(Self::Overdue),
            "completed" => Ok(Self::Completed),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// Optional urgency attached by the task editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Unit of work owned by a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    /// Unique within the owning project; UUID v4 when generated here.
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    /// Display name, or `UNASSIGNED`.
    pub assignee: String,
    pub priority: Option<TaskPriority>,
}

impl Task {
    /// Creates an unassigned task with a generated id.
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            status,
            assignee: UNASSIGNED.to_string(),
            priority: None,
        }
    }

    /// Creates an unassigned task with a caller-provided id.
    ///
    /// Used by providers whose identities already exist upstream.
    ///
    /// # Errors
    /// - Returns an error when `id` is empty.
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        status: TaskStatus,
    ) -> ValidationResult<Self> {
        let task = Self {
            id: id.into(),
            title: title.into(),
            status,
            assignee: UNASSIGNED.to_string(),
            priority: None,
        };
        task.validate()?;
        Ok(task)
    }

    /// Sets the assignee; blank input maps to `UNASSIGNED`, anything else is
    /// kept byte-for-byte.
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = normalize_assignee(assignee.into());
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Validates task invariants.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyTaskId);
        }
        if self.assignee.trim().is_empty() {
            return Err(ValidationError::EmptyAssignee {
                task_id: self.id.clone(),
            });
        }
        Ok(())
    }
}

fn normalize_assignee(value: String) -> String {
    if value.trim().is_empty() {
        UNASSIGNED.to_string()
    } else {
        value
    }
}

#[derive(Deserialize)]
struct TaskRecord {
    id: String,
    title: String,
    status: TaskStatus,
    #[serde(default)]
    assignee: Option<String>,
    #[serde(default)]
    priority: Option<TaskPriority>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ValidationError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        let task = Self {
            id: value.id,
            title: value.title,
            status: value.status,
            assignee: normalize_assignee(value.assignee.unwrap_or_default()),
            priority: value.priority,
        };
        task.validate()?;
        Ok(task)
    }
}

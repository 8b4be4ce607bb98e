//! Project domain model.
//!
//! # Responsibility
//! - Define the project record owning an ordered task sequence.
//!
//! # Invariants
//! - `progress` stays within `0..=MAX_PROGRESS`.
//! - Task ids are unique inside one project.
//! - Task order is preserved exactly as supplied.

use crate::model::error::{ValidationError, ValidationResult};
use crate::model::task::Task;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Upper bound for `Project::progress`.
pub const MAX_PROGRESS: u8 = 100;

/// Named unit of work with a standalone progress percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Percentage supplied by the provider. Not reconciled with task status.
    pub progress: u8,
    pub tasks: Vec<Task>,
}

impl Project {
    /// Creates an empty project with a generated id and zero progress.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            progress: 0,
            tasks: Vec::new(),
        }
    }

    /// Creates an empty project with a caller-provided id.
    ///
    /// # Errors
    /// - Returns an error when `id` is blank or `progress > MAX_PROGRESS`.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        progress: u8,
    ) -> ValidationResult<Self> {
        let project = Self {
            id: id.into(),
            name: name.into(),
            progress,
            tasks: Vec::new(),
        };
        project.validate()?;
        Ok(project)
    }

    /// Appends one task, keeping insertion order.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Validates project invariants, including every owned task.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyProjectId);
        }
        if self.progress > MAX_PROGRESS {
            return Err(ValidationError::ProgressOutOfRange {
                project_id: self.id.clone(),
                progress: self.progress,
            });
        }

        let mut seen = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            task.validate()?;
            if !seen.insert(task.id.as_str()) {
                return Err(ValidationError::DuplicateTaskId {
                    project_id: self.id.clone(),
                    task_id: task.id.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct ProjectRecord {
    id: String,
    name: String,
    progress: u8,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ValidationError;

    fn try_from(value: ProjectRecord) -> Result<Self, Self::Error> {
        let project = Self {
            id: value.id,
            name: value.name,
            progress: value.progress,
            tasks: value.tasks,
        };
        project.validate()?;
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::Project;
    use crate::model::error::ValidationError;
    use crate::model::task::{Task, TaskStatus};

    #[test]
    fn with_id_rejects_progress_over_hundred() {
        let err = Project::with_id("p1", "Alpha", 101).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ProgressOutOfRange {
                project_id: "p1".to_string(),
                progress: 101,
            }
        );
        assert!(Project::with_id("p1", "Alpha", 100).is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_task_ids() {
        let task = Task::with_id("t1", "Budget", TaskStatus::Overdue).unwrap();
        let project = Project::with_id("p1", "Alpha", 10)
            .unwrap()
            .with_task(task.clone())
            .with_task(task);

        assert_eq!(
            project.validate().unwrap_err(),
            ValidationError::DuplicateTaskId {
                project_id: "p1".to_string(),
                task_id: "t1".to_string(),
            }
        );
    }

    #[test]
    fn new_project_has_generated_id_and_no_tasks() {
        let project = Project::new("Gamma");
        assert!(!project.id.is_empty());
        assert!(project.tasks.is_empty());
        assert_eq!(project.progress, 0);
        project.validate().unwrap();
    }
}

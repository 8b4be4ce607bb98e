//! Pure aggregation over a project snapshot.
//!
//! # Invariants
//! - Functions are total: empty input yields zeros and empty groupings.
//! - Output depends only on input; repeated calls return equal results.
//! - Task order follows project order, then task order inside each project.

use crate::aggregate::counts::{AssigneeCounts, ProjectStats, StatusCounts};
use crate::model::project::Project;
use crate::model::task::{Task, TaskStatus};

/// Concatenates every project's tasks, preserving both orders.
pub fn flatten_tasks(projects: &[Project]) -> Vec<&Task> {
    projects
        .iter()
        .flat_map(|project| project.tasks.iter())
        .collect()
}

/// Counts tasks per status; all four statuses are present in the result.
pub fn count_by_status<'a, I>(tasks: I) -> StatusCounts
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .fold(StatusCounts::default(), |mut counts, task| {
            counts.increment(task.status);
            counts
        })
}

/// Groups tasks by exact assignee string.
///
/// `UNASSIGNED` is an ordinary group.
pub fn count_by_assignee<'a, I>(tasks: I) -> AssigneeCounts
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .fold(AssigneeCounts::default(), |mut counts, task| {
            counts.increment(&task.assignee);
            counts
        })
}

/// Computes the dashboard headline numbers.
pub fn project_stats(projects: &[Project]) -> ProjectStats {
    let tasks = flatten_tasks(projects);
    let by_status = count_by_status(tasks.iter().copied());

    ProjectStats {
        total_tasks: tasks.len(),
        completed_tasks: by_status.get(TaskStatus::Completed),
        active_project_count: projects.len(),
        overdue_tasks: by_status.get(TaskStatus::Overdue),
    }
}

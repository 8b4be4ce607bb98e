//! Widget-shaped view models.
//!
//! # Responsibility
//! - Shape aggregation outputs into what each dashboard widget renders.
//!
//! # Invariants
//! - No aggregation happens here; inputs are already-computed tallies.
//! - Series order is fixed and part of the layout contract.

use crate::aggregate::counts::{AssigneeCounts, ProjectStats, StatusCounts};
use crate::model::project::Project;
use crate::model::task::{Task, TaskPriority, TaskStatus};
use serde::Serialize;

pub const STAT_LABEL_TOTAL_TASKS: &str = "Total Tasks";
pub const STAT_LABEL_COMPLETED: &str = "Completed";
pub const STAT_LABEL_ACTIVE_PROJECTS: &str = "Active Projects";
pub const STAT_LABEL_OVERDUE: &str = "Overdue";

/// Statuses shown by the breakdown pie. `Upcoming` is left out on purpose.
pub const PIE_STATUSES: [TaskStatus; 3] = [
    TaskStatus::Completed,
    TaskStatus::InProgress,
    TaskStatus::Overdue,
];

/// One labelled number: a stat card, pie segment or bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: usize,
}

impl ChartPoint {
    fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Row of the project health list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectProgressItem {
    pub name: String,
    pub progress: u8,
}

/// Sidebar navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectNavItem {
    pub id: String,
    pub name: String,
}

/// Row of the task preview list, with its status badge text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPreviewItem {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub status_label: String,
    pub assignee: String,
    pub priority: Option<TaskPriority>,
}

impl From<&Task> for TaskPreviewItem {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status,
            status_label: task.status.label().to_string(),
            assignee: task.assignee.clone(),
            priority: task.priority,
        }
    }
}

/// Four stat cards in fixed order: Total Tasks, Completed, Active Projects, Overdue.
pub fn stat_cards(stats: &ProjectStats) -> [ChartPoint; 4] {
    [
        ChartPoint::new(STAT_LABEL_TOTAL_TASKS, stats.total_tasks),
        ChartPoint::new(STAT_LABEL_COMPLETED, stats.completed_tasks),
        ChartPoint::new(STAT_LABEL_ACTIVE_PROJECTS, stats.active_project_count),
        ChartPoint::new(STAT_LABEL_OVERDUE, stats.overdue_tasks),
    ]
}

/// Pie segments for `PIE_STATUSES`, always exactly three.
pub fn status_pie_series(counts: &StatusCounts) -> [ChartPoint; 3] {
    PIE_STATUSES.map(|status| ChartPoint::new(status.label(), counts.get(status)))
}

/// One bar per assignee, in first-appearance order. Not sorted.
pub fn assignee_bar_series(counts: &AssigneeCounts) -> Vec<ChartPoint> {
    counts
        .iter()
        .map(|(assignee, count)| ChartPoint::new(assignee, count))
        .collect()
}

/// First `limit` tasks in flattened order; fewer when the input is shorter.
pub fn task_preview<'a>(tasks: &[&'a Task], limit: usize) -> Vec<&'a Task> {
    tasks.iter().take(limit).copied().collect()
}

/// Project progress passed through verbatim, in input order.
pub fn project_progress_list(projects: &[Project]) -> Vec<ProjectProgressItem> {
    projects
        .iter()
        .map(|project| ProjectProgressItem {
            name: project.name.clone(),
            progress: project.progress,
        })
        .collect()
}

pub fn project_nav_items(projects: &[Project]) -> Vec<ProjectNavItem> {
    projects
        .iter()
        .map(|project| ProjectNavItem {
            id: project.id.clone(),
            name: project.name.clone(),
        })
        .collect()
}

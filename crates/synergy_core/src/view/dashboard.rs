//! Full dashboard view model.
//!
//! # Invariants
//! - The display preference is an explicit input, never ambient state.
//! - Every widget is derived from the same snapshot in one pass.

use crate::aggregate::{count_by_assignee, count_by_status, flatten_tasks, project_stats};
use crate::model::preference::DisplayPreference;
use crate::model::project::Project;
use crate::view::palette::ChartPalette;
use crate::view::widgets::{
    assignee_bar_series, project_nav_items, project_progress_list, stat_cards, status_pie_series,
    task_preview, ChartPoint, ProjectNavItem, ProjectProgressItem, TaskPreviewItem,
};
use serde::Serialize;

/// Rows shown by the "My Week Tasks" list when the caller has no preference.
pub const DEFAULT_TASK_PREVIEW_LIMIT: usize = 5;

/// Everything the dashboard screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub display: DisplayPreference,
    pub palette: ChartPalette,
    pub stat_cards: Vec<ChartPoint>,
    pub status_pie: Vec<ChartPoint>,
    pub assignee_bars: Vec<ChartPoint>,
    pub task_preview: Vec<TaskPreviewItem>,
    pub project_progress: Vec<ProjectProgressItem>,
    pub project_nav: Vec<ProjectNavItem>,
}

/// Builds the dashboard for one snapshot under one display mode.
pub fn assemble_dashboard(
    projects: &[Project],
    display: DisplayPreference,
    preview_limit: usize,
) -> DashboardView {
    let tasks = flatten_tasks(projects);
    let by_status = count_by_status(tasks.iter().copied());
    let by_assignee = count_by_assignee(tasks.iter().copied());
    let stats = project_stats(projects);

    DashboardView {
        display,
        palette: ChartPalette::for_preference(display),
        stat_cards: stat_cards(&stats).to_vec(),
        status_pie: status_pie_series(&by_status).to_vec(),
        assignee_bars: assignee_bar_series(&by_assignee),
        task_preview: task_preview(&tasks, preview_limit)
            .into_iter()
            .map(TaskPreviewItem::from)
            .collect(),
        project_progress: project_progress_list(projects),
        project_nav: project_nav_items(projects),
    }
}

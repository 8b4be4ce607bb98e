//! View-model assembler for dashboard widgets.
//!
//! # Responsibility
//! - Turn aggregation outputs into display-ready structures.
//! - Keep presentation shaping out of the aggregation engine.

pub mod dashboard;
pub mod palette;
pub mod widgets;

pub use dashboard::{assemble_dashboard, DashboardView, DEFAULT_TASK_PREVIEW_LIMIT};
pub use palette::ChartPalette;
pub use widgets::{
    assignee_bar_series, project_nav_items, project_progress_list, stat_cards, status_pie_series,
    task_preview, ChartPoint, ProjectNavItem, ProjectProgressItem, TaskPreviewItem,
};

//! Core logic for SynergySphere dashboards.
//!
//! Turns a project/task snapshot into display-ready aggregates and keeps the
//! persisted light/dark display preference.

pub mod aggregate;
pub mod db;
pub mod logging;
pub mod model;
pub mod provider;
pub mod repo;
pub mod service;
pub mod view;

pub use aggregate::{
    count_by_assignee, count_by_status, flatten_tasks, project_stats, AssigneeCounts,
    ProjectStats, StatusCounts,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::error::{ValidationError, ValidationResult};
pub use model::preference::{toggle, DisplayPreference};
pub use model::project::{Project, MAX_PROGRESS};
pub use model::task::{Task, TaskPriority, TaskStatus, UNASSIGNED};
pub use provider::{
    JsonFileProjectProvider, ProjectProvider, ProviderError, ProviderResult,
    SampleProjectProvider, StaticProjectProvider,
};
pub use repo::preference_repo::{
    InMemoryPreferenceStore, PreferenceStore, RepoError, RepoResult, SqlitePreferenceStore,
    PREFERENCE_KEY_MODE,
};
pub use service::dashboard_service::{
    DashboardService, DashboardServiceError, DashboardServiceResult,
};
pub use view::{
    assemble_dashboard, assignee_bar_series, project_nav_items, project_progress_list,
    stat_cards, status_pie_series, task_preview, ChartPalette, ChartPoint, DashboardView,
    ProjectNavItem, ProjectProgressItem, TaskPreviewItem, DEFAULT_TASK_PREVIEW_LIMIT,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose dashboard and display-mode use-cases to Dart via FRB.
//! - Flatten core view models into FFI-friendly DTOs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported inside the response envelope, never dropped.

use synergy_core::db::open_db;
use synergy_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ChartPoint, DashboardService, DashboardView, DisplayPreference, InMemoryPreferenceStore,
    PreferenceStore, SampleProjectProvider, SqlitePreferenceStore, DEFAULT_TASK_PREVIEW_LIMIT,
};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const SETTINGS_DB_FILE_NAME: &str = "synergy_settings.sqlite3";
const PREVIEW_LIMIT_MAX: u32 = 50;
static SETTINGS_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Labelled number for stat cards, pie segments and bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPointDto {
    pub label: String,
    pub value: u32,
}

/// Task row for the preview list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPreviewDto {
    pub task_id: String,
    pub title: String,
    /// Wire status (`upcoming|in_progress|overdue|completed`) for badge styling.
    pub status: String,
    pub status_label: String,
    pub assignee: String,
    /// `low|medium|high`, absent when the task has no priority.
    pub priority: Option<String>,
}

/// Project row for the sidebar and the health list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectProgressDto {
    pub project_id: String,
    pub name: String,
    pub progress: u32,
}

/// Dashboard response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardResponse {
    pub ok: bool,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
    /// `light` or `dark`.
    pub display_mode: String,
    pub pie_colors: Vec<String>,
    pub bar_fill: String,
    pub axis_stroke: String,
    pub stat_cards: Vec<ChartPointDto>,
    pub status_pie: Vec<ChartPointDto>,
    pub assignee_bars: Vec<ChartPointDto>,
    pub task_preview: Vec<TaskPreviewDto>,
    pub projects: Vec<ProjectProgressDto>,
}

/// Display mode response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModeResponse {
    pub ok: bool,
    /// Mode now in effect, even when persistence failed.
    pub display_mode: String,
    pub message: String,
}

/// Loads the dashboard for the current data set and stored display mode.
///
/// `preview_limit`: `None` uses the default row count; values above the
/// maximum are clamped; `Some(0)` yields an empty preview.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Always returns four stat cards and three pie segments. Settings DB or
///   provider failures set `ok=false` and fall back to `light` or an empty
///   snapshot respectively.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_load(preview_limit: Option<u32>) -> DashboardResponse {
    dashboard_load_at(&resolve_settings_db_path(), preview_limit)
}

/// Returns the stored display mode (`light` when unset or unreadable).
#[flutter_rust_bridge::frb(sync)]
pub fn display_mode_get() -> String {
    display_mode_get_at(&resolve_settings_db_path())
}

/// Flips the display mode and persists it.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn display_mode_toggle() -> DisplayModeResponse {
    let conn = match open_db(resolve_settings_db_path()) {
        Ok(conn) => conn,
        Err(err) => {
            return DisplayModeResponse {
                ok: false,
                display_mode: DisplayPreference::default().as_str().to_string(),
                message: format!("display_mode_toggle failed: {err}"),
            };
        }
    };

    let mut service =
        DashboardService::new(SampleProjectProvider::new(), SqlitePreferenceStore::new(&conn));
    let result = service.toggle_display();
    let display_mode = service.display().as_str().to_string();
    match result {
        Ok(_) => DisplayModeResponse {
            ok: true,
            display_mode,
            message: String::new(),
        },
        Err(err) => DisplayModeResponse {
            ok: false,
            display_mode,
            message: format!("display_mode_toggle failed: {err}"),
        },
    }
}

fn dashboard_load_at(db_path: &Path, preview_limit: Option<u32>) -> DashboardResponse {
    let limit = normalize_preview_limit(preview_limit);
    match open_db(db_path) {
        Ok(conn) => build_dashboard(SqlitePreferenceStore::new(&conn), limit, None),
        Err(err) => {
            log::warn!(
                "event=ffi_call module=ffi status=fallback call=dashboard_load reason=settings_db_unavailable error={err}"
            );
            build_dashboard(
                InMemoryPreferenceStore::new(),
                limit,
                Some(format!("settings DB unavailable: {err}")),
            )
        }
    }
}

fn build_dashboard<S: PreferenceStore>(
    store: S,
    limit: usize,
    settings_error: Option<String>,
) -> DashboardResponse {
    let mut service = DashboardService::new(SampleProjectProvider::new(), store);
    let mut problems: Vec<String> = settings_error.into_iter().collect();
    if let Err(err) = service.refresh() {
        problems.push(err.to_string());
    }

    let mut response = to_dashboard_response(service.dashboard(limit));
    if !problems.is_empty() {
        response.ok = false;
        response.message = format!("dashboard_load failed: {}", problems.join("; "));
    }
    response
}

fn display_mode_get_at(db_path: &Path) -> String {
    match open_db(db_path) {
        Ok(conn) => SqlitePreferenceStore::new(&conn).load().as_str().to_string(),
        Err(err) => {
            log::warn!(
                "event=ffi_call module=ffi status=fallback call=display_mode_get reason=settings_db_unavailable error={err}"
            );
            DisplayPreference::default().as_str().to_string()
        }
    }
}

fn normalize_preview_limit(limit: Option<u32>) -> usize {
    match limit {
        None => DEFAULT_TASK_PREVIEW_LIMIT,
        Some(value) => value.min(PREVIEW_LIMIT_MAX) as usize,
    }
}

fn resolve_settings_db_path() -> PathBuf {
    SETTINGS_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("SYNERGY_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(SETTINGS_DB_FILE_NAME)
        })
        .clone()
}

fn to_dashboard_response(view: DashboardView) -> DashboardResponse {
    let projects = view
        .project_nav
        .into_iter()
        .zip(view.project_progress)
        .map(|(nav, progress)| ProjectProgressDto {
            project_id: nav.id,
            name: nav.name,
            progress: u32::from(progress.progress),
        })
        .collect();

    DashboardResponse {
        ok: true,
        message: String::new(),
        display_mode: view.display.as_str().to_string(),
        pie_colors: view.palette.pie.iter().map(|c| c.to_string()).collect(),
        bar_fill: view.palette.bar_fill.to_string(),
        axis_stroke: view.palette.axis_stroke.to_string(),
        stat_cards: to_points(view.stat_cards),
        status_pie: to_points(view.status_pie),
        assignee_bars: to_points(view.assignee_bars),
        task_preview: view
            .task_preview
            .into_iter()
            .map(|item| TaskPreviewDto {
                task_id: item.id,
                title: item.title,
                status: item.status.as_str().to_string(),
                status_label: item.status_label,
                assignee: item.assignee,
                priority: item.priority.map(|p| p.as_str().to_string()),
            })
            .collect(),
        projects,
    }
}

fn to_points(points: Vec<ChartPoint>) -> Vec<ChartPointDto> {
    points
        .into_iter()
        .map(|point| ChartPointDto {
            label: point.label,
            value: u32::try_from(point.value).unwrap_or(u32::MAX),
        })
        .collect()
}

//! Dashboard use-case service.
//!
//! # Responsibility
//! - Hold the current project snapshot and the explicit display preference.
//! - Replace the snapshot atomically from one provider fetch.
//! - Persist every display mode change through the preference store.
//!
//! # Invariants
//! - The snapshot is either the previous complete one, a new complete one, or
//!   empty after a failed fetch. Never partial.
//! - The preference is read from the store once, at construction.
//! - Failures are returned to the caller after being logged.

use crate::aggregate::{project_stats, ProjectStats};
use crate::model::preference::{toggle, DisplayPreference};
use crate::model::project::Project;
use crate::provider::{ProjectProvider, ProviderError};
use crate::repo::preference_repo::{PreferenceStore, RepoError};
use crate::view::{assemble_dashboard, DashboardView};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Service error for dashboard use-cases.
#[derive(Debug)]
pub enum DashboardServiceError {
    /// The provider could not produce a snapshot; the snapshot is now empty.
    Provider(ProviderError),
    /// The display preference could not be persisted.
    Preference(RepoError),
}

impl Display for DashboardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provider(err) => write!(f, "{err}"),
            Self::Preference(err) => write!(f, "failed to persist display preference: {err}"),
        }
    }
}

impl Error for DashboardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Provider(err) => Some(err),
            Self::Preference(err) => Some(err),
        }
    }
}

impl From<ProviderError> for DashboardServiceError {
    fn from(value: ProviderError) -> Self {
        Self::Provider(value)
    }
}

impl From<RepoError> for DashboardServiceError {
    fn from(value: RepoError) -> Self {
        Self::Preference(value)
    }
}

pub type DashboardServiceResult<T> = Result<T, DashboardServiceError>;

/// Dashboard state holder over a provider and a preference store.
pub struct DashboardService<P: ProjectProvider, S: PreferenceStore> {
    provider: P,
    store: S,
    projects: Vec<Project>,
    display: DisplayPreference,
}

impl<P: ProjectProvider, S: PreferenceStore> DashboardService<P, S> {
    /// Creates a service with an empty snapshot and the stored preference.
    pub fn new(provider: P, store: S) -> Self {
        let display = store.load();
        Self {
            provider,
            store,
            projects: Vec::new(),
            display,
        }
    }

    /// Fetches a fresh snapshot and swaps it in.
    ///
    /// Returns the number of loaded projects.
    ///
    /// # Errors
    /// - `DashboardServiceError::Provider` when the fetch fails. The snapshot
    ///   is cleared before returning.
    pub fn refresh(&mut self) -> DashboardServiceResult<usize> {
        let started_at = Instant::now();
        let provider_id = self.provider.provider_id().to_string();

        match self.provider.fetch_projects() {
            Ok(projects) => {
                self.projects = projects;
                info!(
                    "event=snapshot_refresh module=service status=ok provider={provider_id} projects={} duration_ms={}",
                    self.projects.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(self.projects.len())
            }
            Err(err) => {
                self.projects = Vec::new();
                error!(
                    "event=snapshot_refresh module=service status=error provider={provider_id} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err.into())
            }
        }
    }

    /// Current snapshot in provider order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn display(&self) -> DisplayPreference {
        self.display
    }

    /// Flips the display mode and persists it.
    ///
    /// The in-memory mode flips even when persistence fails, so the UI keeps
    /// responding; the error still reaches the caller.
    pub fn toggle_display(&mut self) -> DashboardServiceResult<DisplayPreference> {
        let next = toggle(self.display);
        self.set_display(next)?;
        Ok(next)
    }

    /// Sets and persists an explicit display mode.
    pub fn set_display(&mut self, display: DisplayPreference) -> DashboardServiceResult<()> {
        self.display = display;
        if let Err(err) = self.store.save(display) {
            error!(
                "event=preference_save module=service status=error value={} error={err}",
                display.as_str()
            );
            return Err(err.into());
        }
        Ok(())
    }

    pub fn stats(&self) -> ProjectStats {
        project_stats(&self.projects)
    }

    /// Assembles the dashboard for the current snapshot and display mode.
    pub fn dashboard(&self, preview_limit: usize) -> DashboardView {
        assemble_dashboard(&self.projects, self.display, preview_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::{DashboardService, DashboardServiceError};
    use crate::model::preference::DisplayPreference;
    use crate::model::project::Project;
    use crate::provider::{ProjectProvider, ProviderError, ProviderResult, SampleProjectProvider};
    use crate::repo::preference_repo::{InMemoryPreferenceStore, PreferenceStore};
    use std::cell::Cell;

    struct FlakyProvider {
        fail: Cell<bool>,
    }

    impl ProjectProvider for FlakyProvider {
        fn provider_id(&self) -> &str {
            "flaky"
        }

        fn fetch_projects(&self) -> ProviderResult<Vec<Project>> {
            if self.fail.get() {
                return Err(ProviderError::Unavailable("backend offline".to_string()));
            }
            SampleProjectProvider::new().fetch_projects()
        }
    }

    #[test]
    fn failed_refresh_clears_snapshot_and_reports_error() {
        let provider = FlakyProvider {
            fail: Cell::new(false),
        };
        let mut service = DashboardService::new(&provider, InMemoryPreferenceStore::new());
        assert_eq!(service.refresh().unwrap(), 2);

        provider.fail.set(true);
        let err = service.refresh().unwrap_err();
        assert!(matches!(
            err,
            DashboardServiceError::Provider(ProviderError::Unavailable(_))
        ));
        assert!(service.projects().is_empty());
        assert_eq!(service.stats().active_project_count, 0);
    }

    #[test]
    fn toggle_persists_each_change() {
        let store = InMemoryPreferenceStore::new();
        let mut service = DashboardService::new(SampleProjectProvider::new(), &store);
        assert_eq!(service.display(), DisplayPreference::Light);

        assert_eq!(service.toggle_display().unwrap(), DisplayPreference::Dark);
        assert_eq!(store.load(), DisplayPreference::Dark);

        assert_eq!(service.toggle_display().unwrap(), DisplayPreference::Light);
        assert_eq!(store.load(), DisplayPreference::Light);
    }

    #[test]
    fn service_reads_stored_preference_at_construction() {
        let store = InMemoryPreferenceStore::new();
        store.save(DisplayPreference::Dark).unwrap();

        let service = DashboardService::new(SampleProjectProvider::new(), &store);
        assert_eq!(service.display(), DisplayPreference::Dark);
        assert!(service.dashboard(5).display.is_dark());
    }
}

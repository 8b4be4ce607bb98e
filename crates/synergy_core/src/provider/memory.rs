//! In-process providers.

use crate::model::error::ValidationResult;
use crate::model::project::Project;
use crate::model::task::{Task, TaskStatus, UNASSIGNED};
use crate::provider::{ProjectProvider, ProviderResult};

/// Serves a caller-supplied snapshot.
///
/// Projects are validated on every fetch, so hand-built fixtures cannot
/// smuggle invalid entities into aggregation.
#[derive(Debug, Clone, Default)]
pub struct StaticProjectProvider {
    projects: Vec<Project>,
}

impl StaticProjectProvider {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

impl ProjectProvider for StaticProjectProvider {
    fn provider_id(&self) -> &str {
        "static"
    }

    fn fetch_projects(&self) -> ProviderResult<Vec<Project>> {
        for project in &self.projects {
            project.validate()?;
        }
        Ok(self.projects.clone())
    }
}

/// Fixed demo data set used until a real backend exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProjectProvider;

impl SampleProjectProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectProvider for SampleProjectProvider {
    fn provider_id(&self) -> &str {
        "sample"
    }

    fn fetch_projects(&self) -> ProviderResult<Vec<Project>> {
        Ok(sample_projects()?)
    }
}

fn sample_projects() -> ValidationResult<Vec<Project>> {
    let alpha = Project::with_id("p1", "Project Alpha", 75)?
        .with_task(
            Task::with_id("t1", "Review Q3 Plan", TaskStatus::InProgress)?.with_assignee("Alice"),
        )
        .with_task(Task::with_id("t2", "Budget Report", TaskStatus::Overdue)?.with_assignee("Bob"))
        .with_task(Task::with_id("t3", "Wireframes", TaskStatus::Upcoming)?.with_assignee("Alice"));

    let beta = Project::with_id("p2", "Project Beta", 40)?.with_task(
        Task::with_id("t4", "API Integration", TaskStatus::InProgress)?.with_assignee(UNASSIGNED),
    );

    Ok(vec![alpha, beta])
}

#[cfg(test)]
mod tests {
    use super::{SampleProjectProvider, StaticProjectProvider};
    use crate::model::error::ValidationError;
    use crate::model::project::Project;
    use crate::provider::{ProjectProvider, ProviderError};

    #[test]
    fn sample_provider_returns_two_projects_in_order() {
        let projects = SampleProjectProvider::new().fetch_projects().unwrap();
        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Project Alpha", "Project Beta"]);
        assert_eq!(projects[0].tasks.len(), 3);
        assert_eq!(projects[1].tasks[0].assignee, "Unassigned");
    }

    #[test]
    fn static_provider_rejects_invalid_fixture() {
        let mut project = Project::with_id("p9", "Broken", 10).unwrap();
        project.progress = 150;

        let err = StaticProjectProvider::new(vec![project])
            .fetch_projects()
            .unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Validation(ValidationError::ProgressOutOfRange { progress: 150, .. })
        ));
    }
}

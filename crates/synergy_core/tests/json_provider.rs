use std::fs;
use synergy_core::{
    DashboardService, DashboardServiceError, DisplayPreference, InMemoryPreferenceStore,
    JsonFileProjectProvider, ProjectProvider, ProviderError,
};

const VALID_SNAPSHOT: &str = r#"[
  {
    "id": "p1",
    "name": "Project Alpha",
    "progress": 75,
    "tasks": [
      { "id": "t1", "title": "Review Q3 Plan", "status": "in_progress", "assignee": "Alice" },
      { "id": "t2", "title": "Budget Report", "status": "overdue", "assignee": "Bob" }
    ]
  },
  { "id": "p2", "name": "Project Beta", "progress": 40 }
]"#;

#[test]
fn reads_projects_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    fs::write(&path, VALID_SNAPSHOT).unwrap();

    let projects = JsonFileProjectProvider::new(&path).fetch_projects().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].tasks[1].id, "t2");
    assert!(projects[1].tasks.is_empty());
}

#[test]
fn free_form_ids_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    fs::write(
        &path,
        r#"[{ "id": "Project Alpha", "name": "Alpha", "progress": 10,
              "tasks": [
                { "id": "task 1", "title": "spaced", "status": "upcoming" },
                { "id": "é1", "title": "accented", "status": "completed", "assignee": "Zoë" }
              ] }]"#,
    )
    .unwrap();

    let projects = JsonFileProjectProvider::new(&path).fetch_projects().unwrap();
    assert_eq!(projects[0].id, "Project Alpha");
    let ids: Vec<&str> = projects[0].tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["task 1", "é1"]);
    assert_eq!(projects[0].tasks[1].assignee, "Zoë");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let provider = JsonFileProjectProvider::new(dir.path().join("absent.json"));

    let err = provider.fetch_projects().unwrap_err();
    assert!(matches!(err, ProviderError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn unknown_status_fails_whole_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    fs::write(
        &path,
        r#"[{ "id": "p1", "name": "Bad", "progress": 10,
              "tasks": [{ "id": "t1", "title": "x", "status": "done" }] }]"#,
    )
    .unwrap();

    let err = JsonFileProjectProvider::new(&path)
        .fetch_projects()
        .unwrap_err();
    assert!(matches!(err, ProviderError::Decode(_)));
}

#[test]
fn service_reports_provider_failure_with_empty_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    fs::write(&path, VALID_SNAPSHOT).unwrap();

    let provider = JsonFileProjectProvider::new(&path);
    let mut service = DashboardService::new(&provider, InMemoryPreferenceStore::new());
    assert_eq!(service.refresh().unwrap(), 2);
    assert_eq!(service.stats().total_tasks, 2);

    fs::write(&path, "not json").unwrap();
    let err = service.refresh().unwrap_err();
    assert!(matches!(
        err,
        DashboardServiceError::Provider(ProviderError::Decode(_))
    ));

    let view = service.dashboard(5);
    assert_eq!(view.display, DisplayPreference::Light);
    assert!(view.stat_cards.iter().all(|card| card.value == 0));
}

use synergy_core::{
    count_by_assignee, count_by_status, flatten_tasks, project_stats, Project, Task, TaskStatus,
    UNASSIGNED,
};

fn task(id: &str, status: TaskStatus, assignee: &str) -> Task {
    Task::with_id(id, format!("task {id}"), status)
        .unwrap()
        .with_assignee(assignee)
}

fn two_project_snapshot() -> Vec<Project> {
    vec![
        Project::with_id("p1", "Project Alpha", 75)
            .unwrap()
            .with_task(task("t1", TaskStatus::InProgress, "Alice"))
            .with_task(task("t2", TaskStatus::Overdue, "Bob"))
            .with_task(task("t3", TaskStatus::Upcoming, "Alice")),
        Project::with_id("p2", "Project Beta", 40)
            .unwrap()
            .with_task(task("t4", TaskStatus::InProgress, "")),
    ]
}

#[test]
fn two_project_scenario_yields_expected_stats() {
    let projects = two_project_snapshot();
    let stats = project_stats(&projects);

    assert_eq!(stats.total_tasks, 4);
    assert_eq!(stats.completed_tasks, 0);
    assert_eq!(stats.overdue_tasks, 1);
    assert_eq!(stats.active_project_count, 2);

    let by_assignee = count_by_assignee(flatten_tasks(&projects));
    assert_eq!(by_assignee.get("Alice"), 2);
    assert_eq!(by_assignee.get("Bob"), 1);
    assert_eq!(by_assignee.get(UNASSIGNED), 1);
}

#[test]
fn status_counts_sum_to_task_count() {
    let projects = two_project_snapshot();
    let tasks = flatten_tasks(&projects);
    let counts = count_by_status(tasks.iter().copied());

    assert_eq!(counts.total(), tasks.len());
}

#[test]
fn status_counts_always_cover_all_four_statuses() {
    let projects = vec![Project::with_id("p1", "Solo", 0)
        .unwrap()
        .with_task(task("t1", TaskStatus::Completed, "Alice"))];
    let counts = count_by_status(flatten_tasks(&projects));

    let statuses: Vec<TaskStatus> = counts.iter().map(|(status, _)| status).collect();
    assert_eq!(statuses, TaskStatus::ALL.to_vec());
    assert_eq!(counts.get(TaskStatus::Completed), 1);
    assert_eq!(counts.get(TaskStatus::Upcoming), 0);
    assert_eq!(counts.get(TaskStatus::InProgress), 0);
    assert_eq!(counts.get(TaskStatus::Overdue), 0);
}

#[test]
fn active_project_count_ignores_task_count() {
    let projects = vec![
        Project::with_id("p1", "Empty", 0).unwrap(),
        Project::with_id("p2", "Also empty", 100).unwrap(),
        Project::with_id("p3", "Busy", 50)
            .unwrap()
            .with_task(task("t1", TaskStatus::Upcoming, "Carol")),
    ];

    assert_eq!(project_stats(&projects).active_project_count, projects.len());
}

#[test]
fn assignee_groups_keep_first_appearance_order() {
    let projects = vec![Project::with_id("p1", "Order", 0)
        .unwrap()
        .with_task(task("t1", TaskStatus::Upcoming, "A"))
        .with_task(task("t2", TaskStatus::Upcoming, "B"))
        .with_task(task("t3", TaskStatus::Upcoming, "A"))
        .with_task(task("t4", TaskStatus::Upcoming, "C"))];

    let counts = count_by_assignee(flatten_tasks(&projects));
    let groups: Vec<(&str, usize)> = counts.iter().collect();
    assert_eq!(groups, vec![("A", 2), ("B", 1), ("C", 1)]);
}

#[test]
fn assignee_groups_use_exact_strings() {
    let projects = vec![Project::with_id("p1", "Exact", 0)
        .unwrap()
        .with_task(task("t1", TaskStatus::Upcoming, "Alice"))
        .with_task(task("t2", TaskStatus::Upcoming, "Alice "))
        .with_task(task("t3", TaskStatus::Upcoming, "Alice"))];

    let counts = count_by_assignee(flatten_tasks(&projects));
    let groups: Vec<(&str, usize)> = counts.iter().collect();
    assert_eq!(groups, vec![("Alice", 2), ("Alice ", 1)]);
}

#[test]
fn aggregation_is_repeatable_for_identical_input() {
    let projects = two_project_snapshot();

    assert_eq!(project_stats(&projects), project_stats(&projects));
    assert_eq!(
        count_by_assignee(flatten_tasks(&projects)),
        count_by_assignee(flatten_tasks(&projects))
    );
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `synergy_core` linkage without the Flutter/FFI runtime.
//! - Print the sample dashboard deterministically.

use synergy_core::{
    assemble_dashboard, DisplayPreference, ProjectProvider, SampleProjectProvider,
    DEFAULT_TASK_PREVIEW_LIMIT,
};

fn main() {
    println!("synergy_core ping={}", synergy_core::ping());
    println!("synergy_core version={}", synergy_core::core_version());

    let projects = match SampleProjectProvider::new().fetch_projects() {
        Ok(projects) => projects,
        Err(err) => {
            eprintln!("sample provider failed: {err}");
            std::process::exit(1);
        }
    };
    let view = assemble_dashboard(
        &projects,
        DisplayPreference::default(),
        DEFAULT_TASK_PREVIEW_LIMIT,
    );

    for card in &view.stat_cards {
        println!("stat {}={}", card.label, card.value);
    }
    for segment in &view.status_pie {
        println!("pie {}={}", segment.label, segment.value);
    }
    for bar in &view.assignee_bars {
        println!("assignee {}={}", bar.label, bar.value);
    }
    for task in &view.task_preview {
        println!("task {} [{}]", task.title, task.status_label);
    }
    for project in &view.project_progress {
        println!("project {} {}%", project.name, project.progress);
    }
}

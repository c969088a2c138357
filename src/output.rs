use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::types::RolloutTask;

/// Pretty JSON with two-space indentation, for log lines.
pub fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&RolloutTask> for TaskRow {
    fn from(task: &RolloutTask) -> Self {
        Self {
            stage: task.stage.clone(),
            task: truncate(&task.title, 60),
            status: status_colored(&task.status),
        }
    }
}

/// Table of rollout tasks, or `None` when there is nothing to show.
pub fn task_table(tasks: &[RolloutTask]) -> Option<String> {
    if tasks.is_empty() {
        return None;
    }

    let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
    Some(Table::new(rows).with(Style::rounded()).to_string())
}

/// Format a task status with color
pub fn status_colored(status: &str) -> String {
    match status {
        "DONE" => status.green().to_string(),
        "RUNNING" => status.blue().to_string(),
        "PENDING" | "PENDING_APPROVAL" => status.yellow().to_string(),
        "FAILED" | "CANCELED" => status.red().to_string(),
        "SKIPPED" | "NOT_STARTED" => status.bright_black().to_string(),
        _ => status.to_string(),
    }
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

//! Formatting helpers for menu output
//!
//! Renders task lists into the pipe-separated text lines the shell prints.

use crate::task::Task;

/// Format a single task as one display line
pub fn format_task_line(task: &Task) -> String {
    let deadline = task
        .deadline
        .map(|d| d.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "ID: {} | Description: {} | Deadline: {} | Priority: {} | Status: {}",
        task.id, task.description, deadline, task.priority, task.status
    )
}

/// Format a task list under a header, or the empty-case message when
/// there is nothing to show
pub fn format_tasks(tasks: &[Task], header: &str, empty_message: &str) -> String {
    if tasks.is_empty() {
        return empty_message.to_string();
    }

    let mut result = format!("{}\n", header);
    for task in tasks {
        result.push_str(&format_task_line(task));
        result.push('\n');
    }
    result
}

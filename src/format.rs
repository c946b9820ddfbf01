//! Output formatting for the task list view.
//!
//! Rendering is a pure function of the task sequence: no side effects, same
//! input gives the same view. One row per task with its completion marker,
//! text, and the id used to address toggle/delete actions.

use crate::types::Task;

/// Output format for the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Render the task collection in the requested format.
pub fn render_tasks(tasks: &[Task], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_tasks_text(tasks),
        OutputFormat::Json => {
            serde_json::to_string_pretty(tasks).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

/// Render one line per task. An empty collection renders as an empty view.
fn render_tasks_text(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&render_task_row(task));
        out.push('\n');
    }
    out
}

/// Format a single row: completion marker, text, id.
fn render_task_row(task: &Task) -> String {
    let marker = if task.completed { "[x]" } else { "[ ]" };
    format!("{} {}  ({})", marker, task.text, task.id)
}

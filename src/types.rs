//! Core types for the task list client.

use serde::{Deserialize, Serialize};

/// A to-do item as exchanged with the remote API and mirrored locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Synthesize a task locally when the remote API is unreachable.
    ///
    /// The id is derived from the current timestamp in milliseconds, matching
    /// the uniqueness guarantees of the remote collection only as far as one
    /// creation per millisecond.
    pub fn synthesized(text: impl Into<String>) -> Self {
        Self {
            id: crate::store::now_ms().to_string(),
            text: text.into(),
            completed: false,
        }
    }
}

/// Body of a create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub text: String,
}

/// Body of an update request. Only the completion flag is mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPatch {
    pub completed: bool,
}

use serde::{Deserialize, Serialize};

use crate::task::TaskId;

/// A requested state change, not yet validated. Each variant maps to
/// zero or one event: validation may reject it instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Create a task with a caller-supplied id and title. Add does not
    /// accept a completion flag; new tasks always start uncompleted.
    Add { id: TaskId, title: String },
    /// Remove the task with the given id.
    Delete { id: TaskId },
    /// Set the completion flag of the task with the given id.
    Patch { id: TaskId, completed: bool },
    /// Remove all completed tasks.
    DeleteCompleted,
    /// Set the completion flag of every task.
    PatchAll { completed: bool },
}

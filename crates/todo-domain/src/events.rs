use serde::{Deserialize, Serialize};

use crate::task::Task;

/// A validated fact describing a state change that has occurred.
/// Task-carrying variants hold the full task value, not a delta:
/// `TaskPatched` carries the task as it looks *after* the patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TaskAdded(Task),
    TaskDeleted(Task),
    TaskPatched(Task),
    CompletedTasksDeleted,
    AllTasksMarkedAs { completed: bool },
}

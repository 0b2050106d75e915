use thiserror::Error;
use uuid::Uuid;

/// Validation failures, not system faults. A rejected command never
/// changes state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoError {
    #[error("a task with id {0} already exists")]
    TaskIdAlreadyExists(Uuid),

    #[error("no task with id {0} exists")]
    TaskNotFound(Uuid),
}

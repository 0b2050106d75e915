use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TaskId = Uuid;

/// One to-do item. `id` is the identity key and never changes; `title`
/// is fixed at creation (there is no rename operation); only
/// `completed` is mutable, via patch events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// New tasks always start out not completed.
    pub fn new(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }

    /// Copy of this task with only the completion flag replaced.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_uncompleted() {
        let task = Task::new(Uuid::new_v4(), "write report".to_string());
        assert!(!task.completed);
    }

    #[test]
    fn with_completed_preserves_id_and_title() {
        let id = Uuid::new_v4();
        let task = Task::new(id, "water plants".to_string());
        let patched = task.clone().with_completed(true);

        assert_eq!(patched.id, id);
        assert_eq!(patched.title, task.title);
        assert!(patched.completed);
    }
}

use todo_core::{TodoError, TodoResult};

use crate::commands::Command;
use crate::events::Event;
use crate::task::{Task, TaskId};

/// Command validator: decides whether `command` is legal against the
/// current task list and, if so, computes the event that records it.
/// Pure and deterministic; rejection leaves no trace.
pub fn handle(command: Command, tasks: &[Task]) -> TodoResult<Event> {
    match command {
        Command::Add { id, title } => {
            if find_task(tasks, id).is_some() {
                Err(TodoError::TaskIdAlreadyExists(id))
            } else {
                Ok(Event::TaskAdded(Task::new(id, title)))
            }
        }
        Command::Delete { id } => find_task(tasks, id)
            .map(|task| Event::TaskDeleted(task.clone()))
            .ok_or(TodoError::TaskNotFound(id)),
        Command::Patch { id, completed } => find_task(tasks, id)
            .map(|task| Event::TaskPatched(task.clone().with_completed(completed)))
            .ok_or(TodoError::TaskNotFound(id)),
        // Bulk intents are unconditionally valid, even on an empty
        // list; the reducer does the no-op filtering.
        Command::DeleteCompleted => Ok(Event::CompletedTasksDeleted),
        Command::PatchAll { completed } => Ok(Event::AllTasksMarkedAs { completed }),
    }
}

// Linear scan; the uniqueness invariant guarantees at most one match.
fn find_task(tasks: &[Task], id: TaskId) -> Option<&Task> {
    tasks.iter().find(|task| task.id == id)
}

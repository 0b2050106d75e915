use crate::events::Event;
use crate::task::Task;

/// State reducer: computes the next task list from the current one and
/// a validated event. Never fails; the input slice is left untouched.
///
/// The reducer trusts that the event was validated against the same
/// snapshot. A `TaskDeleted`/`TaskPatched` event whose id is absent is
/// a silent no-op, not an error.
pub fn apply(event: &Event, tasks: &[Task]) -> Vec<Task> {
    match event {
        Event::TaskAdded(task) => {
            let mut next = tasks.to_vec();
            next.push(task.clone());
            next
        }
        Event::TaskDeleted(task) => tasks
            .iter()
            .filter(|existing| existing.id != task.id)
            .cloned()
            .collect(),
        Event::TaskPatched(patched) => tasks
            .iter()
            .map(|existing| {
                if existing.id == patched.id {
                    patched.clone()
                } else {
                    existing.clone()
                }
            })
            .collect(),
        Event::CompletedTasksDeleted => tasks
            .iter()
            .filter(|existing| !existing.completed)
            .cloned()
            .collect(),
        Event::AllTasksMarkedAs { completed } => tasks
            .iter()
            .cloned()
            .map(|existing| existing.with_completed(*completed))
            .collect(),
    }
}

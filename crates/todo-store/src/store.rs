use async_trait::async_trait;
use tokio::sync::Mutex;

use todo_core::{AppConfig, Dispatch, TodoError, TodoResult};
use todo_domain::{apply, handle, Command, Event, Task};

use crate::event_log::{EventLog, RecordedEvent};

/// Owns the canonical task list and serializes all access to it. A
/// command is validated and its event applied under a single lock
/// acquisition, so every event is produced against the exact snapshot
/// it is applied to.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    tasks: Vec<Task>,
    log: EventLog,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                tasks: Vec::new(),
                log: EventLog::with_capacity_limit(config.event_log_capacity),
            }),
        }
    }

    /// Rebuilds a store from an event history, replaying each event
    /// into both the task list and the log.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a Event>) -> Self {
        let mut tasks = Vec::new();
        let mut log = EventLog::new();
        for event in events {
            tasks = apply(event, &tasks);
            log.record(event.clone());
        }
        Self {
            inner: Mutex::new(StoreInner { tasks, log }),
        }
    }

    /// Validates `command` against the current list and, on success,
    /// applies and records the resulting event. A rejected command
    /// leaves both the list and the log untouched.
    pub async fn dispatch(&self, command: Command) -> TodoResult<Event> {
        let mut inner = self.inner.lock().await;
        match handle(command, &inner.tasks) {
            Ok(event) => {
                let next = apply(&event, &inner.tasks);
                inner.tasks = next;
                let sequence = inner.log.record(event.clone());
                tracing::debug!(sequence, ?event, tasks = inner.tasks.len(), "event applied");
                Ok(event)
            }
            Err(error) => {
                tracing::debug!(%error, "command rejected");
                Err(error)
            }
        }
    }

    /// Snapshot of the current task list.
    pub async fn tasks(&self) -> Vec<Task> {
        self.inner.lock().await.tasks.clone()
    }

    /// Snapshot of the retained event history.
    pub async fn recorded_events(&self) -> Vec<RecordedEvent> {
        self.inner.lock().await.log.entries().to_vec()
    }
}

#[async_trait]
impl Dispatch for InMemoryStore {
    type Command = Command;
    type Event = Event;
    type Error = TodoError;

    async fn dispatch(&self, command: Command) -> TodoResult<Event> {
        InMemoryStore::dispatch(self, command).await
    }
}

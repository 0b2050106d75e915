use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_domain::{apply, Event, Task};

/// An event as the store recorded it: its position in the log and the
/// wall-clock time it was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEvent {
    pub sequence: u64,
    pub recorded_at: DateTime<Utc>,
    pub event: Event,
}

/// Append-only event log with an optional retention capacity. Once
/// over capacity the oldest entries are dropped; sequence numbers keep
/// increasing regardless.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<RecordedEvent>,
    capacity: Option<usize>,
    next_sequence: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_limit(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn record(&mut self, event: Event) -> u64 {
        self.next_sequence += 1;
        self.entries.push(RecordedEvent {
            sequence: self.next_sequence,
            recorded_at: Utc::now(),
            event,
        });
        if let Some(capacity) = self.capacity {
            if self.entries.len() > capacity {
                let excess = self.entries.len() - capacity;
                self.entries.drain(..excess);
            }
        }
        self.next_sequence
    }

    pub fn entries(&self) -> &[RecordedEvent] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Folds events into the task list they accumulate to, starting from
/// the empty list.
pub fn replay<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<Task> {
    events
        .into_iter()
        .fold(Vec::new(), |tasks, event| apply(event, &tasks))
}

pub mod event_log;
pub mod store;

pub use event_log::{replay, EventLog, RecordedEvent};
pub use store::InMemoryStore;

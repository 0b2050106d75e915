use async_trait::async_trait;

/// Seam between callers and whatever owns the canonical state.
/// A dispatcher validates a command against its current state and, on
/// success, applies and records the resulting event atomically.
#[async_trait]
pub trait Dispatch {
    type Command;
    type Event;
    type Error;

    async fn dispatch(&self, command: Self::Command) -> Result<Self::Event, Self::Error>;
}

pub mod apply;
pub mod commands;
pub mod events;
pub mod handle;
pub mod requests;
pub mod task;

pub use apply::apply;
pub use commands::Command;
pub use events::Event;
pub use handle::handle;
pub use requests::{AddRequest, PatchRequest};
pub use task::{Task, TaskId};

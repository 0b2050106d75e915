use serde::{Deserialize, Serialize};

use crate::commands::Command;
use crate::task::TaskId;

/// Wire shape of an "add task" request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRequest {
    pub id: TaskId,
    pub title: String,
}

impl From<AddRequest> for Command {
    fn from(request: AddRequest) -> Self {
        Command::Add {
            id: request.id,
            title: request.title,
        }
    }
}

/// Wire shape of a "patch task" request body. The target id comes from
/// the surrounding transport (e.g. the URL path), so it is not part of
/// the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchRequest {
    pub completed: bool,
}

impl PatchRequest {
    /// Pair this body with its target to form the domain command.
    pub fn into_command(self, id: TaskId) -> Command {
        Command::Patch {
            id,
            completed: self.completed,
        }
    }
}

//! Workspace container entity.

use super::{UserId, WorkspaceId};
use serde::{Deserialize, Serialize};

/// Per-user workspace container.
///
/// One-to-one with its owning user. Workspaces are not involved in task
/// authorization; they exist only as a named container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    id: WorkspaceId,
    owner_id: UserId,
    name: String,
    description: String,
}

impl Workspace {
    /// Creates a workspace for `owner_id`.
    #[must_use]
    pub fn new(owner_id: UserId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: WorkspaceId::new(),
            owner_id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Reconstructs a workspace from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: WorkspaceId,
        owner_id: UserId,
        name: String,
        description: String,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            description,
        }
    }

    /// Returns the workspace identifier.
    #[must_use]
    pub const fn id(&self) -> WorkspaceId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the workspace name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the workspace description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

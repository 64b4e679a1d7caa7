//! Domain model for per-user task management.
//!
//! The task domain models the task aggregate and its lifecycle (status,
//! priority, dates, tags), the owning user and their workspace, and the
//! partial-update patch contract, while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod patch;
mod status;
mod task;
mod user;
mod workspace;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, ParseUserRoleError, TaskDomainError};
pub use ids::{TaskId, UserId, WorkspaceId};
pub use patch::TaskPatch;
pub use status::{TaskPriority, TaskStatus};
pub use task::{NewTask, PersistedTaskData, Task};
pub use user::{AssigneeProfile, User, UserRole};
pub use workspace::Workspace;

//! Port contracts for task, user and workspace persistence and sessions.

mod repository;
mod session;

pub use repository::{
    TaskRepository, TaskRepositoryError, TaskRepositoryResult, UserRepository,
    UserRepositoryError, UserRepositoryResult, WorkspaceRepository, WorkspaceRepositoryResult,
};
pub use session::{SessionStore, SessionToken};

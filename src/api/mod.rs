//! HTTP surface for the task store gateway.
//!
//! Thin `axum` handlers over [`crate::task::services::TaskGateway`]: bearer
//! sessions are resolved at the boundary, requests and responses use the
//! camelCase wire shapes, and gateway errors map onto the fixed status
//! taxonomy (401, 404, 400, 500).

mod dto;
mod error;
mod handlers;
mod routes;
mod session;

pub use dto::{
    AssigneeResponse, CreateTaskRequest, DeleteTaskResponse, TaskResponse, UpdateTaskRequest,
};
pub use error::{ApiError, ApiErrorBody};
pub use routes::{create_router, AppState};
pub use session::CurrentUser;

#[cfg(test)]
mod tests;

//! Router assembly and shared handler state.

use super::handlers::{create_task, delete_task, health, list_tasks, update_task};
use crate::task::{
    ports::{SessionStore, TaskRepository, UserRepository},
    services::TaskGateway,
};
use axum::{
    routing::{get, patch},
    Router,
};
use mockable::Clock;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
pub struct AppState<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    gateway: TaskGateway<R, U, C>,
    sessions: Arc<dyn SessionStore>,
}

impl<R, U, C> AppState<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates handler state over a gateway and a session store.
    #[must_use]
    pub fn new(gateway: TaskGateway<R, U, C>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { gateway, sessions }
    }

    /// Returns the task gateway.
    #[must_use]
    pub const fn gateway(&self) -> &TaskGateway<R, U, C> {
        &self.gateway
    }

    /// Returns the session store.
    #[must_use]
    pub fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }
}

impl<R, U, C> Clone for AppState<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            sessions: Arc::clone(&self.sessions),
        }
    }
}

/// Builds the application router with request tracing enabled.
#[must_use]
pub fn create_router<R, U, C>(state: AppState<R, U, C>) -> Router
where
    R: TaskRepository + 'static,
    U: UserRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/tasks",
            get(list_tasks::<R, U, C>).post(create_task::<R, U, C>),
        )
        .route(
            "/api/tasks/{id}",
            patch(update_task::<R, U, C>).delete(delete_task::<R, U, C>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

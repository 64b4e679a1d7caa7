//! In-process adapter connecting a dashboard directly to the gateway.

use super::client::{TaskApi, TaskApiError, TaskApiResult};
use crate::task::{
    domain::{NewTask, TaskId, TaskPatch, UserId},
    ports::{SessionStore, SessionToken, TaskRepository, UserRepository},
    services::{GatewayError, TaskGateway, TaskRecord},
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// [`TaskApi`] implementation that calls the gateway in the same process.
///
/// Holds the session token it was opened with; every operation re-resolves
/// the token so an expired session fails with
/// [`TaskApiError::Unauthorized`] rather than acting on stale identity.
pub struct InProcessTaskApi<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    gateway: TaskGateway<R, U, C>,
    sessions: Arc<dyn SessionStore>,
    token: SessionToken,
}

impl<R, U, C> InProcessTaskApi<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Opens a client over `gateway` for the session identified by `token`.
    #[must_use]
    pub fn new(
        gateway: TaskGateway<R, U, C>,
        sessions: Arc<dyn SessionStore>,
        token: SessionToken,
    ) -> Self {
        Self {
            gateway,
            sessions,
            token,
        }
    }

    async fn caller(&self) -> TaskApiResult<UserId> {
        self.sessions
            .resolve(&self.token)
            .await
            .ok_or(TaskApiError::Unauthorized)
    }
}

fn map_gateway_error(err: GatewayError) -> TaskApiError {
    match err {
        GatewayError::NotFound(id) => TaskApiError::NotFound(id),
        GatewayError::Domain(domain) => TaskApiError::Invalid(domain.to_string()),
        GatewayError::Storage(_) => TaskApiError::Failed("storage failure".to_owned()),
    }
}

#[async_trait]
impl<R, U, C> TaskApi for InProcessTaskApi<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    async fn list_tasks(&self) -> TaskApiResult<Vec<TaskRecord>> {
        let caller = self.caller().await?;
        self.gateway
            .list_tasks(caller)
            .await
            .map_err(map_gateway_error)
    }

    async fn create_task(&self, spec: NewTask) -> TaskApiResult<TaskRecord> {
        let caller = self.caller().await?;
        self.gateway
            .create_task(caller, spec)
            .await
            .map_err(map_gateway_error)
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> TaskApiResult<TaskRecord> {
        let caller = self.caller().await?;
        self.gateway
            .update_task(caller, id, patch)
            .await
            .map_err(map_gateway_error)
    }

    async fn delete_task(&self, id: TaskId) -> TaskApiResult<()> {
        let caller = self.caller().await?;
        self.gateway
            .delete_task(caller, id)
            .await
            .map_err(map_gateway_error)
    }
}

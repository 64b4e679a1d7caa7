//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use taskflow::task::{
    adapters::memory::{
        InMemorySessionStore, InMemoryTaskRepository, InMemoryUserRepository,
        InMemoryWorkspaceRepository,
    },
    domain::{User, UserId, UserRole},
    ports::{SessionStore, SessionToken, UserRepository},
    services::TaskGateway,
};

pub type TestGateway = TaskGateway<InMemoryTaskRepository, InMemoryUserRepository, DefaultClock>;

/// Fully wired in-memory backend for one test.
pub struct Backend {
    pub gateway: TestGateway,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub workspaces: InMemoryWorkspaceRepository,
    pub sessions: Arc<InMemorySessionStore>,
    pub clock: Arc<DefaultClock>,
}

impl Backend {
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let clock = Arc::new(DefaultClock);
        let gateway = TaskGateway::new(Arc::clone(&tasks), Arc::clone(&users), Arc::clone(&clock));
        Self {
            gateway,
            tasks,
            users,
            workspaces: InMemoryWorkspaceRepository::new(),
            sessions: Arc::new(InMemorySessionStore::new()),
            clock,
        }
    }

    /// Stores a user and returns its identifier.
    pub async fn register(&self, name: &str, email: &str) -> Result<UserId, eyre::Report> {
        let user = User::new(name, email, "hash", UserRole::Employee)?;
        self.users.store(&user).await?;
        Ok(user.id())
    }

    /// Opens a session for `user` under `token`.
    pub async fn open_session(&self, token: &str, user: UserId) {
        self.sessions
            .insert(SessionToken::new(token), user)
            .await;
    }
}

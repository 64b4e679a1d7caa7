//! Ephemeral server bootstrap and a thin HTTP client for endpoint tests.

use std::sync::Arc;
use std::time::Duration;

use mockable::DefaultClock;
use taskflow::api::{create_router, AppState};
use taskflow::task::{
    adapters::memory::{
        seed_demo_data, InMemorySessionStore, InMemoryTaskRepository, InMemoryUserRepository,
        InMemoryWorkspaceRepository,
    },
    ports::{SessionStore, SessionToken},
    services::TaskGateway,
};

pub const MANAGER_TOKEN: &str = "manager-test-token";
pub const EMPLOYEE_TOKEN: &str = "employee-test-token";

/// Seeds an in-memory backend, binds an ephemeral port and serves the
/// router on it. The server task lives as long as the test process.
pub async fn spawn_server() -> Result<String, eyre::Report> {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let workspaces = InMemoryWorkspaceRepository::new();
    let clock = Arc::new(DefaultClock);

    let seeded = seed_demo_data(&*tasks, &*users, &workspaces, &*clock).await?;

    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    sessions
        .insert(SessionToken::new(MANAGER_TOKEN), seeded.manager.id())
        .await;
    sessions
        .insert(SessionToken::new(EMPLOYEE_TOKEN), seeded.employee.id())
        .await;

    let gateway = TaskGateway::new(tasks, users, clock);
    let router = create_router(AppState::new(gateway, sessions));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(format!("http://{address}"))
}

/// Builds a client with a sensible timeout.
pub fn client() -> Result<reqwest::Client, eyre::Report> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?)
}

/// Bearer header value for a token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

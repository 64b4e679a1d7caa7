//! TaskFlow HTTP server.
//!
//! Without `DATABASE_URL` the server runs against in-memory storage seeded
//! with demo data and logs two ready-to-use session tokens. With it, tasks
//! and users live in `PostgreSQL`; sessions remain in-process because
//! issuance belongs to an external login service.

use axum::Router;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use taskflow::{
    api::{create_router, AppState},
    config::AppConfig,
    task::{
        adapters::{
            memory::{
                seed_demo_data, InMemorySessionStore, InMemoryTaskRepository,
                InMemoryUserRepository, InMemoryWorkspaceRepository,
            },
            postgres::{PostgresTaskRepository, PostgresUserRepository},
        },
        ports::{SessionStore, SessionToken},
        services::TaskGateway,
    },
};
use tracing_subscriber::EnvFilter;

const DEMO_MANAGER_TOKEN: &str = "demo-manager-token";
const DEMO_EMPLOYEE_TOKEN: &str = "demo-employee-token";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let router = match &config.database_url {
        Some(url) => postgres_router(url)?,
        None => in_memory_router().await?,
    };

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn in_memory_router() -> Result<Router, Box<dyn std::error::Error>> {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let workspaces = InMemoryWorkspaceRepository::new();
    let clock = Arc::new(DefaultClock);

    let seeded = seed_demo_data(&*tasks, &*users, &workspaces, &*clock).await?;

    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    sessions
        .insert(SessionToken::new(DEMO_MANAGER_TOKEN), seeded.manager.id())
        .await;
    sessions
        .insert(SessionToken::new(DEMO_EMPLOYEE_TOKEN), seeded.employee.id())
        .await;
    tracing::info!(
        manager = DEMO_MANAGER_TOKEN,
        employee = DEMO_EMPLOYEE_TOKEN,
        "in-memory mode: demo session tokens active"
    );

    let gateway = TaskGateway::new(tasks, users, clock);
    Ok(create_router(AppState::new(gateway, sessions)))
}

fn postgres_router(database_url: &str) -> Result<Router, Box<dyn std::error::Error>> {
    let manager = ConnectionManager::new(database_url);
    let pool = Pool::builder().build(manager)?;

    let tasks = Arc::new(PostgresTaskRepository::new(pool.clone()));
    let users = Arc::new(PostgresUserRepository::new(pool));
    let clock = Arc::new(DefaultClock);
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    tracing::info!("postgres mode: connected");

    let gateway = TaskGateway::new(tasks, users, clock);
    Ok(create_router(AppState::new(gateway, sessions)))
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install shutdown handler");
    }
}

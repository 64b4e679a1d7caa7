//! `PostgreSQL` adapters for task, user and workspace persistence.

mod models;
mod repository;
mod schema;

pub use repository::{
    PgPool, PostgresTaskRepository, PostgresUserRepository, PostgresWorkspaceRepository,
};

//! TaskFlow: a per-user task management service with a kanban dashboard.
//!
//! Authenticated users manage tasks (title, description, status, priority,
//! dates, tags) scoped to their own account. The server side exposes a small
//! CRUD gateway that enforces ownership before touching storage; the client
//! side holds a session-scoped task collection and derives filtered views,
//! aggregate statistics, kanban columns and CSV exports from it.
//!
//! # Architecture
//!
//! TaskFlow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, etc.)
//!
//! # Modules
//!
//! - [`task`]: Task domain model, ownership-enforcing gateway, and storage
//! - [`dashboard`]: Client-side state container and derived views
//! - [`api`]: HTTP surface exposing the gateway
//! - [`config`]: Environment-based server configuration

pub mod api;
pub mod config;
pub mod dashboard;
pub mod task;

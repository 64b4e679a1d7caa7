//! Thread-safe in-memory adapters used by tests and the demo server mode.

mod seed;
mod session;
mod task;
mod user;
mod workspace;

pub use seed::{SeedError, SeededDemo, seed_demo_data};
pub use session::InMemorySessionStore;
pub use task::InMemoryTaskRepository;
pub use user::InMemoryUserRepository;
pub use workspace::InMemoryWorkspaceRepository;

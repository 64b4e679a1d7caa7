//! Demo data seeding for the in-memory server mode.

use chrono::NaiveDate;
use mockable::Clock;
use thiserror::Error;

use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskPriority, TaskStatus, User, UserRole, Workspace},
    ports::{TaskRepository, TaskRepositoryError, UserRepository, UserRepositoryError,
        WorkspaceRepository},
};

/// Placeholder hash for seeded demo accounts. Password hashing is an
/// external collaborator; the stored value is never interpreted.
const DEMO_PASSWORD_HASH: &str = "$2a$10$demo.seeded.password.hash";

/// Errors returned while seeding demo data.
#[derive(Debug, Clone, Error)]
pub enum SeedError {
    /// Domain validation failed for a seeded record.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task persistence failed.
    #[error(transparent)]
    Task(#[from] TaskRepositoryError),
    /// User persistence failed.
    #[error(transparent)]
    User(#[from] UserRepositoryError),
    /// A seed literal produced an invalid calendar date.
    #[error("invalid seed date {0}-{1}-{2}")]
    InvalidDate(i32, u32, u32),
}

/// Accounts created by [`seed_demo_data`].
#[derive(Debug, Clone)]
pub struct SeededDemo {
    /// Manager demo account.
    pub manager: User,
    /// Employee demo account.
    pub employee: User,
}

fn seed_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, SeedError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(SeedError::InvalidDate(year, month, day))
}

/// Seeds two demo accounts, their workspaces, and three sample tasks.
///
/// # Errors
///
/// Returns [`SeedError`] when a seeded record fails validation or
/// persistence.
pub async fn seed_demo_data(
    tasks: &impl TaskRepository,
    users: &impl UserRepository,
    workspaces: &impl WorkspaceRepository,
    clock: &impl Clock,
) -> Result<SeededDemo, SeedError> {
    let manager = User::new(
        "System Manager",
        "admin@taskflow.com",
        DEMO_PASSWORD_HASH,
        UserRole::Manager,
    )?;
    users.store(&manager).await?;

    let employee = User::new(
        "Sample Employee",
        "employee@taskflow.com",
        DEMO_PASSWORD_HASH,
        UserRole::Employee,
    )?;
    users.store(&employee).await?;

    let manager_workspace = Workspace::new(manager.id(), "Head Office", "Primary work environment");
    workspaces.store(&manager_workspace).await?;
    let employee_workspace =
        Workspace::new(employee.id(), "Personal Workspace", "Personal work environment");
    workspaces.store(&employee_workspace).await?;

    let auth_task = Task::create(
        NewTask::new("Build authentication system")
            .with_description("Implement login and user management")
            .with_status(TaskStatus::InProgress)
            .with_priority(TaskPriority::High)
            .with_dates(Some(seed_date(2025, 6, 1)?), Some(seed_date(2025, 6, 20)?))
            .with_tags(vec!["development".to_owned(), "security".to_owned()])
            .in_workspace(manager_workspace.id()),
        manager.id(),
        clock,
    )?;
    tasks.store(&auth_task).await?;

    let ui_task = Task::create(
        NewTask::new("Design new UI")
            .with_description("Refresh the visual interface")
            .with_status(TaskStatus::Open)
            .with_priority(TaskPriority::Medium)
            .with_dates(Some(seed_date(2025, 6, 15)?), Some(seed_date(2025, 6, 25)?))
            .with_tags(vec!["design".to_owned(), "ui".to_owned()])
            .in_workspace(employee_workspace.id()),
        employee.id(),
        clock,
    )?;
    tasks.store(&ui_task).await?;

    let qa_task = Task::create(
        NewTask::new("Quality assurance pass")
            .with_description("Run the full regression suite")
            .with_status(TaskStatus::Completed)
            .with_priority(TaskPriority::High)
            .with_dates(Some(seed_date(2025, 5, 20)?), Some(seed_date(2025, 6, 10)?))
            .with_tags(vec!["qa".to_owned(), "testing".to_owned()])
            .in_workspace(employee_workspace.id()),
        employee.id(),
        clock,
    )?;
    tasks.store(&qa_task).await?;

    Ok(SeededDemo { manager, employee })
}

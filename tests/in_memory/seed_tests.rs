//! Demo data seeding tests.

use rstest::{fixture, rstest};
use taskflow::task::{
    adapters::memory::seed_demo_data,
    domain::TaskStatus,
    ports::UserRepository,
};

use super::helpers::Backend;

#[fixture]
fn backend() -> Backend {
    Backend::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seed_creates_both_demo_accounts(backend: Backend) -> Result<(), eyre::Report> {
    let seeded = seed_demo_data(
        &*backend.tasks,
        &*backend.users,
        &backend.workspaces,
        &*backend.clock,
    )
    .await?;

    eyre::ensure!(
        seeded.manager.email() == "admin@taskflow.com",
        "manager account seeded"
    );
    eyre::ensure!(
        seeded.employee.email() == "employee@taskflow.com",
        "employee account seeded"
    );

    let looked_up = backend
        .users
        .find_by_email("employee@taskflow.com")
        .await?
        .ok_or_else(|| eyre::eyre!("seeded employee retrievable by email"))?;
    eyre::ensure!(looked_up.id() == seeded.employee.id(), "ids match");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_tasks_split_across_the_accounts(backend: Backend) -> Result<(), eyre::Report> {
    let seeded = seed_demo_data(
        &*backend.tasks,
        &*backend.users,
        &backend.workspaces,
        &*backend.clock,
    )
    .await?;

    let manager_tasks = backend.gateway.list_tasks(seeded.manager.id()).await?;
    eyre::ensure!(manager_tasks.len() == 1, "manager owns one task");
    eyre::ensure!(
        manager_tasks[0].task.status() == TaskStatus::InProgress,
        "manager task in progress"
    );

    let employee_tasks = backend.gateway.list_tasks(seeded.employee.id()).await?;
    eyre::ensure!(employee_tasks.len() == 2, "employee owns two tasks");
    eyre::ensure!(
        employee_tasks
            .iter()
            .all(|record| record.assignee.email == "employee@taskflow.com"),
        "records carry the denormalized assignee"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeding_twice_fails_on_the_email_index(backend: Backend) -> Result<(), eyre::Report> {
    seed_demo_data(
        &*backend.tasks,
        &*backend.users,
        &backend.workspaces,
        &*backend.clock,
    )
    .await?;

    let second = seed_demo_data(
        &*backend.tasks,
        &*backend.users,
        &backend.workspaces,
        &*backend.clock,
    )
    .await;
    eyre::ensure!(second.is_err(), "duplicate emails are rejected");
    Ok(())
}

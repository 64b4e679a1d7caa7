//! Ownership and patch-semantics flows through the gateway.

use chrono::NaiveDate;
use rstest::{fixture, rstest};
use taskflow::task::{
    domain::{NewTask, TaskPatch, TaskStatus},
    services::GatewayError,
};

use super::helpers::Backend;

#[fixture]
fn backend() -> Backend {
    Backend::new()
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| eyre::eyre!("invalid date {year}-{month}-{day}"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_task_is_visible_exactly_to_its_owner(backend: Backend) -> Result<(), eyre::Report> {
    let owner = backend.register("Owner", "owner@taskflow.example").await?;
    let outsider = backend
        .register("Outsider", "outsider@taskflow.example")
        .await?;

    let created = backend
        .gateway
        .create_task(owner, NewTask::new("Owner-only task"))
        .await?;

    let owner_view = backend.gateway.list_tasks(owner).await?;
    eyre::ensure!(owner_view.len() == 1, "owner sees the task");
    eyre::ensure!(
        owner_view[0].task.id() == created.task.id(),
        "listed id matches"
    );

    let outsider_view = backend.gateway.list_tasks(outsider).await?;
    eyre::ensure!(outsider_view.is_empty(), "outsider sees nothing");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foreign_mutations_fail_as_not_found_and_change_nothing(
    backend: Backend,
) -> Result<(), eyre::Report> {
    let owner = backend.register("Owner", "owner@taskflow.example").await?;
    let outsider = backend
        .register("Outsider", "outsider@taskflow.example")
        .await?;
    let created = backend
        .gateway
        .create_task(owner, NewTask::new("Contested"))
        .await?;

    let update = backend
        .gateway
        .update_task(
            outsider,
            created.task.id(),
            &TaskPatch::new().with_title("Taken over"),
        )
        .await;
    eyre::ensure!(
        matches!(update, Err(GatewayError::NotFound(_))),
        "update is a 404-shaped failure"
    );

    let delete = backend.gateway.delete_task(outsider, created.task.id()).await;
    eyre::ensure!(
        matches!(delete, Err(GatewayError::NotFound(_))),
        "delete is a 404-shaped failure"
    );

    let owner_view = backend.gateway.list_tasks(owner).await?;
    eyre::ensure!(owner_view.len() == 1, "task still stored");
    eyre::ensure!(
        owner_view[0].task.title() == "Contested",
        "title untouched"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_and_omitting_a_date_are_different_patches(
    backend: Backend,
) -> Result<(), eyre::Report> {
    let owner = backend.register("Owner", "owner@taskflow.example").await?;
    let created = backend
        .gateway
        .create_task(
            owner,
            NewTask::new("Scheduled").with_dates(Some(date(2026, 1, 10)?), Some(date(2026, 1, 20)?)),
        )
        .await?;

    // Omitting both dates keeps them.
    let renamed = backend
        .gateway
        .update_task(
            owner,
            created.task.id(),
            &TaskPatch::new().with_title("Scheduled v2"),
        )
        .await?;
    eyre::ensure!(
        renamed.task.start_date() == Some(date(2026, 1, 10)?),
        "omitted start date kept"
    );

    // Explicitly clearing one date touches only that date.
    let cleared = backend
        .gateway
        .update_task(
            owner,
            created.task.id(),
            &TaskPatch::new().with_start_date(None),
        )
        .await?;
    eyre::ensure!(cleared.task.start_date().is_none(), "start date cleared");
    eyre::ensure!(
        cleared.task.end_date() == Some(date(2026, 1, 20)?),
        "end date kept"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_refreshes_updated_at_but_not_created_at(
    backend: Backend,
) -> Result<(), eyre::Report> {
    let owner = backend.register("Owner", "owner@taskflow.example").await?;
    let created = backend
        .gateway
        .create_task(owner, NewTask::new("Timestamped"))
        .await?;

    let updated = backend
        .gateway
        .update_task(
            owner,
            created.task.id(),
            &TaskPatch::move_to_status(TaskStatus::InProgress),
        )
        .await?;

    eyre::ensure!(
        updated.task.created_at() == created.task.created_at(),
        "created_at immutable"
    );
    eyre::ensure!(
        updated.task.updated_at() >= created.task.updated_at(),
        "updated_at refreshed"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_tasks_disappear_permanently(backend: Backend) -> Result<(), eyre::Report> {
    let owner = backend.register("Owner", "owner@taskflow.example").await?;
    let created = backend
        .gateway
        .create_task(owner, NewTask::new("Transient"))
        .await?;

    backend.gateway.delete_task(owner, created.task.id()).await?;

    let view = backend.gateway.list_tasks(owner).await?;
    eyre::ensure!(view.is_empty(), "collection empty after delete");

    let again = backend.gateway.delete_task(owner, created.task.id()).await;
    eyre::ensure!(
        matches!(again, Err(GatewayError::NotFound(_))),
        "second delete is not found"
    );
    Ok(())
}

//! Dashboard flows over the in-process client.

use std::sync::Arc;

use rstest::{fixture, rstest};
use taskflow::dashboard::{
    DashboardController, InProcessTaskApi, LoadPhase, TaskApiError, TaskCommand,
};
use taskflow::task::{
    domain::{NewTask, TaskStatus},
    ports::{SessionStore, SessionToken},
};

use super::helpers::Backend;

type Controller = DashboardController<
    InProcessTaskApi<
        taskflow::task::adapters::memory::InMemoryTaskRepository,
        taskflow::task::adapters::memory::InMemoryUserRepository,
        mockable::DefaultClock,
    >,
>;

#[fixture]
fn backend() -> Backend {
    Backend::new()
}

async fn controller_for(backend: &Backend, token: &str) -> Controller {
    let api = InProcessTaskApi::new(
        backend.gateway.clone(),
        backend.sessions.clone(),
        SessionToken::new(token),
    );
    DashboardController::new(api)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_session_cannot_even_load(backend: Backend) -> Result<(), eyre::Report> {
    let mut controller = controller_for(&backend, "never-issued").await;

    let result = controller.load().await;

    eyre::ensure!(
        result == Err(TaskApiError::Unauthorized),
        "load is rejected before any data access"
    );
    eyre::ensure!(
        controller.state().phase() == LoadPhase::Failed,
        "state records the failure"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_drag_and_export_round_trip(backend: Backend) -> Result<(), eyre::Report> {
    let user = backend.register("Asha Dev", "asha@taskflow.example").await?;
    backend.open_session("asha-session", user).await;
    let mut controller = controller_for(&backend, "asha-session").await;
    controller.load().await?;

    controller
        .dispatch(TaskCommand::Create(
            NewTask::new("Board card").with_tags(vec!["demo".to_owned()]),
        ))
        .await?;
    let id = controller.state().tasks()[0].task.id();

    controller
        .dispatch(TaskCommand::MoveToStatus(id, TaskStatus::Completed))
        .await?;

    let stats = controller.stats();
    eyre::ensure!(stats.total == 1, "one task on the board");
    eyre::ensure!(stats.completion_rate == 100, "dragged card counts as done");

    // Confirmed state also round-trips through the gateway.
    let server_view = backend.gateway.list_tasks(user).await?;
    eyre::ensure!(
        server_view[0].task.status() == TaskStatus::Completed,
        "status persisted"
    );

    let csv = controller.export();
    eyre::ensure!(
        csv.lines().count() == 2,
        "header plus one row for one task"
    );
    eyre::ensure!(csv.contains("Board card"), "row carries the title");
    eyre::ensure!(csv.contains("Asha Dev"), "row carries the assignee name");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_sessions_see_disjoint_collections(backend: Backend) -> Result<(), eyre::Report> {
    let asha = backend.register("Asha Dev", "asha@taskflow.example").await?;
    let badri = backend.register("Badri Ops", "badri@taskflow.example").await?;
    backend.open_session("asha-session", asha).await;
    backend.open_session("badri-session", badri).await;

    let mut asha_board = controller_for(&backend, "asha-session").await;
    asha_board.load().await?;
    asha_board
        .dispatch(TaskCommand::Create(NewTask::new("Asha's task")))
        .await?;

    let mut badri_board = controller_for(&backend, "badri-session").await;
    badri_board.load().await?;

    eyre::ensure!(
        badri_board.state().tasks().is_empty(),
        "other session sees nothing"
    );
    eyre::ensure!(
        asha_board.state().tasks().len() == 1,
        "own session sees the task"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn revoked_session_fails_subsequent_commands(backend: Backend) -> Result<(), eyre::Report> {
    let user = backend.register("Asha Dev", "asha@taskflow.example").await?;
    backend.open_session("asha-session", user).await;
    let mut controller = controller_for(&backend, "asha-session").await;
    controller.load().await?;

    backend
        .sessions
        .remove(&SessionToken::new("asha-session"))
        .await;

    let result = controller
        .dispatch(TaskCommand::Create(NewTask::new("Too late")))
        .await;
    eyre::ensure!(
        result == Err(TaskApiError::Unauthorized),
        "commands re-resolve the session"
    );
    eyre::ensure!(
        controller.state().tasks().is_empty(),
        "nothing was added locally"
    );
    Ok(())
}

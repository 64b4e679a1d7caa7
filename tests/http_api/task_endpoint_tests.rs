//! End-to-end coverage of the task endpoints.

use reqwest::{header::AUTHORIZATION, StatusCode};
use rstest::rstest;
use serde_json::{json, Value};

use super::helpers::{bearer, client, spawn_server, EMPLOYEE_TOKEN, MANAGER_TOKEN};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn health_endpoint_is_open() -> Result<(), eyre::Report> {
    let base = spawn_server().await?;
    let response = client()?.get(format!("{base}/health")).send().await?;

    eyre::ensure!(response.status() == StatusCode::OK, "health is 200");
    eyre::ensure!(response.text().await? == "OK", "health body");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_token_is_unauthorized() -> Result<(), eyre::Report> {
    let base = spawn_server().await?;
    let response = client()?.get(format!("{base}/api/tasks")).send().await?;

    eyre::ensure!(response.status() == StatusCode::UNAUTHORIZED, "401 status");
    let body: Value = response.json().await?;
    eyre::ensure!(body == json!({"error": "Unauthorized"}), "401 body shape");
    Ok(())
}

#[rstest]
#[case("Basic abc123")]
#[case("Bearer never-issued")]
#[case("bearer lowercase-scheme")]
#[tokio::test(flavor = "multi_thread")]
async fn bad_credentials_are_unauthorized(#[case] header: &str) -> Result<(), eyre::Report> {
    let base = spawn_server().await?;
    let response = client()?
        .get(format!("{base}/api/tasks"))
        .header(AUTHORIZATION, header)
        .send()
        .await?;

    eyre::ensure!(response.status() == StatusCode::UNAUTHORIZED, "401 status");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_the_seeded_collection() -> Result<(), eyre::Report> {
    let base = spawn_server().await?;
    let response = client()?
        .get(format!("{base}/api/tasks"))
        .header(AUTHORIZATION, bearer(EMPLOYEE_TOKEN))
        .send()
        .await?;

    eyre::ensure!(response.status() == StatusCode::OK, "200 status");
    let body: Vec<Value> = response.json().await?;
    eyre::ensure!(body.len() == 2, "employee owns two seeded tasks");
    for task in &body {
        eyre::ensure!(
            task["assignee"]["email"] == "employee@taskflow.com",
            "assignee denormalized"
        );
        eyre::ensure!(task.get("startDate").is_some(), "camelCase keys");
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_201_with_the_stored_task() -> Result<(), eyre::Report> {
    let base = spawn_server().await?;
    let http = client()?;

    let response = http
        .post(format!("{base}/api/tasks"))
        .header(AUTHORIZATION, bearer(MANAGER_TOKEN))
        .json(&json!({
            "title": "Review budget",
            "priority": "HIGH",
            "startDate": "2026-10-01",
            "tags": ["finance"]
        }))
        .send()
        .await?;

    eyre::ensure!(response.status() == StatusCode::CREATED, "201 status");
    let body: Value = response.json().await?;
    eyre::ensure!(body["title"] == "Review budget", "title echoed");
    eyre::ensure!(body["status"] == "OPEN", "status defaults to OPEN");
    eyre::ensure!(body["priority"] == "HIGH", "priority honoured");
    eyre::ensure!(body["startDate"] == "2026-10-01", "date echoed");
    eyre::ensure!(body["assignee"]["name"] == "System Manager", "creator is assignee");

    let listed: Vec<Value> = http
        .get(format!("{base}/api/tasks"))
        .header(AUTHORIZATION, bearer(MANAGER_TOKEN))
        .send()
        .await?
        .json()
        .await?;
    eyre::ensure!(
        listed.first().map(|task| task["id"].clone()) == Some(body["id"].clone()),
        "new task listed first"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_title_is_a_validation_error() -> Result<(), eyre::Report> {
    let base = spawn_server().await?;
    let response = client()?
        .post(format!("{base}/api/tasks"))
        .header(AUTHORIZATION, bearer(MANAGER_TOKEN))
        .json(&json!({"title": "   "}))
        .send()
        .await?;

    eyre::ensure!(response.status() == StatusCode::BAD_REQUEST, "400 status");
    let body: Value = response.json().await?;
    eyre::ensure!(body.get("error").is_some(), "error body shape");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn patch_clears_only_the_null_date() -> Result<(), eyre::Report> {
    let base = spawn_server().await?;
    let http = client()?;

    let listed: Vec<Value> = http
        .get(format!("{base}/api/tasks"))
        .header(AUTHORIZATION, bearer(EMPLOYEE_TOKEN))
        .send()
        .await?
        .json()
        .await?;
    let target = listed
        .first()
        .ok_or_else(|| eyre::eyre!("seeded task available"))?;
    let id = target["id"]
        .as_str()
        .ok_or_else(|| eyre::eyre!("task id is a string"))?;
    eyre::ensure!(target["endDate"].is_string(), "seeded end date present");

    let response = http
        .patch(format!("{base}/api/tasks/{id}"))
        .header(AUTHORIZATION, bearer(EMPLOYEE_TOKEN))
        .json(&json!({"startDate": null, "status": "IN_PROGRESS"}))
        .send()
        .await?;

    eyre::ensure!(response.status() == StatusCode::OK, "200 status");
    let body: Value = response.json().await?;
    eyre::ensure!(body["startDate"].is_null(), "null cleared the start date");
    eyre::ensure!(
        body["endDate"] == target["endDate"],
        "omitted end date untouched"
    );
    eyre::ensure!(body["status"] == "IN_PROGRESS", "status updated");
    eyre::ensure!(body["title"] == target["title"], "omitted title untouched");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foreign_task_ids_read_as_missing() -> Result<(), eyre::Report> {
    let base = spawn_server().await?;
    let http = client()?;

    // A manager-owned task id, attacked with the employee session.
    let manager_tasks: Vec<Value> = http
        .get(format!("{base}/api/tasks"))
        .header(AUTHORIZATION, bearer(MANAGER_TOKEN))
        .send()
        .await?
        .json()
        .await?;
    let id = manager_tasks[0]["id"]
        .as_str()
        .ok_or_else(|| eyre::eyre!("task id is a string"))?
        .to_owned();

    let patch = http
        .patch(format!("{base}/api/tasks/{id}"))
        .header(AUTHORIZATION, bearer(EMPLOYEE_TOKEN))
        .json(&json!({"title": "Hijacked"}))
        .send()
        .await?;
    eyre::ensure!(patch.status() == StatusCode::NOT_FOUND, "patch is 404");
    let body: Value = patch.json().await?;
    eyre::ensure!(body == json!({"error": "Task not found"}), "404 body shape");

    let delete = http
        .delete(format!("{base}/api/tasks/{id}"))
        .header(AUTHORIZATION, bearer(EMPLOYEE_TOKEN))
        .send()
        .await?;
    eyre::ensure!(delete.status() == StatusCode::NOT_FOUND, "delete is 404");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_acknowledges_and_shrinks_the_collection() -> Result<(), eyre::Report> {
    let base = spawn_server().await?;
    let http = client()?;

    let before: Vec<Value> = http
        .get(format!("{base}/api/tasks"))
        .header(AUTHORIZATION, bearer(EMPLOYEE_TOKEN))
        .send()
        .await?
        .json()
        .await?;
    let id = before[0]["id"]
        .as_str()
        .ok_or_else(|| eyre::eyre!("task id is a string"))?
        .to_owned();

    let response = http
        .delete(format!("{base}/api/tasks/{id}"))
        .header(AUTHORIZATION, bearer(EMPLOYEE_TOKEN))
        .send()
        .await?;
    eyre::ensure!(response.status() == StatusCode::OK, "200 status");
    let body: Value = response.json().await?;
    eyre::ensure!(body == json!({"success": true}), "bare acknowledgement");

    let after: Vec<Value> = http
        .get(format!("{base}/api/tasks"))
        .header(AUTHORIZATION, bearer(EMPLOYEE_TOKEN))
        .send()
        .await?
        .json()
        .await?;
    eyre::ensure!(after.len() == before.len() - 1, "collection shrank");

    let again = http
        .delete(format!("{base}/api/tasks/{id}"))
        .header(AUTHORIZATION, bearer(EMPLOYEE_TOKEN))
        .send()
        .await?;
    eyre::ensure!(again.status() == StatusCode::NOT_FOUND, "second delete 404");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_status_value_is_rejected() -> Result<(), eyre::Report> {
    let base = spawn_server().await?;
    let http = client()?;

    let listed: Vec<Value> = http
        .get(format!("{base}/api/tasks"))
        .header(AUTHORIZATION, bearer(EMPLOYEE_TOKEN))
        .send()
        .await?
        .json()
        .await?;
    let id = listed[0]["id"]
        .as_str()
        .ok_or_else(|| eyre::eyre!("task id is a string"))?
        .to_owned();

    let response = http
        .patch(format!("{base}/api/tasks/{id}"))
        .header(AUTHORIZATION, bearer(EMPLOYEE_TOKEN))
        .json(&json!({"status": "DONE"}))
        .send()
        .await?;

    // Unknown enum values fail body deserialization before the gateway.
    eyre::ensure!(
        response.status() == StatusCode::UNPROCESSABLE_ENTITY
            || response.status() == StatusCode::BAD_REQUEST,
        "malformed status rejected"
    );
    Ok(())
}

//! Task Commands
//!
//! One function per API operation. Errors are flattened to their message.

use serde::Serialize;

use super::{api_url, decode};
use crate::models::Task;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateTaskArgs<'a> {
    title: &'a str,
}

/// PATCH body; only the fields being changed are sent
#[derive(Debug, Default, Serialize)]
struct UpdateTaskArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

// ========================
// Commands
// ========================

pub async fn list_tasks() -> Result<Vec<Task>, String> {
    let response = reqwest::Client::new()
        .get(api_url("/todos"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn create_task(title: &str) -> Result<Task, String> {
    let response = reqwest::Client::new()
        .post(api_url("/todos"))
        .json(&CreateTaskArgs { title })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

async fn update_task(id: i64, args: &UpdateTaskArgs<'_>) -> Result<Task, String> {
    let response = reqwest::Client::new()
        .patch(api_url(&format!("/todos/{}", id)))
        .json(args)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

/// Change only the completion flag
pub async fn set_completed(id: i64, completed: bool) -> Result<Task, String> {
    update_task(id, &UpdateTaskArgs { completed: Some(completed), ..Default::default() }).await
}

/// Change only the title
pub async fn rename_task(id: i64, title: &str) -> Result<Task, String> {
    update_task(id, &UpdateTaskArgs { title: Some(title), ..Default::default() }).await
}

pub async fn delete_task(id: i64) -> Result<(), String> {
    let response = reqwest::Client::new()
        .delete(api_url(&format!("/todos/{}", id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode::<serde_json::Value>(response).await.map(|_| ())
}

//! Task API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::state::{SharedStore, StoredTask};

// ============================================================================
// Request DTOs
// ============================================================================

/// Create task request
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /tasks
pub async fn list_tasks(State(store): State<SharedStore>) -> Json<Vec<StoredTask>> {
    Json(store.list())
}

/// POST /tasks
pub async fn create_task(
    State(store): State<SharedStore>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<StoredTask>), StatusCode> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let task = store.create(title, req.completed);
    tracing::info!(id = task.id, title = %task.title, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /tasks/{id}
///
/// No body: the stored `completed` flag is flipped.
pub async fn toggle_task(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<StoredTask>, StatusCode> {
    let task = store.toggle(id).ok_or(StatusCode::NOT_FOUND)?;
    tracing::info!(id, completed = task.completed, "task toggled");
    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    if !store.delete(id) {
        return Err(StatusCode::NOT_FOUND);
    }
    tracing::info!(id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

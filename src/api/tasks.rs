//! Task CRUD endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use crate::store::Task;

use super::routes::AppState;

/// Create the task API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:id", get(get_task).delete(delete_task))
}

/// GET /tasks - List all tasks.
async fn list_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Task>>, (StatusCode, String)> {
    let tasks = state
        .tasks
        .list_tasks()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e))?;

    Ok(Json(tasks))
}

/// POST /tasks - Create a task, silently overwriting any existing record
/// with the same id.
///
/// The body is decoded by hand so a malformed payload answers 400 with
/// the decoder's error text.
async fn create_task(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let task: Task =
        serde_json::from_str(&body).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    if task.id.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "ID is required".to_string()));
    }

    state
        .tasks
        .put_task(task)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e))?;

    // Empty-body success responses still carry application/json.
    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
    ))
}

/// GET /tasks/{id} - Get a task by id.
///
/// An unknown id answers 400, not 404, for compatibility with existing
/// clients of this API.
async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, (StatusCode, String)> {
    state
        .tasks
        .get_task(&id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e))?
        .map(Json)
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Task not found".to_string()))
}

/// DELETE /tasks/{id} - Delete a task by id.
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let removed = state
        .tasks
        .delete_task(&id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e))?;

    if !removed {
        return Err((StatusCode::BAD_REQUEST, "Task not found".to_string()));
    }

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "application/json")]))
}

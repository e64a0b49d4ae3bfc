//! Handlers for the `/todos` resource -- the four remote procedures.
//!
//! Each handler is stateless: validated input in, one repository call,
//! typed result out. Races between concurrent updates or deletes on the
//! same id resolve last-write-wins at the database.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use todolist_core::error::CoreError;
use todolist_core::types::DbId;
use todolist_db::models::todo::{CreateTodo, DeleteResult, Todo, UpdateTodo};
use todolist_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/todos
///
/// List all todos in insertion order. Empty store yields an empty array.
pub async fn list_todos(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = TodoRepo::list(&state.pool).await?;
    Ok(Json(todos))
}

/// POST /api/v1/todos
///
/// Create a todo with `completed = false` and a server-assigned id and
/// timestamp. The description is trimmed and must be non-empty; validation
/// happens before any persistence call.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let description = non_empty(&input.description)?;

    let input = CreateTodo {
        description: description.to_string(),
    };
    let todo = TodoRepo::create(&state.pool, &input).await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PATCH /api/v1/todos/{id}
///
/// Partial update: only fields present in the body change. Returns the
/// full updated record, or 404 if the id is unknown -- the single named
/// error condition in the system.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<Json<Todo>> {
    // A supplied description must still satisfy the non-empty invariant.
    let description = input
        .description
        .as_deref()
        .map(non_empty)
        .transpose()?
        .map(str::to_string);

    let input = UpdateTodo {
        completed: input.completed,
        description,
    };
    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    Ok(Json(todo))
}

/// DELETE /api/v1/todos/{id}
///
/// Remove the matching record if present. `success` reports whether a row
/// was removed; deleting a nonexistent id is not a failure condition.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResult>> {
    let success = TodoRepo::delete(&state.pool, id).await?;
    Ok(Json(DeleteResult { success }))
}

/// Trim a description and reject empty or whitespace-only input.
fn non_empty(description: &str) -> Result<&str, AppError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "description must not be empty".to_string(),
        )));
    }
    Ok(trimmed)
}

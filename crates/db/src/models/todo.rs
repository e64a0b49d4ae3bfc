//! Todo model and input DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todolist_core::types::{DbId, Timestamp};

/// A row from the `todos` table. This is also the wire shape returned by
/// every procedure that yields a todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: DbId,
    pub description: String,
    pub completed: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new todo. `completed` always starts false and
/// `id` / `created_at` are assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub description: String,
}

/// DTO for a partial update. Only fields that are present change;
/// in practice the client only ever sends `completed`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Wire shape of a delete outcome. `success: false` means no row matched
/// the id, which is a normal result rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub success: bool,
}

//! Route definitions for the todos resource.
//!
//! ```text
//! GET    /        -> list_todos
//! POST   /        -> create_todo
//! PATCH  /{id}    -> update_todo
//! DELETE /{id}    -> delete_todo
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todo::list_todos).post(todo::create_todo))
        .route("/{id}", patch(todo::update_todo).delete(todo::delete_todo))
}

//! Typed async client for the four remote procedures.
//!
//! One method per procedure; response bodies are decoded into the shared
//! wire DTOs, and the server's `{ error, code }` envelope is mapped into
//! [`ClientError`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use todolist_core::types::DbId;
use todolist_db::models::todo::{CreateTodo, DeleteResult, Todo, UpdateTodo};

use crate::error::ClientError;

/// The server's JSON error envelope.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Async client for the todolist RPC surface.
#[derive(Debug, Clone)]
pub struct TodoClient {
    http: reqwest::Client,
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// getTodos: fetch the full list in insertion order.
    pub async fn get_todos(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self.http.get(self.url("/api/v1/todos")).send().await?;
        decode(response).await
    }

    /// createTodo: insert a new record, returning it fully populated.
    pub async fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ClientError> {
        let response = self
            .http
            .post(self.url("/api/v1/todos"))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    /// updateTodo: apply a partial update, returning the full updated
    /// record. An unknown id surfaces as [`ClientError::NotFound`].
    pub async fn update_todo(&self, id: DbId, input: &UpdateTodo) -> Result<Todo, ClientError> {
        let response = self
            .http
            .patch(self.url(&format!("/api/v1/todos/{id}")))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    /// deleteTodo: remove a record if present. `success: false` means
    /// nothing matched the id; that is a result, not an error.
    pub async fn delete_todo(&self, id: DbId) -> Result<DeleteResult, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/v1/todos/{id}")))
            .send()
            .await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Decode a successful body, or map the error envelope to a [`ClientError`].
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {status}"),
    };

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound(message));
    }
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

//! Local list mirror with server-confirmed reconciliation.
//!
//! The session holds a `Vec<Todo>` mirroring the server list. Mutations go
//! through the client first and the mirror is only updated from the
//! server's response: load replaces the whole list, create appends the
//! returned record, toggle replaces the matching record, delete removes a
//! record only when the server reports `success: true`. Failed calls are
//! logged and leave the mirror exactly as it was.

use todolist_core::types::DbId;
use todolist_db::models::todo::{CreateTodo, Todo, UpdateTodo};

use crate::client::TodoClient;

/// Aggregate counts over the mirror, rendered after each change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

/// A client session: the RPC client plus the local list mirror.
pub struct TodoSession {
    client: TodoClient,
    todos: Vec<Todo>,
}

impl TodoSession {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            todos: Vec::new(),
        }
    }

    /// The current mirror, in server list order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn counts(&self) -> Counts {
        let total = self.todos.len();
        let completed = self.todos.iter().filter(|t| t.completed).count();
        Counts {
            total,
            completed,
            remaining: total - completed,
        }
    }

    /// Replace the mirror with the server list. On failure the mirror is
    /// left as it was (empty on first load) and the error is logged.
    pub async fn load(&mut self) {
        match self.client.get_todos().await {
            Ok(todos) => self.todos = todos,
            Err(e) => tracing::error!(error = %e, "Failed to load todos"),
        }
    }

    /// Create a todo from raw input text. The text is trimmed and empty
    /// input is rejected locally before any call is made. Returns `true`
    /// when the server confirmed the create.
    pub async fn create(&mut self, input: &str) -> bool {
        let Some(description) = trimmed_description(input) else {
            return false;
        };

        match self.client.create_todo(&CreateTodo { description }).await {
            Ok(todo) => {
                self.todos.push(todo);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create todo");
                false
            }
        }
    }

    /// Toggle a record's completion by inverting its mirrored flag, then
    /// replace the mirrored record with the server's returned one.
    pub async fn toggle(&mut self, id: DbId) -> bool {
        let Some(current) = self.todos.iter().find(|t| t.id == id) else {
            tracing::warn!(id, "No such todo in local list");
            return false;
        };

        let input = UpdateTodo {
            completed: Some(!current.completed),
            description: None,
        };
        match self.client.update_todo(id, &input).await {
            Ok(updated) => {
                replace_matching(&mut self.todos, updated);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to update todo");
                false
            }
        }
    }

    /// Delete a record. The mirror drops it only when the server reports
    /// `success: true`; a `false` result leaves the mirror unchanged.
    pub async fn delete(&mut self, id: DbId) -> bool {
        match self.client.delete_todo(id).await {
            Ok(result) => {
                if !result.success {
                    tracing::warn!(id, "Delete reported no matching record");
                }
                remove_matching(&mut self.todos, id, result.success);
                result.success
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to delete todo");
                false
            }
        }
    }
}

/// Trim input text; `None` for empty or whitespace-only input.
fn trimmed_description(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

/// Swap the record with the same id for the server's returned record.
fn replace_matching(todos: &mut [Todo], updated: Todo) {
    if let Some(slot) = todos.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
}

/// Drop the record with the given id, but only when the server confirmed
/// the delete. `success: false` means nothing was removed server-side, so
/// the mirror must stay as it is.
fn remove_matching(todos: &mut Vec<Todo>, id: DbId, success: bool) {
    if success {
        todos.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: DbId, description: &str, completed: bool) -> Todo {
        Todo {
            id,
            description: description.to_string(),
            completed,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn trimmed_description_rejects_empty_and_whitespace() {
        assert_eq!(trimmed_description(""), None);
        assert_eq!(trimmed_description("   "), None);
        assert_eq!(trimmed_description("\t\n"), None);
        assert_eq!(trimmed_description("  Buy milk  "), Some("Buy milk".to_string()));
    }

    #[test]
    fn replace_matching_swaps_only_the_matching_record() {
        let mut todos = vec![todo(1, "one", false), todo(2, "two", false)];
        let updated = todo(2, "two", true);

        replace_matching(&mut todos, updated.clone());

        assert!(!todos[0].completed);
        assert_eq!(todos[1], updated);
    }

    #[test]
    fn replace_matching_with_unknown_id_is_a_no_op() {
        let mut todos = vec![todo(1, "one", false)];
        let before = todos.clone();

        replace_matching(&mut todos, todo(99, "ghost", true));

        assert_eq!(todos, before);
    }

    #[test]
    fn remove_matching_drops_only_the_confirmed_record() {
        let keep = todo(2, "two", true);
        let mut todos = vec![todo(1, "one", false), keep.clone()];

        remove_matching(&mut todos, 1, true);

        assert_eq!(todos, vec![keep]);
    }

    #[test]
    fn remove_matching_without_success_leaves_mirror_unchanged() {
        let mut todos = vec![todo(1, "one", false), todo(2, "two", true)];
        let before = todos.clone();

        remove_matching(&mut todos, 1, false);

        assert_eq!(todos, before);
    }

    #[test]
    fn counts_track_completed_and_remaining() {
        let session = TodoSession {
            client: TodoClient::new("http://localhost:3000"),
            todos: vec![
                todo(1, "a", true),
                todo(2, "b", false),
                todo(3, "c", false),
            ],
        };

        assert_eq!(
            session.counts(),
            Counts {
                total: 3,
                completed: 1,
                remaining: 2,
            }
        );
    }
}

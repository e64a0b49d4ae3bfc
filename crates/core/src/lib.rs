//! Shared domain types and errors for the todolist workspace.

pub mod error;
pub mod types;

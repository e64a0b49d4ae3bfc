//! Typed client for the todolist service.
//!
//! [`client::TodoClient`] wraps the four remote procedures; [`session`]
//! holds the local list mirror with the same reconciliation discipline as
//! the original browser client: local state only changes after a confirmed
//! server response.

pub mod client;
pub mod error;
pub mod session;

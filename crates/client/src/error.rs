/// Errors produced by [`TodoClient`](crate::client::TodoClient).
///
/// Not-found is kept distinguishable from other API failures because it is
/// the single named error condition in the RPC contract.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never completed (connection, timeout, decode at the
    /// transport level).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server reported 404 for the targeted record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success response, with the server's message.
    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },
}

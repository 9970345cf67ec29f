//! Error types for the issue client.

use thiserror::Error;

/// Errors that can occur when configuring the client or creating an issue.
#[derive(Debug, Error)]
pub enum Error {
    /// No username was set before calling `create_issue`.
    #[error("username is required: set it before creating an issue")]
    MissingUsername,

    /// No password was set before calling `create_issue`.
    #[error("password is required: set it before creating an issue")]
    MissingPassword,

    /// No base URL was set before calling `create_issue`.
    #[error("base URL is required: set it before creating an issue")]
    MissingUrl,

    /// Failure surfaced by the HTTP transport: connection errors, timeouts,
    /// or a non-success status code.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an arbitrary failure as a transport error.
    ///
    /// Custom [`Transport`](crate::Transport) implementations use this to
    /// report their own failures.
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Transport(err.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

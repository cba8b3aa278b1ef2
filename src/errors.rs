use thiserror::Error;

/// Errors surfaced by the festival API client and the scoring workflow.
///
/// Nothing here is fatal: every variant degrades to a message shown at the
/// point of the action that triggered it, with local state left as it was.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected before the score store is contacted; no state mutation occurs.
    #[error("{0}")]
    Validation(String),

    /// Non-success response from the backend, carrying its detail message
    /// when the body provided one.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// The request never produced a response.
    #[error("No response from server")]
    Network(#[source] reqwest::Error),

    /// A response arrived but its body could not be decoded.
    #[error("Request failed")]
    InvalidResponse(#[source] reqwest::Error),

    #[error("Not authenticated")]
    NotAuthenticated,

    /// The stored session token was rejected and has been cleared.
    #[error("Session expired")]
    SessionExpired,

    /// Local session persistence failed.
    #[error("Session storage error: {0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

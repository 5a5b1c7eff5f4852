//! Error taxonomy for the client core.

use thiserror::Error;

/// Failures raised by the remote API layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The credential was rejected and the single silent refresh also
    /// failed. The caller must treat the session as gone and route the
    /// user back to the unauthenticated landing page.
    #[error("session expired")]
    SessionExpired,

    /// The remote collaborator rejected the request on business grounds.
    /// Carries the server-provided message verbatim when one was given.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("token store error: {0}")]
    TokenStore(String),
}

/// Client-side validation failure: no network call was made.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Failures raised by the setup/exam/publish workflows.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("not authenticated")]
    NotAuthenticated,

    #[error("profile already complete")]
    ProfileAlreadyComplete,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown subcategory: {0}")]
    UnknownSubcategory(String),

    #[error("role {0} cannot create listings")]
    RoleWithoutCreateIntent(String),

    #[error("operation not valid in the current step")]
    InvalidStep,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

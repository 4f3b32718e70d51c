//! Shared error types for the services crate.

use thiserror::Error;

use learnpath_core::model::ValidationError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

pub(crate) const UNKNOWN_ERROR: &str = "Unknown error";
pub(crate) const REQUEST_FAILED: &str = "Request failed";
pub(crate) const NETWORK_ERROR: &str = "Network error. Make sure the server is running.";

/// Normalised outcome of a failed API call.
///
/// `Display` yields the text shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    /// The server answered 401. The session has already been cleared.
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Cannot connect to server. Make sure the backend server is running on {origin}")]
    CannotConnect { origin: String },
    #[error("{0}")]
    Network(String),
    /// The body was not JSON; carries the raw text.
    #[error("{0}")]
    NonJson(String),
    /// A JSON error body with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// A success body that does not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Errors emitted by session persistence.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Signup failed. Please try again.")]
    SignupFailed,
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error("No quiz available for this topic")]
    NoQuizAvailable,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

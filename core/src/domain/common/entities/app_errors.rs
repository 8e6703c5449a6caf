use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Anonymous access is disabled")]
    AnonymousAccessDenied,

    /// Lost a creation race against a store uniqueness constraint. Services
    /// resolve this by re-reading the winner's row; it must never reach a
    /// caller.
    #[error("Unique constraint violation")]
    UniqueViolation,

    #[error("Model service unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Model request timed out: {0}")]
    ModelTimeout(String),

    #[error("Internal server error")]
    InternalServerError,
}

//! Client-side error model.

use thiserror::Error;

/// Result type used across session and resource operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Structured outcome of a failed session or resource operation.
///
/// Every operation resolves or rejects exactly once with one of these
/// variants; raw transport failures never escape to callers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// A client-side field constraint was violated. The request was not
    /// transmitted.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The server rejected the credentials or token (401).
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The server refused the operation for this identity (403). The client
    /// does not attempt any local role repair.
    #[error("forbidden: {0}")]
    Authorization(String),

    /// The requested entry does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other server-reported failure (5xx, unexpected status).
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The server could not be reached at all. No local state was mutated.
    #[error("network error: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    pub fn authorization(msg: impl Into<String>) -> Self {
        Self::Authorization(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// True for failures produced before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_local() {
        assert!(ApiError::validation("title is required").is_local());
        assert!(!ApiError::not_found("entry not found").is_local());
        assert!(!ApiError::transport("connection refused").is_local());
    }

    #[test]
    fn display_includes_detail() {
        let err = ApiError::server(500, "boom");
        assert_eq!(err.to_string(), "server error (500): boom");

        let err = ApiError::authentication("bad credentials");
        assert!(err.to_string().contains("bad credentials"));
    }
}

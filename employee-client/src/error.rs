//! Client error types

use shared::error::ErrorCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a structured error
    #[error("{message} (code {code})")]
    Api {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Structured error code, when the server sent a known one
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api { code, .. } => ErrorCode::try_from(*code).ok(),
            _ => None,
        }
    }

    /// Server refused to delete an active employee
    pub fn is_delete_blocked(&self) -> bool {
        self.error_code() == Some(ErrorCode::EmployeeDeleteBlocked)
    }

    pub fn is_not_found(&self) -> bool {
        self.error_code() == Some(ErrorCode::EmployeeNotFound)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

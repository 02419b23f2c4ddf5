//! Centralized error handling.
//!
//! Provides a unified error type for the store, the services and the
//! front ends built on top of them.

use thiserror::Error;

use crate::config::{MSG_MISSING_INFORMATION, MSG_USER_NOT_FOUND};

/// Application error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Request lifecycle
    #[error("Request cancelled")]
    Cancelled,

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get stable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Cancelled => "CANCELLED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if the error reports a missing record or collection
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(MSG_USER_NOT_FOUND))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn missing_information() -> Self {
        AppError::Validation(MSG_MISSING_INFORMATION.to_string())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            AppError::not_found(MSG_USER_NOT_FOUND).to_string(),
            "User not found"
        );
        assert_eq!(
            AppError::missing_information().to_string(),
            "Not all information provided"
        );
        assert_eq!(AppError::Cancelled.to_string(), "Request cancelled");
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<u8> = None;
        let err = missing.ok_or_not_found().unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
    }
}

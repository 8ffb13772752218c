//! Access-service error types.
//!
//! The predicates themselves never fail. These errors come from the session
//! lifecycle around them.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | SessionNotFound | 404 |
//! | ValidationFailed | 400 |
//! | IdentityMismatch | 403 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No session has been established for this user.
    #[error("No active session for user {0}")]
    SessionNotFound(UserId),

    /// Request payload failed validation.
    #[error("Validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    /// The sign-in payload names a different user than the caller.
    #[error("Session payload is for user {payload}, caller is {caller}")]
    IdentityMismatch { caller: UserId, payload: UserId },

    /// Session store failure.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl AccessError {
    pub fn session_not_found(user_id: UserId) -> Self {
        AccessError::SessionNotFound(user_id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AccessError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn identity_mismatch(caller: UserId, payload: UserId) -> Self {
        AccessError::IdentityMismatch { caller, payload }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccessError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AccessError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            AccessError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AccessError::IdentityMismatch { .. } => ErrorCode::Forbidden,
            AccessError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for AccessError {
    fn from(err: ValidationError) -> Self {
        AccessError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for AccessError {
    fn from(err: DomainError) -> Self {
        AccessError::infrastructure(err.to_string())
    }
}

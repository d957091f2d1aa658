//! Error types

use super::codes::ErrorCode;
use crate::models::permission::InvalidPermission;
use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type for the console core, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level errors, offending ids)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a permission denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, msg)
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// Create a role not found error
    pub fn role_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(ErrorCode::RoleNotFound, format!("Função {} não encontrada", id))
            .with_detail("role_id", id)
    }

    /// Create a role already exists error
    pub fn role_already_exists(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(
            ErrorCode::RoleAlreadyExists,
            format!("Já existe uma função com o ID {}", id),
        )
        .with_detail("role_id", id)
    }

    /// Create a user not found error
    pub fn user_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::UserNotFound, format!("Usuário {} não encontrado", id))
            .with_detail("user_id", id)
    }

    /// Create an email already registered error
    pub fn email_already_exists(email: impl Into<String>) -> Self {
        let email = email.into();
        Self::with_message(
            ErrorCode::EmailAlreadyExists,
            format!("O email {} já está cadastrado", email),
        )
        .with_detail("email", email)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = err.errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        Self::validation(err.to_string()).with_detail("fields", fields)
    }
}

impl From<InvalidPermission> for AppError {
    fn from(err: InvalidPermission) -> Self {
        Self::with_message(ErrorCode::InvalidPermission, err.to_string())
            .with_detail("permission", err.0)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

//! HTTP status code mapping for error codes
//!
//! The console core has no server of its own; the mapping lets a UI or API
//! layer turn an [`ErrorCode`] into a response without its own table.

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::UserNotFound | Self::RoleNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::EmailAlreadyExists | Self::RoleAlreadyExists => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::InvalidCredentials | Self::AccountDisabled | Self::AccountPending => {
                StatusCode::UNAUTHORIZED
            }

            // 403 Forbidden
            Self::PermissionDenied | Self::RoleNotDeletable => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidPermission
            | Self::AnticipationValueRequired
            | Self::InvalidAmount => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::UserNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::EmailAlreadyExists.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(ErrorCode::RoleNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::RoleAlreadyExists.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::InvalidCredentials.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::RoleNotDeletable.http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ErrorCode::InvalidPermission.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::ConfigError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

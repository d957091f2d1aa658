//! Unified error codes for the billing console
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication and user account errors
//! - 2xxx: Permission and role errors
//! - 3xxx: Anticipation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so a UI layer can switch on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 1xxx: Auth ====================
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Account is disabled
    AccountDisabled = 1003,
    /// Account invitation not yet accepted
    AccountPending = 1004,
    /// User account not found
    UserNotFound = 1101,
    /// Email already used by another account
    EmailAlreadyExists = 1102,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Permission token is not part of the catalog
    InvalidPermission = 2002,
    /// Role not found
    RoleNotFound = 2101,
    /// Role id already taken
    RoleAlreadyExists = 2102,
    /// Role cannot be deleted
    RoleNotDeletable = 2103,

    // ==================== 3xxx: Anticipation ====================
    /// Anticipation value is required
    AnticipationValueRequired = 3001,
    /// Amount could not be parsed
    InvalidAmount = 3002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default user-facing message (pt-BR) for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Dados inválidos",

            // Auth
            ErrorCode::InvalidCredentials => "Email ou senha inválidos",
            ErrorCode::AccountDisabled => "Usuário desativado",
            ErrorCode::AccountPending => "Convite ainda não aceito",
            ErrorCode::UserNotFound => "Usuário não encontrado",
            ErrorCode::EmailAlreadyExists => "Email já cadastrado",

            // Permission
            ErrorCode::PermissionDenied => "Permissão negada",
            ErrorCode::InvalidPermission => "Permissão desconhecida",
            ErrorCode::RoleNotFound => "Função não encontrada",
            ErrorCode::RoleAlreadyExists => "Função já existe",
            ErrorCode::RoleNotDeletable => "Esta função não pode ser excluída",

            // Anticipation
            ErrorCode::AnticipationValueRequired => "Informe o valor da antecipação",
            ErrorCode::InvalidAmount => "Valor inválido",

            // System
            ErrorCode::InternalError => "Erro interno",
            ErrorCode::ConfigError => "Erro de configuração",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),

            // Auth
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::AccountDisabled),
            1004 => Ok(ErrorCode::AccountPending),
            1101 => Ok(ErrorCode::UserNotFound),
            1102 => Ok(ErrorCode::EmailAlreadyExists),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::InvalidPermission),
            2101 => Ok(ErrorCode::RoleNotFound),
            2102 => Ok(ErrorCode::RoleAlreadyExists),
            2103 => Ok(ErrorCode::RoleNotDeletable),

            // Anticipation
            3001 => Ok(ErrorCode::AnticipationValueRequired),
            3002 => Ok(ErrorCode::InvalidAmount),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::EmailAlreadyExists.code(), 1102);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::RoleNotDeletable.code(), 2103);
        assert_eq!(ErrorCode::AnticipationValueRequired.code(), 3001);
        assert_eq!(ErrorCode::ConfigError.code(), 9002);
    }

    #[test]
    fn test_try_from_matches_code() {
        let all = [
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidCredentials,
            ErrorCode::AccountDisabled,
            ErrorCode::AccountPending,
            ErrorCode::UserNotFound,
            ErrorCode::EmailAlreadyExists,
            ErrorCode::PermissionDenied,
            ErrorCode::InvalidPermission,
            ErrorCode::RoleNotFound,
            ErrorCode::RoleAlreadyExists,
            ErrorCode::RoleNotDeletable,
            ErrorCode::AnticipationValueRequired,
            ErrorCode::InvalidAmount,
            ErrorCode::InternalError,
            ErrorCode::ConfigError,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(
            format!("{}", InvalidErrorCode(999)),
            "invalid error code: 999"
        );
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::RoleNotFound).unwrap();
        assert_eq!(json, "2101");

        let code: ErrorCode = serde_json::from_str("3001").unwrap();
        assert_eq!(code, ErrorCode::AnticipationValueRequired);

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::ValidationFailed), "2");
        assert_eq!(format!("{}", ErrorCode::RoleNotFound), "2101");
    }
}

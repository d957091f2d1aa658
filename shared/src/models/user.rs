//! User Account Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Account lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    /// Invited, invitation not yet accepted
    Pending,
}

/// Dashboard user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Role id; may reference a role that no longer exists
    pub role: String,
    pub status: UserStatus,
}

impl UserAccount {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    #[validate(length(min = 3, message = "O nome deve ter pelo menos 3 caracteres"))]
    pub name: String,

    #[validate(email(message = "Email inválido"))]
    pub email: String,

    #[validate(length(min = 1, message = "Selecione uma função"))]
    pub role: String,

    pub status: UserStatus,

    /// Send an invitation email after creation
    #[serde(default)]
    pub send_invite: bool,
}

impl UserCreate {
    pub fn into_account(self, id: i64) -> UserAccount {
        UserAccount {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            status: self.status,
        }
    }
}

/// Update user payload; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(length(min = 3, message = "O nome deve ter pelo menos 3 caracteres"))]
    pub name: Option<String>,

    #[validate(email(message = "Email inválido"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "Selecione uma função"))]
    pub role: Option<String>,

    pub status: Option<UserStatus>,
}

/// User directory filter
///
/// `search` is a case-insensitive substring of the name; the other fields
/// match exactly. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn matches(&self, user: &UserAccount) -> bool {
        let search_ok = self.search.as_deref().is_none_or(|term| {
            let term = term.trim().to_lowercase();
            term.is_empty() || user.name.to_lowercase().contains(&term)
        });
        let role_ok = self.role.as_deref().is_none_or(|role| role == user.role);
        let status_ok = self.status.is_none_or(|status| status == user.status);
        search_ok && role_ok && status_ok
    }
}

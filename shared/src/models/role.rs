//! Role Model

use super::permission::{Permission, PermissionSet};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Id of the role that can never be deleted
pub const ADMIN_ROLE_ID: &str = "admin";

/// Role entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Lowercase slug, unique across roles
    pub id: String,
    pub name: String,
    pub description: String,
    pub permissions: PermissionSet,
}

impl Role {
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// The admin role is protected from deletion
    pub fn is_deletable(&self) -> bool {
        self.id != ADMIN_ROLE_ID
    }
}

/// Create role payload
///
/// Permissions stay as raw tokens here; they are checked against the
/// catalog when the role is stored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleCreate {
    #[validate(
        length(min = 2, message = "O ID deve ter pelo menos 2 caracteres"),
        custom(function = "validate_role_slug")
    )]
    pub id: String,

    #[validate(length(min = 2, message = "O nome deve ter pelo menos 2 caracteres"))]
    pub name: String,

    #[validate(length(min = 5, message = "A descrição deve ter pelo menos 5 caracteres"))]
    pub description: String,

    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Update role payload (the id is immutable)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RoleUpdate {
    #[validate(length(min = 2, message = "O nome deve ter pelo menos 2 caracteres"))]
    pub name: Option<String>,

    #[validate(length(min = 5, message = "A descrição deve ter pelo menos 5 caracteres"))]
    pub description: Option<String>,

    pub permissions: Option<Vec<String>>,
}

/// Role ids may only contain lowercase letters, digits, `-` and `_`
pub fn validate_role_slug(id: &str) -> Result<(), ValidationError> {
    let valid = id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("slug").with_message(Cow::Borrowed(
            "O ID deve conter apenas letras minúsculas, números, hífens e underscores",
        )))
    }
}

//! 当前用户上下文

use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::models::{Permission, PermissionSet, UserAccount};

use super::permissions::has_permission;
use crate::roles::RoleStore;

/// A user joined with the permissions of their role
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role_id: String,
    pub permissions: PermissionSet,
}

impl CurrentUser {
    /// Resolve a user's permissions through the role store
    ///
    /// A role id that no longer exists yields no permissions.
    pub fn resolve(user: &UserAccount, roles: &dyn RoleStore) -> Self {
        let permissions = roles.role_permissions(&user.role);
        if permissions.is_empty() && roles.find_by_id(&user.role).is_none() {
            tracing::warn!(
                user_id = user.id,
                role_id = %user.role,
                "User references an unknown role"
            );
        }

        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role_id: user.role.clone(),
            permissions,
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        has_permission(&self.permissions, permission)
    }

    /// Fail with `PermissionDenied` unless the permission is granted
    pub fn require(&self, permission: Permission) -> AppResult<()> {
        if self.has_permission(permission) {
            return Ok(());
        }
        tracing::warn!(
            user_id = self.id,
            permission = %permission,
            "Permission denied"
        );
        Err(
            AppError::permission_denied(format!("Permissão necessária: {}", permission))
                .with_detail("permission", permission.to_string()),
        )
    }
}

//! In-memory role store

use parking_lot::RwLock;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Role, RoleCreate, RoleUpdate, parse_permission_set};
use validator::Validate;

use super::RoleStore;
use crate::auth::permissions::get_all_roles;

/// Role store kept in process memory, seeded with the built-in roles
pub struct InMemoryRoleStore {
    roles: RwLock<Vec<Role>>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::with_roles(get_all_roles())
    }

    pub fn with_roles(roles: Vec<Role>) -> Self {
        Self {
            roles: RwLock::new(roles),
        }
    }

    pub fn len(&self) -> usize {
        self.roles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.read().is_empty()
    }
}

impl Default for InMemoryRoleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleStore for InMemoryRoleStore {
    fn list(&self) -> Vec<Role> {
        self.roles.read().clone()
    }

    fn find_by_id(&self, id: &str) -> Option<Role> {
        self.roles.read().iter().find(|r| r.id == id).cloned()
    }

    fn create(&self, data: RoleCreate) -> AppResult<Role> {
        data.validate()?;
        let permissions = parse_permission_set(&data.permissions)?;

        let mut roles = self.roles.write();
        if roles.iter().any(|r| r.id == data.id) {
            return Err(AppError::role_already_exists(data.id));
        }

        let role = Role {
            id: data.id,
            name: data.name,
            description: data.description,
            permissions,
        };
        roles.push(role.clone());

        tracing::info!(
            role_id = %role.id,
            permissions = role.permissions.len(),
            "Role created"
        );
        Ok(role)
    }

    fn update(&self, id: &str, data: RoleUpdate) -> AppResult<Role> {
        data.validate()?;
        let permissions = data
            .permissions
            .as_deref()
            .map(parse_permission_set)
            .transpose()?;

        let mut roles = self.roles.write();
        let role = roles
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::role_not_found(id))?;

        if let Some(name) = data.name {
            role.name = name;
        }
        if let Some(description) = data.description {
            role.description = description;
        }
        if let Some(permissions) = permissions {
            role.permissions = permissions;
        }

        tracing::info!(role_id = %role.id, "Role updated");
        Ok(role.clone())
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let mut roles = self.roles.write();
        let index = roles
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::role_not_found(id))?;

        if !roles[index].is_deletable() {
            tracing::warn!(role_id = %id, "Attempt to delete protected role");
            return Err(AppError::with_message(
                ErrorCode::RoleNotDeletable,
                format!("A função {} não pode ser excluída", id),
            )
            .with_detail("role_id", id));
        }

        roles.remove(index);
        tracing::info!(role_id = %id, "Role deleted");
        Ok(())
    }
}

//! Role Store
//!
//! Roles are read and written through [`RoleStore`]. The built-in roles seed
//! the default [`InMemoryRoleStore`]; a persistent backend implements the
//! same trait.

pub mod memory;

pub use memory::InMemoryRoleStore;

use shared::error::AppResult;
use shared::models::{PermissionSet, Role, RoleCreate, RoleUpdate};

/// CRUD over roles
pub trait RoleStore: Send + Sync {
    fn list(&self) -> Vec<Role>;
    fn find_by_id(&self, id: &str) -> Option<Role>;
    fn create(&self, data: RoleCreate) -> AppResult<Role>;
    fn update(&self, id: &str, data: RoleUpdate) -> AppResult<Role>;
    fn delete(&self, id: &str) -> AppResult<()>;

    /// Permissions of a role, empty when the id is unknown
    fn role_permissions(&self, id: &str) -> PermissionSet {
        self.find_by_id(id)
            .map(|role| role.permissions)
            .unwrap_or_default()
    }
}

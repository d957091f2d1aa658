//! 认证授权模块
//!
//! 提供权限目录、认证和当前用户上下文：
//! - [`permissions`] - 内置角色与权限分组
//! - [`Authenticator`] - 可插拔认证接口
//! - [`CurrentUser`] - 当前用户及其权限

pub mod authenticator;
pub mod current_user;
pub mod permissions;

pub use authenticator::{Authenticator, CredentialAuthenticator, Session};
pub use current_user::CurrentUser;
pub use permissions::{
    PermissionGroup, get_all_permissions_grouped, get_all_roles, get_role_by_id,
    get_role_permissions, has_permission,
};

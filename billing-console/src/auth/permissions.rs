//! Permission Definitions
//!
//! Static RBAC catalog for the dashboard.
//!
//! ## 设计原则
//! - 权限格式固定为 `resource:action`，只接受目录中声明的 34 项
//! - 内置角色为只读数据；增删改走 [`crate::roles::RoleStore`]
//! - 未知角色视为"无权限"，不是错误
//! - 分组标签是人工整理的显示名称，不从 resource 推导

use serde::Serialize;
use shared::models::{Permission, PermissionSet, Role};

/// Built-in role declaration
#[derive(Debug, Clone, Copy)]
pub struct RoleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub permissions: &'static [Permission],
}

impl RoleDefinition {
    pub fn to_role(&self) -> Role {
        Role {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            permissions: self.permissions.iter().copied().collect(),
        }
    }
}

/// 经理：大部分功能，不含高级配置
const MANAGER_PERMISSIONS: &[Permission] = &[
    Permission::DASHBOARD_VIEW,
    Permission::INVOICES_VIEW,
    Permission::INVOICES_CREATE,
    Permission::INVOICES_EDIT,
    Permission::PAYMENTS_VIEW,
    Permission::TRANSFERS_VIEW,
    Permission::TRANSFERS_CREATE,
    Permission::BALANCE_VIEW,
    Permission::ANTICIPATION_REQUEST,
    Permission::CUSTOMERS_VIEW,
    Permission::CUSTOMERS_CREATE,
    Permission::CUSTOMERS_EDIT,
    Permission::SUBSCRIPTIONS_VIEW,
    Permission::SUBSCRIPTIONS_CREATE,
    Permission::SUBSCRIPTIONS_EDIT,
    Permission::REPORTS_VIEW,
    Permission::REPORTS_EXPORT,
    Permission::SETTINGS_VIEW,
    Permission::USERS_VIEW,
    Permission::INTEGRATIONS_VIEW,
];

/// 会计：财务报表与交易查看
const ACCOUNTANT_PERMISSIONS: &[Permission] = &[
    Permission::DASHBOARD_VIEW,
    Permission::INVOICES_VIEW,
    Permission::PAYMENTS_VIEW,
    Permission::TRANSFERS_VIEW,
    Permission::BALANCE_VIEW,
    Permission::CUSTOMERS_VIEW,
    Permission::SUBSCRIPTIONS_VIEW,
    Permission::REPORTS_VIEW,
    Permission::REPORTS_EXPORT,
];

/// 操作员：日常基础操作
const OPERATOR_PERMISSIONS: &[Permission] = &[
    Permission::DASHBOARD_VIEW,
    Permission::INVOICES_VIEW,
    Permission::INVOICES_CREATE,
    Permission::PAYMENTS_VIEW,
    Permission::TRANSFERS_VIEW,
    Permission::CUSTOMERS_VIEW,
    Permission::SUBSCRIPTIONS_VIEW,
];

/// 只读
const VIEWER_PERMISSIONS: &[Permission] = &[
    Permission::DASHBOARD_VIEW,
    Permission::INVOICES_VIEW,
    Permission::PAYMENTS_VIEW,
    Permission::CUSTOMERS_VIEW,
    Permission::SUBSCRIPTIONS_VIEW,
];

/// 财务
const FINANCIAL_PERMISSIONS: &[Permission] = &[
    Permission::DASHBOARD_VIEW,
    Permission::INVOICES_VIEW,
    Permission::INVOICES_CREATE,
    Permission::INVOICES_EDIT,
    Permission::PAYMENTS_VIEW,
    Permission::TRANSFERS_VIEW,
    Permission::TRANSFERS_CREATE,
    Permission::BALANCE_VIEW,
    Permission::ANTICIPATION_REQUEST,
    Permission::REPORTS_VIEW,
    Permission::REPORTS_EXPORT,
];

/// Built-in roles, in declaration order
pub const BUILTIN_ROLES: &[RoleDefinition] = &[
    RoleDefinition {
        id: "admin",
        name: "Administrador",
        description: "Acesso completo ao sistema",
        permissions: &Permission::ALL,
    },
    RoleDefinition {
        id: "manager",
        name: "Gerente",
        description: "Acesso à maioria das funcionalidades, exceto configurações avançadas",
        permissions: MANAGER_PERMISSIONS,
    },
    RoleDefinition {
        id: "accountant",
        name: "Contador",
        description: "Acesso a relatórios financeiros e visualização de transações",
        permissions: ACCOUNTANT_PERMISSIONS,
    },
    RoleDefinition {
        id: "operator",
        name: "Operador",
        description: "Acesso básico para operações do dia a dia",
        permissions: OPERATOR_PERMISSIONS,
    },
    RoleDefinition {
        id: "viewer",
        name: "Visualizador",
        description: "Acesso somente para visualização",
        permissions: VIEWER_PERMISSIONS,
    },
    RoleDefinition {
        id: "financial",
        name: "Financeiro",
        description: "Acesso a funcionalidades financeiras",
        permissions: FINANCIAL_PERMISSIONS,
    },
];

/// One labelled category of the permission picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionGroup {
    pub label: &'static str,
    pub permissions: Vec<Permission>,
}

/// 权限分组（显示顺序）
const PERMISSION_GROUPS: &[(&str, &[Permission])] = &[
    ("Dashboard", &[Permission::DASHBOARD_VIEW]),
    (
        "Cobranças",
        &[
            Permission::INVOICES_VIEW,
            Permission::INVOICES_CREATE,
            Permission::INVOICES_EDIT,
            Permission::INVOICES_DELETE,
        ],
    ),
    ("Pagamentos", &[Permission::PAYMENTS_VIEW]),
    (
        "Transferências",
        &[
            Permission::TRANSFERS_VIEW,
            Permission::TRANSFERS_CREATE,
            Permission::TRANSFERS_EDIT,
            Permission::TRANSFERS_DELETE,
        ],
    ),
    (
        "Saldo",
        &[Permission::BALANCE_VIEW, Permission::ANTICIPATION_REQUEST],
    ),
    (
        "Clientes",
        &[
            Permission::CUSTOMERS_VIEW,
            Permission::CUSTOMERS_CREATE,
            Permission::CUSTOMERS_EDIT,
            Permission::CUSTOMERS_DELETE,
        ],
    ),
    (
        "Assinaturas",
        &[
            Permission::SUBSCRIPTIONS_VIEW,
            Permission::SUBSCRIPTIONS_CREATE,
            Permission::SUBSCRIPTIONS_EDIT,
            Permission::SUBSCRIPTIONS_DELETE,
        ],
    ),
    (
        "Relatórios",
        &[Permission::REPORTS_VIEW, Permission::REPORTS_EXPORT],
    ),
    (
        "Configurações",
        &[Permission::SETTINGS_VIEW, Permission::SETTINGS_EDIT],
    ),
    (
        "Usuários",
        &[
            Permission::USERS_VIEW,
            Permission::USERS_CREATE,
            Permission::USERS_EDIT,
            Permission::USERS_DELETE,
        ],
    ),
    (
        "Permissões",
        &[
            Permission::ROLES_VIEW,
            Permission::ROLES_CREATE,
            Permission::ROLES_EDIT,
            Permission::ROLES_DELETE,
        ],
    ),
    (
        "Integrações",
        &[
            Permission::INTEGRATIONS_VIEW,
            Permission::INTEGRATIONS_CONFIGURE,
        ],
    ),
];

/// All built-in roles, in declaration order
pub fn get_all_roles() -> Vec<Role> {
    BUILTIN_ROLES.iter().map(RoleDefinition::to_role).collect()
}

/// Find a built-in role by exact id
pub fn get_role_by_id(role_id: &str) -> Option<Role> {
    BUILTIN_ROLES
        .iter()
        .find(|r| r.id == role_id)
        .map(RoleDefinition::to_role)
}

/// Permissions of a built-in role; empty for an unknown id
pub fn get_role_permissions(role_id: &str) -> PermissionSet {
    BUILTIN_ROLES
        .iter()
        .find(|r| r.id == role_id)
        .map(|r| r.permissions.iter().copied().collect())
        .unwrap_or_default()
}

pub fn has_permission(granted: &PermissionSet, required: Permission) -> bool {
    granted.contains(&required)
}

/// The curated permission groups, in display order
///
/// Serializes as an ordered list of `{ "label", "permissions" }` objects
/// rather than an object keyed by label, so clients keep the display order.
pub fn get_all_permissions_grouped() -> Vec<PermissionGroup> {
    PERMISSION_GROUPS
        .iter()
        .map(|&(label, permissions)| PermissionGroup {
            label,
            permissions: permissions.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_role_is_found_by_its_id() {
        let roles = get_all_roles();
        assert!(!roles.is_empty());
        for role in &roles {
            assert_eq!(get_role_by_id(&role.id).as_ref(), Some(role));
        }
    }

    #[test]
    fn test_roles_in_declaration_order() {
        let ids: Vec<String> = get_all_roles().into_iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            ["admin", "manager", "accountant", "operator", "viewer", "financial"]
        );
    }

    #[test]
    fn test_role_ids_are_unique() {
        let ids: HashSet<&str> = BUILTIN_ROLES.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), BUILTIN_ROLES.len());
    }

    #[test]
    fn test_unknown_role() {
        assert!(get_role_by_id("nonexistent-id").is_none());
        assert!(get_role_permissions("nonexistent-id").is_empty());
        // Exact match only
        assert!(get_role_by_id("Admin").is_none());
        assert!(get_role_by_id(" admin").is_none());
    }

    #[test]
    fn test_admin_grants_every_permission() {
        let granted = get_role_permissions("admin");
        for p in Permission::ALL {
            assert!(has_permission(&granted, p), "admin lacks {p}");
        }
    }

    #[test]
    fn test_builtin_role_permissions() {
        let viewer = get_role_permissions("viewer");
        assert_eq!(viewer.len(), 5);
        assert!(has_permission(&viewer, Permission::INVOICES_VIEW));
        assert!(!has_permission(&viewer, Permission::INVOICES_CREATE));

        let manager = get_role_permissions("manager");
        assert_eq!(manager.len(), 20);
        assert!(has_permission(&manager, Permission::ANTICIPATION_REQUEST));
        assert!(!has_permission(&manager, Permission::SETTINGS_EDIT));
        assert!(!has_permission(&manager, Permission::ROLES_VIEW));

        assert_eq!(get_role_permissions("accountant").len(), 9);
        assert_eq!(get_role_permissions("operator").len(), 7);
        assert_eq!(get_role_permissions("financial").len(), 11);
        assert!(!has_permission(
            &get_role_permissions("accountant"),
            Permission::ANTICIPATION_REQUEST
        ));
    }

    #[test]
    fn test_groups_partition_the_catalog() {
        let groups = get_all_permissions_grouped();
        let mut seen = HashSet::new();
        for group in &groups {
            for p in &group.permissions {
                assert!(seen.insert(*p), "{p} appears twice");
            }
        }
        assert_eq!(seen.len(), Permission::ALL.len());
        for p in Permission::ALL {
            assert!(seen.contains(&p), "{p} is in no group");
        }
    }

    #[test]
    fn test_group_labels_are_curated() {
        let labels: Vec<&str> = get_all_permissions_grouped()
            .iter()
            .map(|g| g.label)
            .collect();
        assert_eq!(
            labels,
            [
                "Dashboard",
                "Cobranças",
                "Pagamentos",
                "Transferências",
                "Saldo",
                "Clientes",
                "Assinaturas",
                "Relatórios",
                "Configurações",
                "Usuários",
                "Permissões",
                "Integrações",
            ]
        );

        // "Saldo" mixes two resources
        let saldo = &get_all_permissions_grouped()[4];
        assert_eq!(
            saldo.permissions,
            vec![Permission::BALANCE_VIEW, Permission::ANTICIPATION_REQUEST]
        );
    }

    #[test]
    fn test_group_serializes_tokens() {
        let json = serde_json::to_value(&get_all_permissions_grouped()[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"label": "Dashboard", "permissions": ["dashboard:view"]})
        );

        let all = serde_json::to_value(get_all_permissions_grouped()).unwrap();
        let list = all.as_array().unwrap();
        assert_eq!(list[0]["label"], "Dashboard");
        assert_eq!(list[1]["label"], "Cobranças");
    }
}

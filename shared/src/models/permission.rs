//! Permission Model
//!
//! A permission is a `resource:action` pair. Only the pairs declared in
//! [`Permission::ALL`] exist; anything else fails to parse.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Set of granted permissions (iterates in catalog order)
pub type PermissionSet = BTreeSet<Permission>;

/// Resource half of a permission token (the group key)
///
/// Variant order follows the catalog so that a [`PermissionSet`] iterates in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Dashboard,
    Invoices,
    Payments,
    Transfers,
    Balance,
    Anticipation,
    Customers,
    Subscriptions,
    Reports,
    Settings,
    Users,
    Roles,
    Integrations,
}

impl Resource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Invoices => "invoices",
            Self::Payments => "payments",
            Self::Transfers => "transfers",
            Self::Balance => "balance",
            Self::Anticipation => "anticipation",
            Self::Customers => "customers",
            Self::Subscriptions => "subscriptions",
            Self::Reports => "reports",
            Self::Settings => "settings",
            Self::Users => "users",
            Self::Roles => "roles",
            Self::Integrations => "integrations",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "dashboard" => Self::Dashboard,
            "invoices" => Self::Invoices,
            "payments" => Self::Payments,
            "transfers" => Self::Transfers,
            "balance" => Self::Balance,
            "anticipation" => Self::Anticipation,
            "customers" => Self::Customers,
            "subscriptions" => Self::Subscriptions,
            "reports" => Self::Reports,
            "settings" => Self::Settings,
            "users" => Self::Users,
            "roles" => Self::Roles,
            "integrations" => Self::Integrations,
            _ => return None,
        })
    }
}

/// Action half of a permission token (the display label)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Export,
    Configure,
    Request,
}

impl Action {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Export => "export",
            Self::Configure => "configure",
            Self::Request => "request",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "view" => Self::View,
            "create" => Self::Create,
            "edit" => Self::Edit,
            "delete" => Self::Delete,
            "export" => Self::Export,
            "configure" => Self::Configure,
            "request" => Self::Request,
            _ => return None,
        })
    }
}

/// A declared `resource:action` permission
///
/// Serialized as its string token, e.g. `"invoices:create"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    resource: Resource,
    action: Action,
}

/// Token that is malformed or not part of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid permission: {0}")]
pub struct InvalidPermission(pub String);

impl Permission {
    const fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }

    pub const DASHBOARD_VIEW: Self = Self::new(Resource::Dashboard, Action::View);

    pub const INVOICES_VIEW: Self = Self::new(Resource::Invoices, Action::View);
    pub const INVOICES_CREATE: Self = Self::new(Resource::Invoices, Action::Create);
    pub const INVOICES_EDIT: Self = Self::new(Resource::Invoices, Action::Edit);
    pub const INVOICES_DELETE: Self = Self::new(Resource::Invoices, Action::Delete);

    pub const PAYMENTS_VIEW: Self = Self::new(Resource::Payments, Action::View);

    pub const TRANSFERS_VIEW: Self = Self::new(Resource::Transfers, Action::View);
    pub const TRANSFERS_CREATE: Self = Self::new(Resource::Transfers, Action::Create);
    pub const TRANSFERS_EDIT: Self = Self::new(Resource::Transfers, Action::Edit);
    pub const TRANSFERS_DELETE: Self = Self::new(Resource::Transfers, Action::Delete);

    pub const BALANCE_VIEW: Self = Self::new(Resource::Balance, Action::View);
    pub const ANTICIPATION_REQUEST: Self = Self::new(Resource::Anticipation, Action::Request);

    pub const CUSTOMERS_VIEW: Self = Self::new(Resource::Customers, Action::View);
    pub const CUSTOMERS_CREATE: Self = Self::new(Resource::Customers, Action::Create);
    pub const CUSTOMERS_EDIT: Self = Self::new(Resource::Customers, Action::Edit);
    pub const CUSTOMERS_DELETE: Self = Self::new(Resource::Customers, Action::Delete);

    pub const SUBSCRIPTIONS_VIEW: Self = Self::new(Resource::Subscriptions, Action::View);
    pub const SUBSCRIPTIONS_CREATE: Self = Self::new(Resource::Subscriptions, Action::Create);
    pub const SUBSCRIPTIONS_EDIT: Self = Self::new(Resource::Subscriptions, Action::Edit);
    pub const SUBSCRIPTIONS_DELETE: Self = Self::new(Resource::Subscriptions, Action::Delete);

    pub const REPORTS_VIEW: Self = Self::new(Resource::Reports, Action::View);
    pub const REPORTS_EXPORT: Self = Self::new(Resource::Reports, Action::Export);

    pub const SETTINGS_VIEW: Self = Self::new(Resource::Settings, Action::View);
    pub const SETTINGS_EDIT: Self = Self::new(Resource::Settings, Action::Edit);

    pub const USERS_VIEW: Self = Self::new(Resource::Users, Action::View);
    pub const USERS_CREATE: Self = Self::new(Resource::Users, Action::Create);
    pub const USERS_EDIT: Self = Self::new(Resource::Users, Action::Edit);
    pub const USERS_DELETE: Self = Self::new(Resource::Users, Action::Delete);

    pub const ROLES_VIEW: Self = Self::new(Resource::Roles, Action::View);
    pub const ROLES_CREATE: Self = Self::new(Resource::Roles, Action::Create);
    pub const ROLES_EDIT: Self = Self::new(Resource::Roles, Action::Edit);
    pub const ROLES_DELETE: Self = Self::new(Resource::Roles, Action::Delete);

    pub const INTEGRATIONS_VIEW: Self = Self::new(Resource::Integrations, Action::View);
    pub const INTEGRATIONS_CONFIGURE: Self = Self::new(Resource::Integrations, Action::Configure);

    /// Full permission catalog (34 entries), in declaration order
    pub const ALL: [Self; 34] = [
        Self::DASHBOARD_VIEW,
        Self::INVOICES_VIEW,
        Self::INVOICES_CREATE,
        Self::INVOICES_EDIT,
        Self::INVOICES_DELETE,
        Self::PAYMENTS_VIEW,
        Self::TRANSFERS_VIEW,
        Self::TRANSFERS_CREATE,
        Self::TRANSFERS_EDIT,
        Self::TRANSFERS_DELETE,
        Self::BALANCE_VIEW,
        Self::ANTICIPATION_REQUEST,
        Self::CUSTOMERS_VIEW,
        Self::CUSTOMERS_CREATE,
        Self::CUSTOMERS_EDIT,
        Self::CUSTOMERS_DELETE,
        Self::SUBSCRIPTIONS_VIEW,
        Self::SUBSCRIPTIONS_CREATE,
        Self::SUBSCRIPTIONS_EDIT,
        Self::SUBSCRIPTIONS_DELETE,
        Self::REPORTS_VIEW,
        Self::REPORTS_EXPORT,
        Self::SETTINGS_VIEW,
        Self::SETTINGS_EDIT,
        Self::USERS_VIEW,
        Self::USERS_CREATE,
        Self::USERS_EDIT,
        Self::USERS_DELETE,
        Self::ROLES_VIEW,
        Self::ROLES_CREATE,
        Self::ROLES_EDIT,
        Self::ROLES_DELETE,
        Self::INTEGRATIONS_VIEW,
        Self::INTEGRATIONS_CONFIGURE,
    ];

    /// Group key (substring before `:`)
    pub const fn resource(&self) -> Resource {
        self.resource
    }

    /// Display label (substring after `:`)
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Parse a `resource:action` token, accepting only catalog entries
    pub fn parse(token: &str) -> Result<Self, InvalidPermission> {
        let invalid = || InvalidPermission(token.to_string());

        let (resource, action) = token.split_once(':').ok_or_else(invalid)?;
        let resource = Resource::parse(resource).ok_or_else(invalid)?;
        // A second ':' leaves the action half unmatched
        let action = Action::parse(action).ok_or_else(invalid)?;

        let permission = Self::new(resource, action);
        if Self::ALL.contains(&permission) {
            Ok(permission)
        } else {
            Err(invalid())
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource.as_str(), self.action.as_str())
    }
}

impl FromStr for Permission {
    type Err = InvalidPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Permission {
    type Error = InvalidPermission;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Permission> for String {
    fn from(p: Permission) -> Self {
        p.to_string()
    }
}

/// Parse a list of tokens into a permission set (duplicates collapse)
pub fn parse_permission_set<S: AsRef<str>>(tokens: &[S]) -> Result<PermissionSet, InvalidPermission> {
    tokens.iter().map(|t| Permission::parse(t.as_ref())).collect()
}

//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Closed permission enumeration
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    View,
    Create,
    Edit,
    Delete,
    ManageUsers,
}

impl Permission {
    /// Every permission in the enumeration
    pub const ALL: [Permission; 5] = [
        Permission::View,
        Permission::Create,
        Permission::Edit,
        Permission::Delete,
        Permission::ManageUsers,
    ];

    /// The canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::View => "view",
            Permission::Create => "create",
            Permission::Edit => "edit",
            Permission::Delete => "delete",
            Permission::ManageUsers => "manage_users",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered set of permissions granted to a role
pub type PermissionSet = BTreeSet<Permission>;

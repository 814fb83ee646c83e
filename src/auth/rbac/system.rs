//! RBAC table and decision engine

use crate::core::models::{Principal, Role};
use std::collections::HashMap;
use tracing::debug;

use super::types::{Permission, PermissionSet};

/// Immutable role→permission mapping. Constructed once at startup and never
/// mutated by any request; tests may inject alternate tables.
#[derive(Debug, Clone)]
pub struct RoleTable {
    grants: HashMap<Role, PermissionSet>,
}

/// Unknown or unrecognized roles resolve to this empty set (fail-closed).
static NO_PERMISSIONS: PermissionSet = PermissionSet::new();

impl RoleTable {
    /// The built-in mapping:
    /// admin ⇒ all five permissions, editor ⇒ view/create/edit,
    /// viewer ⇒ view.
    pub fn builtin() -> Self {
        let mut grants = HashMap::new();
        grants.insert(Role::Admin, PermissionSet::from(Permission::ALL));
        grants.insert(
            Role::Editor,
            PermissionSet::from([Permission::View, Permission::Create, Permission::Edit]),
        );
        grants.insert(Role::Viewer, PermissionSet::from([Permission::View]));
        Self { grants }
    }

    /// Build a table from explicit grants
    pub fn with_grants(grants: HashMap<Role, PermissionSet>) -> Self {
        Self { grants }
    }

    /// Permissions granted to a role
    pub fn permissions(&self, role: Role) -> &PermissionSet {
        self.grants.get(&role).unwrap_or(&NO_PERMISSIONS)
    }

    /// Permissions granted to a stored role string. Strings that do not name
    /// a known role yield the empty set, never an error.
    pub fn permissions_named(&self, role: &str) -> &PermissionSet {
        match Role::parse(role) {
            Some(role) => self.permissions(role),
            None => &NO_PERMISSIONS,
        }
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Outcome of an authorization decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The principal holds the required permission
    Granted,
    /// No principal is bound to the request; the caller is redirected to the
    /// login entry point
    Unauthenticated,
    /// A principal exists but its role lacks the permission
    Forbidden,
}

/// Stateless decision engine over an injected [`RoleTable`]
#[derive(Debug, Clone)]
pub struct RbacSystem {
    table: RoleTable,
}

impl RbacSystem {
    /// Create an engine over the given table
    pub fn new(table: RoleTable) -> Self {
        Self { table }
    }

    /// The underlying table
    pub fn table(&self) -> &RoleTable {
        &self.table
    }

    /// Whether the named role holds a permission
    pub fn has_permission(&self, role: &str, permission: Permission) -> bool {
        self.table.permissions_named(role).contains(&permission)
    }

    /// Decide access for a resolved principal (or anonymous) and a required
    /// permission. Decisions are never cached; a role change in the store
    /// takes effect on the very next request.
    pub fn decide(&self, principal: Option<&Principal>, permission: Permission) -> Access {
        let Some(principal) = principal else {
            return Access::Unauthenticated;
        };

        if self.has_permission(&principal.role, permission) {
            Access::Granted
        } else {
            debug!(
                user = %principal.username,
                role = %principal.role,
                permission = %permission,
                "permission denied"
            );
            Access::Forbidden
        }
    }
}

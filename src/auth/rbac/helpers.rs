//! Derived role predicates
//!
//! Each predicate is defined through the same table lookup as
//! [`RbacSystem::decide`](super::RbacSystem::decide), so the two can never
//! disagree for the same permission.

use crate::core::models::Principal;

use super::system::RbacSystem;
use super::types::Permission;

impl RbacSystem {
    /// Whether the principal can administer users
    pub fn is_admin(&self, principal: &Principal) -> bool {
        self.has_permission(&principal.role, Permission::ManageUsers)
    }

    /// Whether the principal can modify records (editors and admins)
    pub fn is_editor_or_admin(&self, principal: &Principal) -> bool {
        self.has_permission(&principal.role, Permission::Edit)
    }

    /// Whether the principal can view records
    pub fn can_view(&self, principal: &Principal) -> bool {
        self.has_permission(&principal.role, Permission::View)
    }

    /// Whether the principal can create records
    pub fn can_create(&self, principal: &Principal) -> bool {
        self.has_permission(&principal.role, Permission::Create)
    }

    /// Whether the principal can edit records
    pub fn can_edit(&self, principal: &Principal) -> bool {
        self.has_permission(&principal.role, Permission::Edit)
    }

    /// Whether the principal can delete records
    pub fn can_delete(&self, principal: &Principal) -> bool {
        self.has_permission(&principal.role, Permission::Delete)
    }
}

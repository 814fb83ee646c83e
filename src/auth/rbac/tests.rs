//! Tests for RBAC decisions

use crate::core::models::{Principal, Role};
use std::collections::HashMap;
use uuid::Uuid;

use super::{Access, Permission, PermissionSet, RbacSystem, RoleTable};

fn principal(role: &str) -> Principal {
    Principal {
        id: Uuid::new_v4(),
        username: format!("{}-user", role),
        role: role.to_string(),
    }
}

fn builtin_rbac() -> RbacSystem {
    RbacSystem::new(RoleTable::builtin())
}

#[test]
fn every_role_has_a_fixed_nonempty_grant() {
    let table = RoleTable::builtin();
    for role in [Role::Admin, Role::Editor, Role::Viewer] {
        assert!(!table.permissions(role).is_empty(), "{} grants empty", role);
    }
}

#[test]
fn admin_holds_all_five_permissions() {
    let rbac = builtin_rbac();
    let admin = principal("admin");
    for permission in Permission::ALL {
        assert_eq!(rbac.decide(Some(&admin), permission), Access::Granted);
    }
}

#[test]
fn editor_can_view_create_edit_only() {
    let rbac = builtin_rbac();
    let editor = principal("editor");
    for permission in [Permission::View, Permission::Create, Permission::Edit] {
        assert_eq!(rbac.decide(Some(&editor), permission), Access::Granted);
    }
    for permission in [Permission::Delete, Permission::ManageUsers] {
        assert_eq!(rbac.decide(Some(&editor), permission), Access::Forbidden);
    }
}

#[test]
fn viewer_can_only_view() {
    let rbac = builtin_rbac();
    let viewer = principal("viewer");
    assert_eq!(rbac.decide(Some(&viewer), Permission::View), Access::Granted);
    for permission in [
        Permission::Create,
        Permission::Edit,
        Permission::Delete,
        Permission::ManageUsers,
    ] {
        assert_eq!(rbac.decide(Some(&viewer), permission), Access::Forbidden);
    }
}

#[test]
fn anonymous_is_denied_every_permission() {
    let rbac = builtin_rbac();
    for permission in Permission::ALL {
        assert_eq!(rbac.decide(None, permission), Access::Unauthenticated);
    }
}

#[test]
fn unrecognized_role_has_zero_permissions() {
    let rbac = builtin_rbac();
    let stranger = principal("superuser");
    for permission in Permission::ALL {
        assert_eq!(rbac.decide(Some(&stranger), permission), Access::Forbidden);
    }
    assert!(rbac.table().permissions_named("superuser").is_empty());
}

#[test]
fn helpers_agree_with_decide() {
    let rbac = builtin_rbac();
    for role in ["admin", "editor", "viewer", "unknown"] {
        let p = principal(role);
        assert_eq!(
            rbac.can_view(&p),
            rbac.decide(Some(&p), Permission::View) == Access::Granted
        );
        assert_eq!(
            rbac.can_create(&p),
            rbac.decide(Some(&p), Permission::Create) == Access::Granted
        );
        assert_eq!(
            rbac.can_edit(&p),
            rbac.decide(Some(&p), Permission::Edit) == Access::Granted
        );
        assert_eq!(
            rbac.can_delete(&p),
            rbac.decide(Some(&p), Permission::Delete) == Access::Granted
        );
        assert_eq!(
            rbac.is_admin(&p),
            rbac.decide(Some(&p), Permission::ManageUsers) == Access::Granted
        );
        assert_eq!(rbac.is_editor_or_admin(&p), rbac.can_edit(&p));
    }
}

#[test]
fn alternate_table_is_honored() {
    let mut grants = HashMap::new();
    grants.insert(Role::Viewer, PermissionSet::from([Permission::Delete]));
    let rbac = RbacSystem::new(RoleTable::with_grants(grants));

    let viewer = principal("viewer");
    assert_eq!(rbac.decide(Some(&viewer), Permission::Delete), Access::Granted);
    assert_eq!(rbac.decide(Some(&viewer), Permission::View), Access::Forbidden);

    // Roles absent from the custom table fail closed.
    let admin = principal("admin");
    assert_eq!(rbac.decide(Some(&admin), Permission::View), Access::Forbidden);
}

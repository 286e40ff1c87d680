use motorhub_core::{AppError, TenantId, UserIdentity};
use motorhub_domain::{Permission, Role};

use super::AccessGuard;

fn identity(subject: &str, tenant_id: TenantId, role_tag: &str) -> UserIdentity {
    UserIdentity::new(subject, subject, None, tenant_id).with_role_tag(role_tag)
}

fn is_forbidden<T>(result: &Result<T, AppError>) -> bool {
    matches!(result, Err(AppError::Forbidden(_)))
}

#[test]
fn identity_role_tag_is_resolved() {
    let tenant_id = TenantId::new();
    let guard = AccessGuard::for_identity(&identity("maria", tenant_id, "branch_manager"));

    assert_eq!(guard.role(), Some(Role::BranchManager));
    assert_eq!(guard.subject(), "maria");
    assert_eq!(guard.tenant_id(), tenant_id);
}

#[test]
fn unknown_role_tag_denies_everything() {
    let guard = AccessGuard::for_identity(&identity("mallory", TenantId::new(), "owner"));

    assert_eq!(guard.role(), None);
    for permission in Permission::all() {
        assert!(!guard.can(*permission));
    }
    assert!(!guard.is_at_least(Role::Viewer));
    assert!(is_forbidden(&guard.require_permission(Permission::ViewVehicles)));
    assert!(is_forbidden(&guard.require_minimum_role(Role::Viewer)));
}

#[test]
fn missing_role_tag_denies_everything() {
    let guard = AccessGuard::for_identity(&UserIdentity::new(
        "anon",
        "Anonymous",
        None,
        TenantId::new(),
    ));

    assert_eq!(guard.role(), None);
    assert!(!guard.can_any(Permission::all()));
}

#[test]
fn require_permission_allows_granted_role() {
    let guard = AccessGuard::new("ana", TenantId::new(), Some(Role::CorporateAdmin));

    assert!(guard.require_permission(Permission::ManageEmployees).is_ok());
}

#[test]
fn require_permission_denial_names_subject_and_permission() {
    let tenant_id = TenantId::new();
    let guard = AccessGuard::new("carl", tenant_id, Some(Role::Customer));

    let result = guard.require_permission(Permission::ManageEmployees);
    match result {
        Err(AppError::Forbidden(message)) => {
            assert!(message.contains("'carl'"));
            assert!(message.contains("manage_employees"));
            assert!(message.contains(&tenant_id.to_string()));
        }
        other => panic!("expected forbidden, got {other:?}"),
    }
}

#[test]
fn require_all_permissions_lists_every_missing_grant() {
    let guard = AccessGuard::new("sam", TenantId::new(), Some(Role::Salesperson));

    let result = guard.require_all_permissions(&[
        Permission::ViewLeads,
        Permission::DeleteVehicles,
        Permission::ViewFinancialReports,
    ]);
    match result {
        Err(AppError::Forbidden(message)) => {
            assert!(message.contains("delete_vehicles, view_financial_reports"));
            assert!(!message.contains("view_leads"));
        }
        other => panic!("expected forbidden, got {other:?}"),
    }

    assert!(guard.require_all_permissions(&[]).is_ok());
}

#[test]
fn require_any_permission_needs_one_grant() {
    let guard = AccessGuard::new("dee", TenantId::new(), Some(Role::Dealer));

    assert!(
        guard
            .require_any_permission(&[Permission::ManageTenants, Permission::PublishVehicles])
            .is_ok()
    );
    assert!(is_forbidden(
        &guard.require_any_permission(&[Permission::ManageTenants])
    ));
    assert!(is_forbidden(&guard.require_any_permission(&[])));
}

#[test]
fn require_minimum_role_is_inclusive() {
    let guard = AccessGuard::new("sue", TenantId::new(), Some(Role::SalesManager));

    assert!(guard.require_minimum_role(Role::SalesManager).is_ok());
    assert!(guard.require_minimum_role(Role::Salesperson).is_ok());
    assert!(is_forbidden(&guard.require_minimum_role(Role::BranchManager)));
}

#[test]
fn manager_can_manage_subordinate_in_same_tenant() {
    let tenant_id = TenantId::new();
    let manager = AccessGuard::for_identity(&identity("maria", tenant_id, "branch_manager"));

    assert!(
        manager
            .require_manage_user(&identity("sam", tenant_id, "salesperson"))
            .is_ok()
    );
    assert!(manager.can_manage(Role::Salesperson));
}

#[test]
fn peers_cannot_manage_each_other() {
    let tenant_id = TenantId::new();
    let manager = AccessGuard::for_identity(&identity("maria", tenant_id, "branch_manager"));

    assert!(is_forbidden(
        &manager.require_manage_user(&identity("mark", tenant_id, "branch_manager"))
    ));
}

#[test]
fn subordinate_cannot_manage_superior() {
    let tenant_id = TenantId::new();
    let salesperson = AccessGuard::for_identity(&identity("sam", tenant_id, "salesperson"));

    assert!(is_forbidden(
        &salesperson.require_manage_user(&identity("maria", tenant_id, "branch_manager"))
    ));
}

#[test]
fn cross_tenant_management_requires_super_admin() {
    let home = TenantId::new();
    let other = TenantId::new();
    let target = identity("sam", other, "salesperson");

    let corporate_admin = AccessGuard::new("ana", home, Some(Role::CorporateAdmin));
    assert!(is_forbidden(&corporate_admin.require_manage_user(&target)));

    let super_admin = AccessGuard::new("root", home, Some(Role::SuperAdmin));
    assert!(super_admin.require_manage_user(&target).is_ok());
}

#[test]
fn unknown_target_role_ranks_lowest() {
    let tenant_id = TenantId::new();
    let viewer = AccessGuard::new("val", tenant_id, Some(Role::Viewer));
    let unknown = AccessGuard::new("nobody", tenant_id, None);
    let target = identity("ghost", tenant_id, "legacy_role");

    assert!(viewer.require_manage_user(&target).is_ok());
    assert!(is_forbidden(&unknown.require_manage_user(&target)));
}

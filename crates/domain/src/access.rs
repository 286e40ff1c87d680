//! Role-based permission checks.
//!
//! Every function here is a pure lookup over two static tables: the
//! permissions granted to each role and the rank of each role in the
//! organisational hierarchy. Callers pass either a [`Role`] or an
//! `Option<Role>`; `None` stands for a role tag that could not be resolved
//! and is treated fail-closed (no permissions, rank 0).

use std::collections::BTreeSet;

use crate::{Permission, Role};

/// Rank reported for a role that could not be resolved.
pub const UNMAPPED_ROLE_RANK: u8 = 0;

const CORPORATE_ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::ManageBranches,
    Permission::ManageEmployees,
    Permission::ViewEmployees,
    Permission::ManageRoles,
    Permission::CreateVehicles,
    Permission::EditVehicles,
    Permission::DeleteVehicles,
    Permission::PublishVehicles,
    Permission::ViewVehicles,
    Permission::ManageInventory,
    Permission::ManageLeads,
    Permission::ViewLeads,
    Permission::ManageSales,
    Permission::ViewSales,
    Permission::ViewFinancialReports,
    Permission::ViewAnalytics,
    Permission::ManageSettings,
    Permission::ViewAuditLogs,
    Permission::ManageSupportTickets,
    Permission::ViewSupportTickets,
    Permission::ContactSellers,
    Permission::SaveFavorites,
    Permission::WriteReviews,
    Permission::RequestFinancing,
];

const BRANCH_MANAGER_PERMISSIONS: &[Permission] = &[
    Permission::ManageEmployees,
    Permission::ViewEmployees,
    Permission::CreateVehicles,
    Permission::EditVehicles,
    Permission::DeleteVehicles,
    Permission::PublishVehicles,
    Permission::ViewVehicles,
    Permission::ManageInventory,
    Permission::ManageLeads,
    Permission::ViewLeads,
    Permission::ManageSales,
    Permission::ViewSales,
    Permission::ViewFinancialReports,
    Permission::ViewAnalytics,
    Permission::ViewSupportTickets,
];

const SALES_MANAGER_PERMISSIONS: &[Permission] = &[
    Permission::ViewEmployees,
    Permission::CreateVehicles,
    Permission::EditVehicles,
    Permission::PublishVehicles,
    Permission::ViewVehicles,
    Permission::ManageInventory,
    Permission::ManageLeads,
    Permission::ViewLeads,
    Permission::ManageSales,
    Permission::ViewSales,
    Permission::ViewAnalytics,
];

const SUPPORT_AGENT_PERMISSIONS: &[Permission] = &[
    Permission::ViewEmployees,
    Permission::ViewVehicles,
    Permission::ViewLeads,
    Permission::ViewSales,
    Permission::ManageSupportTickets,
    Permission::ViewSupportTickets,
];

const SALESPERSON_PERMISSIONS: &[Permission] = &[
    Permission::CreateVehicles,
    Permission::EditVehicles,
    Permission::ViewVehicles,
    Permission::ManageLeads,
    Permission::ViewLeads,
    Permission::ViewSales,
];

const DEALER_PERMISSIONS: &[Permission] = &[
    Permission::CreateVehicles,
    Permission::EditVehicles,
    Permission::DeleteVehicles,
    Permission::PublishVehicles,
    Permission::ViewVehicles,
    Permission::ManageInventory,
    Permission::ManageLeads,
    Permission::ViewLeads,
    Permission::ViewSales,
    Permission::ViewAnalytics,
];

const INDEPENDENT_SELLER_PERMISSIONS: &[Permission] = &[
    Permission::CreateVehicles,
    Permission::EditVehicles,
    Permission::DeleteVehicles,
    Permission::PublishVehicles,
    Permission::ViewVehicles,
    Permission::ViewLeads,
];

const PREMIUM_CUSTOMER_PERMISSIONS: &[Permission] = &[
    Permission::ViewVehicles,
    Permission::ContactSellers,
    Permission::SaveFavorites,
    Permission::WriteReviews,
    Permission::RequestFinancing,
];

const CUSTOMER_PERMISSIONS: &[Permission] = &[
    Permission::ViewVehicles,
    Permission::ContactSellers,
    Permission::SaveFavorites,
    Permission::WriteReviews,
];

const VIEWER_PERMISSIONS: &[Permission] = &[Permission::ViewVehicles];

fn granted_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::SuperAdmin => Permission::all(),
        Role::CorporateAdmin => CORPORATE_ADMIN_PERMISSIONS,
        Role::BranchManager => BRANCH_MANAGER_PERMISSIONS,
        Role::SalesManager => SALES_MANAGER_PERMISSIONS,
        Role::SupportAgent => SUPPORT_AGENT_PERMISSIONS,
        Role::Salesperson => SALESPERSON_PERMISSIONS,
        Role::Dealer => DEALER_PERMISSIONS,
        Role::IndependentSeller => INDEPENDENT_SELLER_PERMISSIONS,
        Role::PremiumCustomer => PREMIUM_CUSTOMER_PERMISSIONS,
        Role::Customer => CUSTOMER_PERMISSIONS,
        Role::Viewer => VIEWER_PERMISSIONS,
    }
}

// Ranks must stay pairwise distinct and above UNMAPPED_ROLE_RANK.
fn hierarchy_rank(role: Role) -> u8 {
    match role {
        Role::SuperAdmin => 100,
        Role::CorporateAdmin => 90,
        Role::BranchManager => 80,
        Role::SalesManager => 70,
        Role::SupportAgent => 60,
        Role::Salesperson => 50,
        Role::Dealer => 40,
        Role::IndependentSeller => 30,
        Role::PremiumCustomer => 20,
        Role::Customer => 10,
        Role::Viewer => 5,
    }
}

/// Returns the hierarchy rank of a role, or [`UNMAPPED_ROLE_RANK`] when unresolved.
#[must_use]
pub fn role_rank(role: impl Into<Option<Role>>) -> u8 {
    role.into().map(hierarchy_rank).unwrap_or(UNMAPPED_ROLE_RANK)
}

/// Returns whether the role is granted the permission.
///
/// An unresolved role has no permissions.
#[must_use]
pub fn has_permission(role: impl Into<Option<Role>>, permission: Permission) -> bool {
    role.into()
        .is_some_and(|role| granted_permissions(role).contains(&permission))
}

/// Returns whether the role is granted every listed permission.
///
/// An empty list is always satisfied.
#[must_use]
pub fn has_all_permissions(role: impl Into<Option<Role>>, permissions: &[Permission]) -> bool {
    let role = role.into();
    permissions
        .iter()
        .all(|permission| has_permission(role, *permission))
}

/// Returns whether the role is granted at least one listed permission.
///
/// An empty list is never satisfied.
#[must_use]
pub fn has_any_permission(role: impl Into<Option<Role>>, permissions: &[Permission]) -> bool {
    let role = role.into();
    permissions
        .iter()
        .any(|permission| has_permission(role, *permission))
}

/// Returns whether the role ranks at or above `required_role`.
#[must_use]
pub fn has_minimum_role(
    role: impl Into<Option<Role>>,
    required_role: impl Into<Option<Role>>,
) -> bool {
    role_rank(role) >= role_rank(required_role)
}

/// Returns whether `manager_role` may manage users holding `target_role`.
///
/// Management requires a strictly higher rank, so peers never manage each
/// other and no role manages itself.
#[must_use]
pub fn can_manage_user(
    manager_role: impl Into<Option<Role>>,
    target_role: impl Into<Option<Role>>,
) -> bool {
    role_rank(manager_role) > role_rank(target_role)
}

/// Returns an owned copy of the permissions granted to the role.
#[must_use]
pub fn role_permissions(role: impl Into<Option<Role>>) -> BTreeSet<Permission> {
    role.into()
        .map(|role| granted_permissions(role).iter().copied().collect())
        .unwrap_or_default()
}

/// Returns every role granted the permission, in role declaration order.
#[must_use]
pub fn roles_with_permission(permission: Permission) -> Vec<Role> {
    Role::all()
        .iter()
        .copied()
        .filter(|role| has_permission(*role, permission))
        .collect()
}

/// Returns every role the manager may manage, in role declaration order.
#[must_use]
pub fn manageable_roles(manager_role: impl Into<Option<Role>>) -> Vec<Role> {
    let manager_role = manager_role.into();
    Role::all()
        .iter()
        .copied()
        .filter(|role| can_manage_user(manager_role, *role))
        .collect()
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use motorhub_core::AppError;
use serde::{Deserialize, Serialize};

/// Capabilities granted to marketplace roles.
///
/// Declaration order is the ordering used for permission sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Allows creating and suspending tenant organisations.
    ManageTenants,
    /// Allows creating and closing branches inside a tenant.
    ManageBranches,
    /// Allows hiring, editing and removing employees.
    ManageEmployees,
    /// Allows reading the employee directory.
    ViewEmployees,
    /// Allows changing the role assigned to a user.
    ManageRoles,
    /// Allows creating vehicle listings.
    CreateVehicles,
    /// Allows editing vehicle listings.
    EditVehicles,
    /// Allows deleting vehicle listings.
    DeleteVehicles,
    /// Allows publishing listings to the public storefront.
    PublishVehicles,
    /// Allows browsing vehicle listings.
    ViewVehicles,
    /// Allows adjusting stock levels and vehicle locations.
    ManageInventory,
    /// Allows assigning and updating sales leads.
    ManageLeads,
    /// Allows reading sales leads.
    ViewLeads,
    /// Allows recording and closing sales.
    ManageSales,
    /// Allows reading sales records.
    ViewSales,
    /// Allows reading revenue and margin reports.
    ViewFinancialReports,
    /// Allows reading marketplace analytics dashboards.
    ViewAnalytics,
    /// Allows changing tenant settings.
    ManageSettings,
    /// Allows reading audit log entries.
    ViewAuditLogs,
    /// Allows answering and closing support tickets.
    ManageSupportTickets,
    /// Allows reading support tickets.
    ViewSupportTickets,
    /// Allows messaging sellers about a listing.
    ContactSellers,
    /// Allows bookmarking listings.
    SaveFavorites,
    /// Allows reviewing sellers after a purchase.
    WriteReviews,
    /// Allows submitting financing applications.
    RequestFinancing,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageTenants => "manage_tenants",
            Self::ManageBranches => "manage_branches",
            Self::ManageEmployees => "manage_employees",
            Self::ViewEmployees => "view_employees",
            Self::ManageRoles => "manage_roles",
            Self::CreateVehicles => "create_vehicles",
            Self::EditVehicles => "edit_vehicles",
            Self::DeleteVehicles => "delete_vehicles",
            Self::PublishVehicles => "publish_vehicles",
            Self::ViewVehicles => "view_vehicles",
            Self::ManageInventory => "manage_inventory",
            Self::ManageLeads => "manage_leads",
            Self::ViewLeads => "view_leads",
            Self::ManageSales => "manage_sales",
            Self::ViewSales => "view_sales",
            Self::ViewFinancialReports => "view_financial_reports",
            Self::ViewAnalytics => "view_analytics",
            Self::ManageSettings => "manage_settings",
            Self::ViewAuditLogs => "view_audit_logs",
            Self::ManageSupportTickets => "manage_support_tickets",
            Self::ViewSupportTickets => "view_support_tickets",
            Self::ContactSellers => "contact_sellers",
            Self::SaveFavorites => "save_favorites",
            Self::WriteReviews => "write_reviews",
            Self::RequestFinancing => "request_financing",
        }
    }

    /// Returns a human-readable name for admin screens.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ManageTenants => "Manage tenants",
            Self::ManageBranches => "Manage branches",
            Self::ManageEmployees => "Manage employees",
            Self::ViewEmployees => "View employees",
            Self::ManageRoles => "Manage roles",
            Self::CreateVehicles => "Create vehicles",
            Self::EditVehicles => "Edit vehicles",
            Self::DeleteVehicles => "Delete vehicles",
            Self::PublishVehicles => "Publish vehicles",
            Self::ViewVehicles => "View vehicles",
            Self::ManageInventory => "Manage inventory",
            Self::ManageLeads => "Manage leads",
            Self::ViewLeads => "View leads",
            Self::ManageSales => "Manage sales",
            Self::ViewSales => "View sales",
            Self::ViewFinancialReports => "View financial reports",
            Self::ViewAnalytics => "View analytics",
            Self::ManageSettings => "Manage settings",
            Self::ViewAuditLogs => "View audit logs",
            Self::ManageSupportTickets => "Manage support tickets",
            Self::ViewSupportTickets => "View support tickets",
            Self::ContactSellers => "Contact sellers",
            Self::SaveFavorites => "Save favorites",
            Self::WriteReviews => "Write reviews",
            Self::RequestFinancing => "Request financing",
        }
    }

    /// Returns all known permissions in declaration order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ManageTenants,
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

        ALL
    }
}

impl Display for Permission {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown permission value '{value}'")))
    }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use motorhub_core::AppError;
use serde::{Deserialize, Serialize};

/// Position of a user in a tenant's organisational hierarchy.
///
/// A user holds exactly one role at a time. Authority between roles is
/// ordered by rank (see [`crate::access::role_rank`]), not by declaration
/// order, so `Role` intentionally does not implement `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform operator with access to every tenant.
    SuperAdmin,
    /// Administrator of one dealership group.
    CorporateAdmin,
    /// Manager of a single branch.
    BranchManager,
    /// Lead of a branch sales team.
    SalesManager,
    /// Marketplace support staff.
    SupportAgent,
    /// Branch employee selling vehicles.
    Salesperson,
    /// Dealer account listing stock on the marketplace.
    Dealer,
    /// Private seller listing their own vehicles.
    IndependentSeller,
    /// Buyer on the paid customer tier.
    PremiumCustomer,
    /// Registered buyer.
    Customer,
    /// Read-only browsing account.
    Viewer,
}

impl Role {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::CorporateAdmin => "corporate_admin",
            Self::BranchManager => "branch_manager",
            Self::SalesManager => "sales_manager",
            Self::SupportAgent => "support_agent",
            Self::Salesperson => "salesperson",
            Self::Dealer => "dealer",
            Self::IndependentSeller => "independent_seller",
            Self::PremiumCustomer => "premium_customer",
            Self::Customer => "customer",
            Self::Viewer => "viewer",
        }
    }

    /// Returns a human-readable name for admin screens.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::CorporateAdmin => "Corporate Admin",
            Self::BranchManager => "Branch Manager",
            Self::SalesManager => "Sales Manager",
            Self::SupportAgent => "Support Agent",
            Self::Salesperson => "Salesperson",
            Self::Dealer => "Dealer",
            Self::IndependentSeller => "Independent Seller",
            Self::PremiumCustomer => "Premium Customer",
            Self::Customer => "Customer",
            Self::Viewer => "Viewer",
        }
    }

    /// Returns all known roles in declaration order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::SuperAdmin,
            Role::CorporateAdmin,
            Role::BranchManager,
            Role::SalesManager,
            Role::SupportAgent,
            Role::Salesperson,
            Role::Dealer,
            Role::IndependentSeller,
            Role::PremiumCustomer,
            Role::Customer,
            Role::Viewer,
        ];

        ALL
    }

    /// Parses a profile role tag, returning `None` for anything unrecognised.
    ///
    /// Surrounding whitespace is ignored; matching is otherwise exact.
    #[must_use]
    pub fn parse_tag(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all().iter().copied().find(|role| role.as_str() == value)
    }

    /// Returns whether the role belongs to platform or dealership staff.
    #[must_use]
    pub fn is_staff(&self) -> bool {
        matches!(
            self,
            Self::SuperAdmin
                | Self::CorporateAdmin
                | Self::BranchManager
                | Self::SalesManager
                | Self::SupportAgent
                | Self::Salesperson
        )
    }

    /// Returns whether the role lists vehicles on its own account.
    #[must_use]
    pub fn is_seller(&self) -> bool {
        matches!(self, Self::Dealer | Self::IndependentSeller)
    }

    /// Returns whether the role is one of the buyer tiers.
    #[must_use]
    pub fn is_customer(&self) -> bool {
        matches!(self, Self::PremiumCustomer | Self::Customer)
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown role value '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Role;

    #[test]
    fn role_roundtrip_storage_value() {
        for role in Role::all() {
            let restored = Role::from_str(role.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(Role::Viewer), *role);
        }
    }

    #[test]
    fn strict_parse_rejects_padding_and_unknown_tags() {
        assert!(Role::from_str(" dealer").is_err());
        assert!(Role::from_str("owner").is_err());
    }

    #[test]
    fn tag_parse_is_fail_closed() {
        assert_eq!(Role::parse_tag("  branch_manager\n"), Some(Role::BranchManager));
        assert_eq!(Role::parse_tag("Branch_Manager"), None);
        assert_eq!(Role::parse_tag(""), None);
        assert_eq!(Role::parse_tag("root"), None);
    }

    #[test]
    fn serde_name_matches_storage_value() {
        for role in Role::all() {
            let encoded = serde_json::to_string(role).unwrap_or_else(|_| panic!("test"));
            assert_eq!(encoded, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn classification_groups_do_not_overlap() {
        for role in Role::all() {
            let groups = [role.is_staff(), role.is_seller(), role.is_customer()];
            assert!(groups.iter().filter(|flag| **flag).count() <= 1, "{role}");
        }
        assert!(!Role::Viewer.is_staff());
        assert!(!Role::Viewer.is_customer());
        assert!(Role::PremiumCustomer.is_customer());
        assert!(Role::Dealer.is_seller());
    }
}

use serde::{Deserialize, Serialize};

use crate::TenantId;

/// User profile attached to the authenticated session.
///
/// The role arrives as the raw tag stored by the external profile store.
/// It is kept unparsed here so that unknown tags can be handled fail-closed
/// by the access layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    subject: String,
    display_name: String,
    email: Option<String>,
    tenant_id: TenantId,
    role_tag: Option<String>,
}

impl UserIdentity {
    /// Creates a user identity from authentication and tenancy data.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        display_name: impl Into<String>,
        email: Option<String>,
        tenant_id: TenantId,
    ) -> Self {
        Self {
            subject: subject.into(),
            display_name: display_name.into(),
            email,
            tenant_id,
            role_tag: None,
        }
    }

    /// Returns the identity with the profile role tag attached.
    #[must_use]
    pub fn with_role_tag(mut self, role_tag: impl Into<String>) -> Self {
        self.role_tag = Some(role_tag.into());
        self
    }

    /// Returns the stable subject claim from the identity provider.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Returns the display name for the current user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the email, if the provider returned one.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the tenant linked to the identity.
    #[must_use]
    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    /// Returns the raw role tag from the profile, if one is set.
    #[must_use]
    pub fn role_tag(&self) -> Option<&str> {
        self.role_tag.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::UserIdentity;
    use crate::TenantId;

    #[test]
    fn identity_without_role_tag_reports_none() {
        let identity = UserIdentity::new("alice", "Alice", None, TenantId::new());
        assert_eq!(identity.role_tag(), None);
    }

    #[test]
    fn role_tag_is_kept_verbatim() {
        let identity = UserIdentity::new(
            "bob",
            "Bob",
            Some("bob@dealer.example".to_owned()),
            TenantId::new(),
        )
        .with_role_tag(" Dealer ");

        assert_eq!(identity.role_tag(), Some(" Dealer "));
        assert_eq!(identity.email(), Some("bob@dealer.example"));
    }
}

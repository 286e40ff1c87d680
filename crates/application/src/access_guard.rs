use motorhub_core::{AppError, AppResult, TenantId, UserIdentity};
use motorhub_domain::{Permission, Role, access};
use tracing::{debug, warn};

/// Session-scoped authorization guard used before data-mutating requests.
///
/// The guard holds the role resolved from the session profile. A missing or
/// unrecognised role tag resolves to no role, which every check denies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGuard {
    subject: String,
    tenant_id: TenantId,
    role: Option<Role>,
}

impl AccessGuard {
    /// Creates a guard for a subject whose role is already resolved.
    #[must_use]
    pub fn new(subject: impl Into<String>, tenant_id: TenantId, role: Option<Role>) -> Self {
        Self {
            subject: subject.into(),
            tenant_id,
            role,
        }
    }

    /// Creates a guard from the authenticated session profile.
    #[must_use]
    pub fn for_identity(identity: &UserIdentity) -> Self {
        Self::new(
            identity.subject(),
            identity.tenant_id(),
            resolve_identity_role(identity),
        )
    }

    /// Returns the subject the guard was built for.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Returns the tenant the guard was built for.
    #[must_use]
    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    /// Returns the resolved role, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns whether the subject holds the permission.
    #[must_use]
    pub fn can(&self, permission: Permission) -> bool {
        access::has_permission(self.role, permission)
    }

    /// Returns whether the subject holds every listed permission.
    #[must_use]
    pub fn can_all(&self, permissions: &[Permission]) -> bool {
        access::has_all_permissions(self.role, permissions)
    }

    /// Returns whether the subject holds at least one listed permission.
    #[must_use]
    pub fn can_any(&self, permissions: &[Permission]) -> bool {
        access::has_any_permission(self.role, permissions)
    }

    /// Returns whether the subject ranks at or above the role.
    #[must_use]
    pub fn is_at_least(&self, required_role: Role) -> bool {
        access::has_minimum_role(self.role, required_role)
    }

    /// Returns whether the subject may manage users holding the role.
    #[must_use]
    pub fn can_manage(&self, target_role: Role) -> bool {
        access::can_manage_user(self.role, target_role)
    }

    /// Ensures the subject holds the permission.
    pub fn require_permission(&self, permission: Permission) -> AppResult<()> {
        if self.can(permission) {
            return Ok(());
        }

        Err(self.deny(format!("is missing permission '{permission}'")))
    }

    /// Ensures the subject holds every listed permission.
    pub fn require_all_permissions(&self, permissions: &[Permission]) -> AppResult<()> {
        let missing: Vec<&str> = permissions
            .iter()
            .filter(|permission| !self.can(**permission))
            .map(Permission::as_str)
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        Err(self.deny(format!("is missing permissions [{}]", missing.join(", "))))
    }

    /// Ensures the subject holds at least one listed permission.
    pub fn require_any_permission(&self, permissions: &[Permission]) -> AppResult<()> {
        if self.can_any(permissions) {
            return Ok(());
        }

        let requested: Vec<&str> = permissions.iter().map(Permission::as_str).collect();
        Err(self.deny(format!(
            "holds none of the permissions [{}]",
            requested.join(", ")
        )))
    }

    /// Ensures the subject ranks at or above the role.
    pub fn require_minimum_role(&self, required_role: Role) -> AppResult<()> {
        if self.is_at_least(required_role) {
            return Ok(());
        }

        Err(self.deny(format!("ranks below role '{required_role}'")))
    }

    /// Ensures the subject may manage the target user.
    ///
    /// Targets outside the subject's tenant are only manageable by a super
    /// admin. The target's role tag is resolved the same way as the
    /// subject's, so an unrecognised target tag ranks lowest.
    pub fn require_manage_user(&self, target: &UserIdentity) -> AppResult<()> {
        if target.tenant_id() != self.tenant_id && self.role != Some(Role::SuperAdmin) {
            return Err(self.deny(format!(
                "cannot manage subject '{}' in tenant '{}'",
                target.subject(),
                target.tenant_id()
            )));
        }

        let target_role = resolve_identity_role(target);
        if access::can_manage_user(self.role, target_role) {
            return Ok(());
        }

        Err(self.deny(format!(
            "does not outrank subject '{}' with role '{}'",
            target.subject(),
            target_role.map(|role| role.as_str()).unwrap_or("unknown")
        )))
    }

    fn deny(&self, requirement: String) -> AppError {
        debug!(
            subject = %self.subject,
            tenant_id = %self.tenant_id,
            role = self.role.map(|role| role.as_str()).unwrap_or("none"),
            requirement = %requirement,
            "access denied"
        );

        AppError::Forbidden(format!(
            "subject '{}' {requirement} in tenant '{}'",
            self.subject, self.tenant_id
        ))
    }
}

fn resolve_identity_role(identity: &UserIdentity) -> Option<Role> {
    let role_tag = identity.role_tag()?;
    let role = Role::parse_tag(role_tag);
    if role.is_none() {
        warn!(
            subject = %identity.subject(),
            tenant_id = %identity.tenant_id(),
            role_tag = %role_tag,
            "unrecognised role tag on session profile, denying all permissions"
        );
    }

    role
}

#[cfg(test)]
mod tests;

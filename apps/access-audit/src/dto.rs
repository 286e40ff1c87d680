use motorhub_domain::{Permission, Role, access};
use serde::Serialize;
use ts_rs::TS;

/// Representation of one permission tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/access-types/src/generated/permission-response.ts"
)]
pub struct PermissionResponse {
    pub permission: String,
    pub label: String,
}

/// Access granted to one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/access-types/src/generated/role-access-response.ts"
)]
pub struct RoleAccessResponse {
    pub role: String,
    pub label: String,
    pub group: String,
    pub rank: u8,
    pub permissions: Vec<String>,
    pub manageable_roles: Vec<String>,
}

/// Role and permission matrix consumed by frontend guards and audit reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/access-types/src/generated/permission-matrix-response.ts"
)]
pub struct PermissionMatrixResponse {
    pub permissions: Vec<PermissionResponse>,
    pub roles: Vec<RoleAccessResponse>,
}

impl PermissionMatrixResponse {
    /// Builds the matrix for one role, or for every role when `role` is `None`.
    pub fn build(role: Option<Role>) -> Self {
        let roles = match role {
            Some(role) => vec![RoleAccessResponse::from(role)],
            None => Role::all()
                .iter()
                .copied()
                .map(RoleAccessResponse::from)
                .collect(),
        };

        Self {
            permissions: Permission::all()
                .iter()
                .copied()
                .map(PermissionResponse::from)
                .collect(),
            roles,
        }
    }
}

impl From<Permission> for PermissionResponse {
    fn from(value: Permission) -> Self {
        Self {
            permission: value.as_str().to_owned(),
            label: value.label().to_owned(),
        }
    }
}

impl From<Role> for RoleAccessResponse {
    fn from(value: Role) -> Self {
        Self {
            role: value.as_str().to_owned(),
            label: value.label().to_owned(),
            group: role_group(value).to_owned(),
            rank: access::role_rank(value),
            permissions: access::role_permissions(value)
                .into_iter()
                .map(|permission| permission.as_str().to_owned())
                .collect(),
            manageable_roles: access::manageable_roles(value)
                .into_iter()
                .map(|role| role.as_str().to_owned())
                .collect(),
        }
    }
}

fn role_group(role: Role) -> &'static str {
    if role.is_staff() {
        "staff"
    } else if role.is_seller() {
        "seller"
    } else if role.is_customer() {
        "customer"
    } else {
        "guest"
    }
}

use std::fmt::Write;

use crate::dto::PermissionMatrixResponse;

const GRANTED_MARK: &str = "x";
const DENIED_MARK: &str = ".";

/// Renders the matrix as a fixed-width grid, one row per permission and one
/// column per role, followed by the rank and management summary of each role.
pub fn render_table(matrix: &PermissionMatrixResponse) -> String {
    let permission_width = matrix
        .permissions
        .iter()
        .map(|permission| permission.permission.len())
        .max()
        .unwrap_or(0)
        .max("permission".len());

    let mut output = String::new();
    let _ = write!(output, "{:<permission_width$}", "permission");
    for role in &matrix.roles {
        let _ = write!(output, "  {}", role.role);
    }
    output.push('\n');

    for permission in &matrix.permissions {
        let _ = write!(output, "{:<permission_width$}", permission.permission);
        for role in &matrix.roles {
            let mark = if role.permissions.contains(&permission.permission) {
                GRANTED_MARK
            } else {
                DENIED_MARK
            };
            let _ = write!(output, "  {mark:^width$}", width = role.role.len());
        }
        output.push('\n');
    }

    output.push('\n');
    for role in &matrix.roles {
        let manages = if role.manageable_roles.is_empty() {
            "-".to_owned()
        } else {
            role.manageable_roles.join(", ")
        };
        let _ = writeln!(
            output,
            "{} ({}) rank {} manages: {manages}",
            role.role, role.label, role.rank
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use motorhub_domain::Role;

    use super::render_table;
    use crate::dto::PermissionMatrixResponse;

    #[test]
    fn table_marks_granted_cells() {
        let output = render_table(&PermissionMatrixResponse::build(Some(Role::Viewer)));
        let rows: Vec<&str> = output.lines().collect();

        assert!(rows[0].starts_with("permission"));
        assert!(rows[0].ends_with("viewer"));

        let view_row = rows
            .iter()
            .find(|row| row.starts_with("view_vehicles "))
            .unwrap_or_else(|| panic!("missing view_vehicles row"));
        assert!(view_row.trim_end().ends_with('x'));

        let tenants_row = rows
            .iter()
            .find(|row| row.starts_with("manage_tenants "))
            .unwrap_or_else(|| panic!("missing manage_tenants row"));
        assert!(tenants_row.trim_end().ends_with('.'));
    }

    #[test]
    fn summary_lists_rank_and_managed_roles() {
        let output = render_table(&PermissionMatrixResponse::build(Some(Role::PremiumCustomer)));

        assert!(output.contains("premium_customer (Premium Customer) rank 20 manages: customer, viewer"));
    }

    #[test]
    fn summary_marks_roles_without_subordinates() {
        let output = render_table(&PermissionMatrixResponse::build(Some(Role::Viewer)));

        assert!(output.contains("viewer (Viewer) rank 5 manages: -"));
    }
}

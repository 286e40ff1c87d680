//! Motorhub access audit: renders the role and permission matrix.

#![forbid(unsafe_code)]

mod audit_config;
mod dto;
mod render;

use std::io::Write;

use motorhub_core::AppError;
use tracing::info;

use crate::audit_config::{AccessAuditConfig, MatrixFormat, init_tracing};
use crate::dto::PermissionMatrixResponse;

fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AccessAuditConfig::load()?;
    let matrix = PermissionMatrixResponse::build(config.role);

    info!(
        format = config.format.as_str(),
        role = config.role.map(|role| role.as_str()).unwrap_or("all"),
        role_count = matrix.roles.len(),
        "rendering permission matrix"
    );

    let output = match config.format {
        MatrixFormat::Table => render::render_table(&matrix),
        MatrixFormat::Json => serde_json::to_string_pretty(&matrix).map_err(|error| {
            AppError::Internal(format!("failed to encode permission matrix: {error}"))
        })?,
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")
        .map_err(|error| AppError::Internal(format!("failed to write output: {error}")))?;

    Ok(())
}

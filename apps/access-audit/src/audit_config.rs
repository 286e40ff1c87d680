use std::env;
use std::str::FromStr;

use motorhub_core::AppError;
use motorhub_domain::Role;
use tracing_subscriber::EnvFilter;

/// Output format of the rendered permission matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    Table,
    Json,
}

impl MatrixFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessAuditConfig {
    pub format: MatrixFormat,
    pub role: Option<Role>,
}

impl AccessAuditConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let format = match lookup("ACCESS_AUDIT_FORMAT")
            .unwrap_or_else(|| "table".to_owned())
            .trim()
        {
            "table" => MatrixFormat::Table,
            "json" => MatrixFormat::Json,
            other => {
                return Err(AppError::Validation(format!(
                    "ACCESS_AUDIT_FORMAT must be either 'table' or 'json', got '{other}'"
                )));
            }
        };

        let role = lookup("ACCESS_AUDIT_ROLE")
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                Role::from_str(value.trim()).map_err(|error| {
                    AppError::Validation(format!("invalid ACCESS_AUDIT_ROLE: {error}"))
                })
            })
            .transpose()?;

        Ok(Self { format, role })
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

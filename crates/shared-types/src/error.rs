use std::collections::BTreeMap;
use std::fmt;

/// Categorization of dashboard errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppErrorKind {
    /// `config.toml` could not be parsed or failed validation.
    InvalidConfig,
    /// A navigation menu description is malformed.
    InvalidNavigation,
    /// A lookup (nav path, region, city) found nothing.
    NotFound,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            AppErrorKind::InvalidNavigation => write!(f, "InvalidNavigation"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
        }
    }
}

/// Structured error shared by the dashboard crates.
///
/// Nothing in the presentation layer is fatal: callers log the error and fall
/// back to defaults. `field_errors` carries per-key detail for config
/// validation (`"stats.tick_ms" -> "must be greater than zero"`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    pub field_errors: BTreeMap<String, String>,
}

impl AppError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidConfig,
            message: message.into(),
            field_errors: BTreeMap::new(),
        }
    }

    pub fn invalid_navigation(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidNavigation,
            message: message.into(),
            field_errors: BTreeMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: BTreeMap::new(),
        }
    }

    /// Config validation failure with one entry per offending key.
    pub fn config_fields(message: impl Into<String>, field_errors: BTreeMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidConfig,
            message: message.into(),
            field_errors,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        for (field, reason) in &self.field_errors {
            write!(f, "; {field} {reason}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::invalid_config(err.message().to_string())
    }
}

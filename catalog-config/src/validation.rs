use thiserror::Error;

use crate::models::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// Hard configuration errors that prevent startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("database.max_connections must be at least 1")]
    ZeroPoolSize,
    #[error("server.port must not be 0")]
    ZeroPort,
}

/// Check a composed config, failing on unusable values and warning on
/// permissive ones.
pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    if config.database.max_connections == 0 {
        return Err(ConfigGuardRailError::ZeroPoolSize);
    }
    if config.server.port == 0 {
        return Err(ConfigGuardRailError::ZeroPort);
    }

    let mut warnings = ConfigWarnings::default();

    if config.cors.is_wildcard_included() {
        warnings.push_with_hint(
            "CORS allows requests from any origin",
            "Set CORS_ALLOWED_ORIGINS to a comma-separated list of origins",
        );
    }

    if config.database.url.is_none() {
        warnings.push_with_hint(
            "No database URL configured",
            "Set DATABASE_URL or DATABASE_HOST/DATABASE_USER/DATABASE_NAME",
        );
    }

    Ok(warnings)
}

//! Configuration for the catalog service.
//!
//! [`ConfigLoader`] reads an optional `.env`, gathers environment variables,
//! optionally parses a TOML file and composes them into a [`Config`].
//! Environment values win over the file; callers apply CLI overrides on top.

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{
    Config, ConfigMetadata, CorsConfig, DatabaseConfig, ServerConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};

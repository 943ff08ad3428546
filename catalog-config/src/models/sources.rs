use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util::{non_empty_var, parse_bool_var, parse_csv_var, parse_var};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub database: FileDatabaseConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileDatabaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_migrations: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub database_url: Option<String>,
    pub database_url_file: Option<PathBuf>,
    pub database_host: Option<String>,
    pub database_port: Option<u16>,
    pub database_user: Option<String>,
    pub database_name: Option<String>,
    pub database_password: Option<String>,
    pub database_password_file: Option<PathBuf>,
    pub db_max_connections: Option<u32>,
    pub db_run_migrations: Option<bool>,
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var("CATALOG_CONFIG_PATH")
                .map(PathBuf::from),
            server_host: non_empty_var("SERVER_HOST"),
            server_port: parse_var("SERVER_PORT"),
            database_url: std::env::var("DATABASE_URL").ok(),
            database_url_file: non_empty_var("DATABASE_URL_FILE")
                .map(PathBuf::from),
            database_host: std::env::var("DATABASE_HOST").ok(),
            database_port: parse_var("DATABASE_PORT"),
            database_user: std::env::var("DATABASE_USER").ok(),
            database_name: std::env::var("DATABASE_NAME").ok(),
            database_password: std::env::var("DATABASE_PASSWORD").ok(),
            database_password_file: non_empty_var("DATABASE_PASSWORD_FILE")
                .map(PathBuf::from),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS"),
            db_run_migrations: parse_bool_var("DB_RUN_MIGRATIONS"),
            cors_allowed_origins: parse_csv_var("CORS_ALLOWED_ORIGINS"),
        }
    }
}

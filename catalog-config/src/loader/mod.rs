pub mod db_url;
pub mod error;

use std::{fs, path::PathBuf};

use tracing::debug;

use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{
    Config, ConfigMetadata, CorsConfig, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DatabaseConfig, ServerConfig,
};
use crate::validation::{self, ConfigWarnings};

pub use error::ConfigLoadError;

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] =
    ["catalog.toml", "config/catalog.toml"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Skip reading `.env` entirely.
    pub skip_env_file: bool,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.options.skip_env_file = true;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let env_config = EnvConfig::gather();

        let (file_config, config_path) = self.load_file_config(&env_config)?;

        let (config, warnings) = compose_config(
            file_config,
            &env_config,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if self.options.skip_env_file {
            return Ok(false);
        }

        let result = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(|_| ()),
        };

        match result {
            Ok(()) => Ok(true),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // Explicit and env-provided paths must exist; defaults are optional.
        let path = match self
            .options
            .config_path
            .clone()
            .or_else(|| env_config.config_path.clone())
        {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .into_iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(path) => path,
                None => return Ok((None, None)),
            },
        };

        let contents =
            fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
                path: path.clone(),
                source,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| {
                ConfigLoadError::Parse {
                    path: path.clone(),
                    source,
                }
            })?;

        debug!(path = %path.display(), "loaded configuration file");
        Ok((Some(file_config), Some(path)))
    }
}

fn compose_config(
    file_config: Option<FileConfig>,
    env: &EnvConfig,
    metadata: ConfigMetadata,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if metadata.config_path.is_none() {
        warnings.push_with_hint(
            "No catalog.toml detected; using environment variables and defaults",
            "Set CATALOG_CONFIG_PATH or pass --config to use a file",
        );
    }

    let FileConfig {
        server: file_server,
        database: file_database,
        cors: file_cors,
    } = file_config.unwrap_or_default();

    let server = ServerConfig {
        host: env
            .server_host
            .clone()
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
        port: env
            .server_port
            .or(file_server.port)
            .unwrap_or(DEFAULT_SERVER_PORT),
    };

    let database = DatabaseConfig {
        url: db_url::resolve_database_url(env, &file_database)?,
        max_connections: env
            .db_max_connections
            .or(file_database.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        run_migrations: env
            .db_run_migrations
            .or(file_database.run_migrations)
            .unwrap_or(true),
    };

    let cors = env
        .cors_allowed_origins
        .clone()
        .or(file_cors.allowed_origins)
        .filter(|origins| !origins.is_empty())
        .map(|allowed_origins| CorsConfig { allowed_origins })
        .unwrap_or_default();

    let config = Config {
        server,
        database,
        cors,
        metadata,
    };

    warnings.extend(validation::apply_guard_rails(&config)?);

    Ok((config, warnings))
}

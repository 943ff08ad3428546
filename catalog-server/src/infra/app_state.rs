use std::{fmt, sync::Arc};

use anyhow::anyhow;
use catalog_config::Config;
use catalog_core::{AppUnitOfWork, CatalogService, PostgresDatabase};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub postgres: Arc<PostgresDatabase>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("postgres", &self.postgres)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wire the Postgres-backed unit of work into a catalog service.
    pub fn new(
        postgres: PostgresDatabase,
        config: Config,
    ) -> anyhow::Result<Self> {
        let uow = AppUnitOfWork::from_postgres(&postgres).map_err(|err| {
            anyhow!("failed to assemble unit of work: {err}")
        })?;

        Ok(Self {
            catalog: Arc::new(CatalogService::new(Arc::new(uow))),
            postgres: Arc::new(postgres),
            config: Arc::new(config),
        })
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use crate::database::{
    infrastructure::postgres::{
        PostgresCatalogBrandRepository, PostgresCatalogItemRepository,
        PostgresSpecificationRepository,
    },
    ports::{
        catalog_brands::CatalogBrandRepository,
        catalog_items::CatalogItemRepository,
        specifications::SpecificationRepository,
    },
    postgres::PostgresDatabase,
};

/// Aggregates the repository ports consumed by [`crate::services::CatalogService`].
#[derive(Clone)]
pub struct AppUnitOfWork {
    pub catalog_items: Arc<dyn CatalogItemRepository>,
    pub catalog_brands: Arc<dyn CatalogBrandRepository>,
    pub specifications: Arc<dyn SpecificationRepository>,
}

impl fmt::Debug for AppUnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppUnitOfWork")
            .field(
                "catalog_items",
                &type_name_of_val(self.catalog_items.as_ref()),
            )
            .field(
                "catalog_brands",
                &type_name_of_val(self.catalog_brands.as_ref()),
            )
            .field(
                "specifications",
                &type_name_of_val(self.specifications.as_ref()),
            )
            .finish()
    }
}

#[derive(Default)]
pub struct AppUnitOfWorkBuilder {
    catalog_items: Option<Arc<dyn CatalogItemRepository>>,
    catalog_brands: Option<Arc<dyn CatalogBrandRepository>>,
    specifications: Option<Arc<dyn SpecificationRepository>>,
}

impl fmt::Debug for AppUnitOfWorkBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppUnitOfWorkBuilder")
            .field("catalog_items", &self.catalog_items.is_some())
            .field("catalog_brands", &self.catalog_brands.is_some())
            .field("specifications", &self.specifications.is_some())
            .finish()
    }
}

impl AppUnitOfWorkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog_items(
        mut self,
        repo: Arc<dyn CatalogItemRepository>,
    ) -> Self {
        self.catalog_items = Some(repo);
        self
    }

    pub fn with_catalog_brands(
        mut self,
        repo: Arc<dyn CatalogBrandRepository>,
    ) -> Self {
        self.catalog_brands = Some(repo);
        self
    }

    pub fn with_specifications(
        mut self,
        repo: Arc<dyn SpecificationRepository>,
    ) -> Self {
        self.specifications = Some(repo);
        self
    }

    /// Populate the builder with Postgres-backed repository adapters.
    pub fn with_postgres(self, db: &PostgresDatabase) -> Self {
        let pool = db.pool().clone();

        self.with_catalog_items(Arc::new(PostgresCatalogItemRepository::new(
            pool.clone(),
        )))
        .with_catalog_brands(Arc::new(PostgresCatalogBrandRepository::new(
            pool.clone(),
        )))
        .with_specifications(Arc::new(PostgresSpecificationRepository::new(
            pool,
        )))
    }

    /// Build a validated AppUnitOfWork. Returns a string error if any required
    /// repository is missing.
    pub fn build(self) -> Result<AppUnitOfWork, String> {
        Ok(AppUnitOfWork {
            catalog_items: self
                .catalog_items
                .ok_or_else(|| "missing CatalogItemRepository".to_string())?,
            catalog_brands: self
                .catalog_brands
                .ok_or_else(|| "missing CatalogBrandRepository".to_string())?,
            specifications: self.specifications.ok_or_else(|| {
                "missing SpecificationRepository".to_string()
            })?,
        })
    }
}

impl AppUnitOfWork {
    /// Compose all Postgres-backed repositories into a unit of work.
    pub fn from_postgres(db: &PostgresDatabase) -> Result<Self, String> {
        AppUnitOfWorkBuilder::new().with_postgres(db).build()
    }
}

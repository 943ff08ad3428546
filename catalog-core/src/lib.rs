//! # Catalog Core
//!
//! Persistence and application logic for the catalog service.
//!
//! - [`database`]: repository ports and their PostgreSQL adapters
//! - [`application`]: the unit of work bundling those ports
//! - [`services`]: [`CatalogService`], which never propagates repository
//!   errors and reports failure as `None`
//! - [`mapping`]: entity to DTO conversion
//! - [`api`]: versioned route constants
//!
//! ```no_run
//! use std::sync::Arc;
//! use catalog_core::{AppUnitOfWork, CatalogService, PostgresDatabase};
//!
//! async fn first_page() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = PostgresDatabase::connect("postgres://localhost/catalog", 10).await?;
//!     db.migrate().await?;
//!     let uow = AppUnitOfWork::from_postgres(&db)?;
//!     let service = CatalogService::new(Arc::new(uow));
//!     let page = service.get_by_page(10, 0, None).await;
//!     println!("{:?}", page.map(|p| p.count));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod application;
pub mod database;
pub mod error;
pub mod mapping;
pub mod services;

pub use application::{AppUnitOfWork, AppUnitOfWorkBuilder};
pub use database::PostgresDatabase;
pub use error::{CatalogError, Result};
pub use services::CatalogService;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

//! PostgreSQL-backed repository implementations.

pub mod catalog_brands;
pub mod catalog_items;
mod rows;
pub mod specifications;

pub use catalog_brands::PostgresCatalogBrandRepository;
pub use catalog_items::PostgresCatalogItemRepository;
pub use specifications::PostgresSpecificationRepository;

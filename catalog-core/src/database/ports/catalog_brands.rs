use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use catalog_model::{CatalogBrand, PaginatedItems, UpdateBrandRequest};

use crate::error::Result;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogBrandRepository: Send + Sync {
    /// Brands ordered by id.
    async fn get_by_page(
        &self,
        page_index: i32,
        page_size: i32,
    ) -> Result<PaginatedItems<CatalogBrand>>;

    async fn add_brand(&self, brand: String) -> Result<i32>;

    async fn update_brand(&self, request: UpdateBrandRequest)
    -> Result<String>;

    /// Removing a brand also removes every item that references it.
    async fn remove_brand(&self, id: i32) -> Result<String>;
}

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use catalog_model::{
    CatalogItem, CreateItemRequest, PaginatedItems, UpdateItemRequest,
};

use crate::error::Result;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogItemRepository: Send + Sync {
    /// Items ordered by name, optionally restricted to one brand. The total
    /// count covers every matching row, not just the returned page.
    async fn get_by_page(
        &self,
        page_index: i32,
        page_size: i32,
        brand_filter: Option<i32>,
    ) -> Result<PaginatedItems<CatalogItem>>;

    async fn get_by_id(&self, id: i32) -> Result<CatalogItem>;

    async fn add_item(&self, request: CreateItemRequest) -> Result<i32>;

    async fn update_item(&self, request: UpdateItemRequest) -> Result<String>;

    async fn remove_item(&self, id: i32) -> Result<String>;
}

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use catalog_model::{
    CatalogBrandDto, CatalogItemDto, CatalogTypeFilter, CreateItemRequest,
    CreateSpecificationRequest, PaginatedItemsResponse, UpdateBrandRequest,
    UpdateItemRequest, UpdateSpecificationRequest,
};
use tracing::{Instrument, error, info_span};

use crate::application::AppUnitOfWork;
use crate::error::Result;
use crate::mapping::IntoDto;

/// Catalog use cases.
///
/// Every operation runs through [`CatalogService::execute_safe`], so callers
/// never see a repository error: failures are logged and reported as `None`.
#[derive(Debug, Clone)]
pub struct CatalogService {
    uow: Arc<AppUnitOfWork>,
}

impl CatalogService {
    pub fn new(uow: Arc<AppUnitOfWork>) -> Self {
        Self { uow }
    }

    pub fn unit_of_work(&self) -> &Arc<AppUnitOfWork> {
        &self.uow
    }

    /// Runs `operation` inside a span named after it, converting any error
    /// into `None` after logging it.
    async fn execute_safe<T, F>(
        &self,
        operation: &'static str,
        fut: F,
    ) -> Option<T>
    where
        F: Future<Output = Result<T>>,
    {
        let span = info_span!("catalog_uow", operation);
        async move {
            match fut.await {
                Ok(value) => Some(value),
                Err(err) => {
                    error!(
                        operation,
                        kind = err.kind(),
                        error = %err,
                        "catalog operation failed"
                    );
                    None
                }
            }
        }
        .instrument(span)
        .await
    }

    pub async fn get_by_page(
        &self,
        page_size: i32,
        page_index: i32,
        filters: Option<HashMap<CatalogTypeFilter, i32>>,
    ) -> Option<PaginatedItemsResponse<CatalogItemDto>> {
        let brand_filter = filters
            .as_ref()
            .and_then(|filters| filters.get(&CatalogTypeFilter::Brand))
            .copied();

        self.execute_safe("get_by_page", async {
            let page = self
                .uow
                .catalog_items
                .get_by_page(page_index, page_size, brand_filter)
                .await?;

            Ok(PaginatedItemsResponse {
                count: page.total_count,
                page_index,
                page_size,
                data: page.data.into_dto(),
            })
        })
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Option<CatalogItemDto> {
        self.execute_safe("get_by_id", async {
            let item = self.uow.catalog_items.get_by_id(id).await?;
            Ok(item.into_dto())
        })
        .await
    }

    pub async fn get_brands(
        &self,
        page_size: i32,
        page_index: i32,
    ) -> Option<PaginatedItemsResponse<CatalogBrandDto>> {
        self.execute_safe("get_brands", async {
            let page = self
                .uow
                .catalog_brands
                .get_by_page(page_index, page_size)
                .await?;

            Ok(PaginatedItemsResponse {
                count: page.total_count,
                page_index,
                page_size,
                data: page.data.into_dto(),
            })
        })
        .await
    }

    pub async fn add_item(&self, request: CreateItemRequest) -> Option<i32> {
        self.execute_safe(
            "add_item",
            self.uow.catalog_items.add_item(request),
        )
        .await
    }

    pub async fn update_item(
        &self,
        request: UpdateItemRequest,
    ) -> Option<String> {
        self.execute_safe(
            "update_item",
            self.uow.catalog_items.update_item(request),
        )
        .await
    }

    pub async fn remove_item(&self, id: i32) -> Option<String> {
        self.execute_safe("remove_item", self.uow.catalog_items.remove_item(id))
            .await
    }

    pub async fn add_brand(&self, brand: String) -> Option<i32> {
        self.execute_safe("add_brand", self.uow.catalog_brands.add_brand(brand))
            .await
    }

    pub async fn update_brand(
        &self,
        request: UpdateBrandRequest,
    ) -> Option<String> {
        self.execute_safe(
            "update_brand",
            self.uow.catalog_brands.update_brand(request),
        )
        .await
    }

    pub async fn remove_brand(&self, id: i32) -> Option<String> {
        self.execute_safe(
            "remove_brand",
            self.uow.catalog_brands.remove_brand(id),
        )
        .await
    }

    pub async fn add_specification(
        &self,
        request: CreateSpecificationRequest,
    ) -> Option<i32> {
        self.execute_safe(
            "add_specification",
            self.uow.specifications.add_specification(request),
        )
        .await
    }

    pub async fn update_specification(
        &self,
        request: UpdateSpecificationRequest,
    ) -> Option<String> {
        self.execute_safe(
            "update_specification",
            self.uow.specifications.update_specification(request),
        )
        .await
    }

    pub async fn remove_specification(&self, id: i32) -> Option<String> {
        self.execute_safe(
            "remove_specification",
            self.uow.specifications.remove_specification(id),
        )
        .await
    }
}

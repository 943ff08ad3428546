use axum::{Json, extract::State, http::StatusCode};
use catalog_model::{
    CatalogBrandDto, CatalogItemDto, CatalogTypeFilter, GetByIdRequest,
    PaginatedBrandsRequest, PaginatedItemsRequest, PaginatedItemsResponse,
};
use tracing::debug;

use super::ok_or_bad_request;
use crate::{AppState, extract::CatalogJson};

pub async fn items_handler(
    State(state): State<AppState>,
    CatalogJson(request): CatalogJson<PaginatedItemsRequest<CatalogTypeFilter>>,
) -> Result<Json<PaginatedItemsResponse<CatalogItemDto>>, StatusCode> {
    debug!(
        page_index = request.page_index,
        page_size = request.page_size,
        filters = ?request.filters,
        "catalog items requested"
    );

    let page = state
        .catalog()
        .get_by_page(request.page_size, request.page_index, request.filters)
        .await;
    ok_or_bad_request(page).map(Json)
}

pub async fn get_by_id_handler(
    State(state): State<AppState>,
    CatalogJson(request): CatalogJson<GetByIdRequest>,
) -> Result<Json<CatalogItemDto>, StatusCode> {
    ok_or_bad_request(state.catalog().get_by_id(request.id).await).map(Json)
}

pub async fn brands_handler(
    State(state): State<AppState>,
    CatalogJson(request): CatalogJson<PaginatedBrandsRequest>,
) -> Result<Json<PaginatedItemsResponse<CatalogBrandDto>>, StatusCode> {
    let page = state
        .catalog()
        .get_brands(request.page_size, request.page_index)
        .await;
    ok_or_bad_request(page).map(Json)
}

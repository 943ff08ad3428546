use axum::{Router, routing::post};
use catalog_core::api::routes::v1;

use crate::AppState;
use crate::handlers::{
    catalog_bff, catalog_brand, catalog_item, specification,
};

/// Create all v1 catalog routes.
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        // Read side
        .route(v1::catalog_bff::ITEMS, post(catalog_bff::items_handler))
        .route(
            v1::catalog_bff::GET_BY_ID,
            post(catalog_bff::get_by_id_handler),
        )
        .route(v1::catalog_bff::BRANDS, post(catalog_bff::brands_handler))
        // Items
        .route(v1::catalog_item::CREATE, post(catalog_item::create_handler))
        .route(v1::catalog_item::UPDATE, post(catalog_item::update_handler))
        .route(v1::catalog_item::REMOVE, post(catalog_item::remove_handler))
        // Brands
        .route(
            v1::catalog_brand::CREATE,
            post(catalog_brand::create_handler),
        )
        .route(
            v1::catalog_brand::UPDATE,
            post(catalog_brand::update_handler),
        )
        .route(
            v1::catalog_brand::REMOVE,
            post(catalog_brand::remove_handler),
        )
        // Specifications
        .route(
            v1::specification::CREATE,
            post(specification::create_handler),
        )
        .route(
            v1::specification::UPDATE,
            post(specification::update_handler),
        )
        .route(
            v1::specification::REMOVE,
            post(specification::remove_handler),
        )
}

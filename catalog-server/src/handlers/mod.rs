//! Catalog endpoint handlers.
//!
//! Handlers forward the bound request to [`catalog_core::CatalogService`]
//! and translate its `None` into an empty `400 Bad Request`.

pub mod catalog_bff;
pub mod catalog_brand;
pub mod catalog_item;
pub mod specification;
pub mod system;

use axum::http::StatusCode;

pub(crate) fn ok_or_bad_request<T>(value: Option<T>) -> Result<T, StatusCode> {
    value.ok_or(StatusCode::BAD_REQUEST)
}

/// Update and delete report success with an empty body.
pub(crate) fn empty_ok<T>(value: Option<T>) -> StatusCode {
    match value {
        Some(_) => StatusCode::OK,
        None => StatusCode::BAD_REQUEST,
    }
}

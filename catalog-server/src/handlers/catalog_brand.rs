use axum::{Json, extract::State, http::StatusCode};
use catalog_model::{
    CreateBrandRequest, CreateResponse, GetByIdRequest, UpdateBrandRequest,
};

use super::{empty_ok, ok_or_bad_request};
use crate::{AppState, extract::CatalogJson};

pub async fn create_handler(
    State(state): State<AppState>,
    CatalogJson(request): CatalogJson<CreateBrandRequest>,
) -> Result<Json<CreateResponse<i32>>, StatusCode> {
    let id =
        ok_or_bad_request(state.catalog().add_brand(request.brand).await)?;
    Ok(Json(CreateResponse { id }))
}

pub async fn update_handler(
    State(state): State<AppState>,
    CatalogJson(request): CatalogJson<UpdateBrandRequest>,
) -> StatusCode {
    empty_ok(state.catalog().update_brand(request).await)
}

pub async fn remove_handler(
    State(state): State<AppState>,
    CatalogJson(request): CatalogJson<GetByIdRequest>,
) -> StatusCode {
    empty_ok(state.catalog().remove_brand(request.id).await)
}

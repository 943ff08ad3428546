//! Entity, DTO and request/response models shared across the catalog crates.
//!
//! Entities mirror the persisted rows (with eagerly loaded relations on
//! [`CatalogItem`]); DTOs are the wire-facing shapes returned by the HTTP
//! layer. With the `serde` feature every wire type (de)serializes with
//! camelCase keys.

pub mod dtos;
pub mod entities;
pub mod filters;
pub mod requests;
pub mod responses;

pub use dtos::{CatalogBrandDto, CatalogItemDto, SpecificationDto};
pub use entities::{CatalogBrand, CatalogItem, PaginatedItems, Specification};
pub use filters::CatalogTypeFilter;
pub use requests::{
    CreateBrandRequest, CreateItemRequest, CreateSpecificationRequest,
    GetByIdRequest, PaginatedBrandsRequest, PaginatedItemsRequest,
    UpdateBrandRequest, UpdateItemRequest, UpdateSpecificationRequest,
};
pub use responses::{CreateResponse, PaginatedItemsResponse};

pub use rust_decimal::Decimal;

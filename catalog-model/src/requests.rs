use std::collections::HashMap;
use std::hash::Hash;

use rust_decimal::Decimal;

/// Paginated listing request with an optional filter map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PaginatedItemsRequest<TFilter>
where
    TFilter: Eq + Hash,
{
    pub page_index: i32,
    pub page_size: i32,
    pub filters: Option<HashMap<TFilter, i32>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PaginatedBrandsRequest {
    pub page_index: i32,
    pub page_size: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GetByIdRequest {
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreateItemRequest {
    pub catalog_brand_id: i32,
    pub name: String,
    pub price: Decimal,
    pub specification_id: i32,
    pub picture_file_name: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UpdateItemRequest {
    pub id: i32,
    pub catalog_brand_id: i32,
    pub name: String,
    pub price: Decimal,
    pub specification_id: i32,
    pub picture_file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreateBrandRequest {
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UpdateBrandRequest {
    pub id: i32,
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreateSpecificationRequest {
    pub socket: String,
    pub number_of_cores: i32,
    pub number_of_threads: i32,
    pub clock_frequency: f64,
    pub maximum_clock_frequency: f64,
    pub memory_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub video_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UpdateSpecificationRequest {
    pub id: i32,
    pub socket: String,
    pub number_of_cores: i32,
    pub number_of_threads: i32,
    pub clock_frequency: f64,
    pub maximum_clock_frequency: f64,
    pub memory_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub video_link: Option<String>,
}

use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CatalogBrandDto {
    pub id: i32,
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SpecificationDto {
    pub id: i32,
    pub socket: String,
    pub number_of_cores: i32,
    pub number_of_threads: i32,
    pub clock_frequency: f64,
    pub maximum_clock_frequency: f64,
    pub memory_type: String,
    pub video_link: Option<String>,
}

/// Wire shape of a catalog item, embedding its brand and specification.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CatalogItemDto {
    pub id: i32,
    pub catalog_brand_id: i32,
    pub catalog_brand: CatalogBrandDto,
    pub name: String,
    pub price: Decimal,
    pub specification_id: i32,
    pub specification: SpecificationDto,
    pub picture_file_name: String,
}

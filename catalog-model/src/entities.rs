use rust_decimal::Decimal;

/// A manufacturer that catalog items belong to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CatalogBrand {
    pub id: i32,
    pub brand: String,
}

/// Technical sheet referenced by a catalog item.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Specification {
    pub id: i32,
    pub socket: String,
    pub number_of_cores: i32,
    pub number_of_threads: i32,
    pub clock_frequency: f64,
    pub maximum_clock_frequency: f64,
    pub memory_type: String,
    pub video_link: Option<String>,
}

/// A sellable catalog entry with its brand and specification loaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogItem {
    pub id: i32,
    pub catalog_brand_id: i32,
    pub catalog_brand: CatalogBrand,
    pub name: String,
    pub price: Decimal,
    pub specification_id: i32,
    pub specification: Specification,
    pub picture_file_name: String,
}

/// One page of a larger result set plus the total number of matching rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedItems<T> {
    pub total_count: i64,
    pub data: Vec<T>,
}

impl<T> PaginatedItems<T> {
    pub fn new(total_count: i64, data: Vec<T>) -> Self {
        Self { total_count, data }
    }

    pub fn empty() -> Self {
        Self {
            total_count: 0,
            data: Vec::new(),
        }
    }
}

impl<T> Default for PaginatedItems<T> {
    fn default() -> Self {
        Self::empty()
    }
}

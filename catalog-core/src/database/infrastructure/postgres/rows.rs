use catalog_model::{CatalogBrand, CatalogItem, Decimal, Specification};
use sqlx::FromRow;

/// Flat projection of `catalog` joined with its brand and specification.
#[derive(Debug, FromRow)]
pub(super) struct CatalogItemRow {
    pub id: i32,
    pub catalog_brand_id: i32,
    pub name: String,
    pub price: Decimal,
    pub specification_id: i32,
    pub picture_file_name: String,
    pub brand: String,
    pub socket: String,
    pub number_of_cores: i32,
    pub number_of_threads: i32,
    pub clock_frequency: f64,
    pub maximum_clock_frequency: f64,
    pub memory_type: String,
    pub video_link: Option<String>,
}

impl From<CatalogItemRow> for CatalogItem {
    fn from(row: CatalogItemRow) -> Self {
        CatalogItem {
            id: row.id,
            catalog_brand_id: row.catalog_brand_id,
            catalog_brand: CatalogBrand {
                id: row.catalog_brand_id,
                brand: row.brand,
            },
            name: row.name,
            price: row.price,
            specification_id: row.specification_id,
            specification: Specification {
                id: row.specification_id,
                socket: row.socket,
                number_of_cores: row.number_of_cores,
                number_of_threads: row.number_of_threads,
                clock_frequency: row.clock_frequency,
                maximum_clock_frequency: row.maximum_clock_frequency,
                memory_type: row.memory_type,
                video_link: row.video_link,
            },
            picture_file_name: row.picture_file_name,
        }
    }
}

pub(super) const ITEM_SELECT: &str = r#"
    SELECT
        c.id,
        c.catalog_brand_id,
        c.name,
        c.price,
        c.specification_id,
        c.picture_file_name,
        b.brand,
        s.socket,
        s.number_of_cores,
        s.number_of_threads,
        s.clock_frequency,
        s.maximum_clock_frequency,
        s.memory_type,
        s.video_link
    FROM catalog c
    JOIN catalog_brand b ON b.id = c.catalog_brand_id
    JOIN specification s ON s.id = c.specification_id
"#;

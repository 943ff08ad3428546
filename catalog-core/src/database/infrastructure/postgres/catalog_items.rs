use async_trait::async_trait;
use catalog_model::{
    CatalogItem, CreateItemRequest, PaginatedItems, UpdateItemRequest,
};
use sqlx::PgPool;
use tracing::debug;

use super::rows::{CatalogItemRow, ITEM_SELECT};
use crate::database::ports::catalog_items::CatalogItemRepository;
use crate::database::{confirmation, page_offset};
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone)]
pub struct PostgresCatalogItemRepository {
    pool: PgPool,
}

impl PostgresCatalogItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CatalogItemRepository for PostgresCatalogItemRepository {
    async fn get_by_page(
        &self,
        page_index: i32,
        page_size: i32,
        brand_filter: Option<i32>,
    ) -> Result<PaginatedItems<CatalogItem>> {
        let total_count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM catalog
            WHERE ($1::INTEGER IS NULL OR catalog_brand_id = $1)
            "#,
        )
        .bind(brand_filter)
        .fetch_one(self.pool())
        .await?;

        let query = format!(
            "{ITEM_SELECT}
            WHERE ($1::INTEGER IS NULL OR c.catalog_brand_id = $1)
            ORDER BY c.name, c.id
            OFFSET $2
            LIMIT $3"
        );

        let rows: Vec<CatalogItemRow> = sqlx::query_as(&query)
            .bind(brand_filter)
            .bind(page_offset(page_index, page_size))
            .bind(i64::from(page_size))
            .fetch_all(self.pool())
            .await?;

        debug!(
            page_index,
            page_size,
            ?brand_filter,
            total_count,
            returned = rows.len(),
            "loaded catalog page"
        );

        Ok(PaginatedItems::new(
            total_count,
            rows.into_iter().map(CatalogItem::from).collect(),
        ))
    }

    async fn get_by_id(&self, id: i32) -> Result<CatalogItem> {
        let query = format!("{ITEM_SELECT} WHERE c.id = $1");

        let row: Option<CatalogItemRow> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        row.map(CatalogItem::from)
            .ok_or_else(|| CatalogError::not_found("catalog item", id))
    }

    async fn add_item(&self, request: CreateItemRequest) -> Result<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO catalog
                (catalog_brand_id, name, price, specification_id, picture_file_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(request.catalog_brand_id)
        .bind(&request.name)
        .bind(request.price)
        .bind(request.specification_id)
        .bind(&request.picture_file_name)
        .fetch_one(self.pool())
        .await?;

        Ok(id)
    }

    async fn update_item(&self, request: UpdateItemRequest) -> Result<String> {
        let result = sqlx::query(
            r#"
            UPDATE catalog
            SET catalog_brand_id = $2,
                name = $3,
                price = $4,
                specification_id = $5,
                picture_file_name = $6
            WHERE id = $1
            "#,
        )
        .bind(request.id)
        .bind(request.catalog_brand_id)
        .bind(&request.name)
        .bind(request.price)
        .bind(request.specification_id)
        .bind(&request.picture_file_name)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("catalog item", request.id));
        }

        Ok(confirmation("updated"))
    }

    async fn remove_item(&self, id: i32) -> Result<String> {
        let result = sqlx::query("DELETE FROM catalog WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("catalog item", id));
        }

        Ok(confirmation("deleted"))
    }
}

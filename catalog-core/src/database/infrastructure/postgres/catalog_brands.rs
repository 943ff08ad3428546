use async_trait::async_trait;
use catalog_model::{CatalogBrand, PaginatedItems, UpdateBrandRequest};
use sqlx::PgPool;

use crate::database::ports::catalog_brands::CatalogBrandRepository;
use crate::database::{confirmation, page_offset};
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone)]
pub struct PostgresCatalogBrandRepository {
    pool: PgPool,
}

impl PostgresCatalogBrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CatalogBrandRepository for PostgresCatalogBrandRepository {
    async fn get_by_page(
        &self,
        page_index: i32,
        page_size: i32,
    ) -> Result<PaginatedItems<CatalogBrand>> {
        let total_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM catalog_brand")
                .fetch_one(self.pool())
                .await?;

        let brands: Vec<CatalogBrand> = sqlx::query_as(
            r#"
            SELECT id, brand
            FROM catalog_brand
            ORDER BY id
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(page_offset(page_index, page_size))
        .bind(i64::from(page_size))
        .fetch_all(self.pool())
        .await?;

        Ok(PaginatedItems::new(total_count, brands))
    }

    async fn add_brand(&self, brand: String) -> Result<i32> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO catalog_brand (brand) VALUES ($1) RETURNING id",
        )
        .bind(&brand)
        .fetch_one(self.pool())
        .await?;

        Ok(id)
    }

    async fn update_brand(
        &self,
        request: UpdateBrandRequest,
    ) -> Result<String> {
        let result =
            sqlx::query("UPDATE catalog_brand SET brand = $2 WHERE id = $1")
                .bind(request.id)
                .bind(&request.brand)
                .execute(self.pool())
                .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("catalog brand", request.id));
        }

        Ok(confirmation("updated"))
    }

    async fn remove_brand(&self, id: i32) -> Result<String> {
        let result = sqlx::query("DELETE FROM catalog_brand WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("catalog brand", id));
        }

        Ok(confirmation("deleted"))
    }
}

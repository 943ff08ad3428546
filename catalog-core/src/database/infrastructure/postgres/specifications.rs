use async_trait::async_trait;
use catalog_model::{CreateSpecificationRequest, UpdateSpecificationRequest};
use sqlx::PgPool;

use crate::database::confirmation;
use crate::database::ports::specifications::SpecificationRepository;
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone)]
pub struct PostgresSpecificationRepository {
    pool: PgPool,
}

impl PostgresSpecificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SpecificationRepository for PostgresSpecificationRepository {
    async fn add_specification(
        &self,
        request: CreateSpecificationRequest,
    ) -> Result<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO specification (
                socket,
                number_of_cores,
                number_of_threads,
                clock_frequency,
                maximum_clock_frequency,
                memory_type,
                video_link
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&request.socket)
        .bind(request.number_of_cores)
        .bind(request.number_of_threads)
        .bind(request.clock_frequency)
        .bind(request.maximum_clock_frequency)
        .bind(&request.memory_type)
        .bind(&request.video_link)
        .fetch_one(self.pool())
        .await?;

        Ok(id)
    }

    async fn update_specification(
        &self,
        request: UpdateSpecificationRequest,
    ) -> Result<String> {
        let result = sqlx::query(
            r#"
            UPDATE specification
            SET socket = $2,
                number_of_cores = $3,
                number_of_threads = $4,
                clock_frequency = $5,
                maximum_clock_frequency = $6,
                memory_type = $7,
                video_link = $8
            WHERE id = $1
            "#,
        )
        .bind(request.id)
        .bind(&request.socket)
        .bind(request.number_of_cores)
        .bind(request.number_of_threads)
        .bind(request.clock_frequency)
        .bind(request.maximum_clock_frequency)
        .bind(&request.memory_type)
        .bind(&request.video_link)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("specification", request.id));
        }

        Ok(confirmation("updated"))
    }

    async fn remove_specification(&self, id: i32) -> Result<String> {
        let result = sqlx::query("DELETE FROM specification WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("specification", id));
        }

        Ok(confirmation("deleted"))
    }
}

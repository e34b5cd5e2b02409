//! Repository for the `enterprises` table.

use async_trait::async_trait;
use sqlx::PgPool;

use bankadvice_core::types::DbId;

use crate::models::enterprise::{Enterprise, EnterpriseDto};

use super::CrudRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, phone, created_at, updated_at";

/// Provides CRUD operations for enterprises.
pub struct EnterpriseRepo;

#[async_trait]
impl CrudRepo for EnterpriseRepo {
    const ENTITY: &'static str = "enterprise";

    type Row = Enterprise;
    type Dto = EnterpriseDto;

    async fn insert(pool: &PgPool, dto: &EnterpriseDto) -> Result<Enterprise, sqlx::Error> {
        let query = format!(
            "INSERT INTO enterprises (name, address, phone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enterprise>(&query)
            .bind(&dto.name)
            .bind(&dto.address)
            .bind(&dto.phone)
            .fetch_one(pool)
            .await
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enterprise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enterprises WHERE id = $1");
        sqlx::query_as::<_, Enterprise>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn list(pool: &PgPool) -> Result<Vec<Enterprise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enterprises ORDER BY id");
        sqlx::query_as::<_, Enterprise>(&query)
            .fetch_all(pool)
            .await
    }

    async fn replace(
        pool: &PgPool,
        id: DbId,
        dto: &EnterpriseDto,
    ) -> Result<Option<Enterprise>, sqlx::Error> {
        let query = format!(
            "UPDATE enterprises SET
                name = $2,
                address = $3,
                phone = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enterprise>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.address)
            .bind(&dto.phone)
            .fetch_optional(pool)
            .await
    }

    async fn merge(
        pool: &PgPool,
        id: DbId,
        dto: &EnterpriseDto,
    ) -> Result<Option<Enterprise>, sqlx::Error> {
        let query = format!(
            "UPDATE enterprises SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                phone = COALESCE($4, phone),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enterprise>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.address)
            .bind(&dto.phone)
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enterprises WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

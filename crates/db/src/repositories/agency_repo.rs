//! Repository for the `agencies` table.

use async_trait::async_trait;
use sqlx::PgPool;

use bankadvice_core::types::DbId;

use crate::models::agency::{Agency, AgencyDto};

use super::CrudRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, phone, created_at, updated_at";

/// Provides CRUD operations for agencies.
pub struct AgencyRepo;

#[async_trait]
impl CrudRepo for AgencyRepo {
    const ENTITY: &'static str = "agency";

    type Row = Agency;
    type Dto = AgencyDto;

    async fn insert(pool: &PgPool, dto: &AgencyDto) -> Result<Agency, sqlx::Error> {
        let query = format!(
            "INSERT INTO agencies (name, address, phone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Agency>(&query)
            .bind(&dto.name)
            .bind(&dto.address)
            .bind(&dto.phone)
            .fetch_one(pool)
            .await
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Agency>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agencies WHERE id = $1");
        sqlx::query_as::<_, Agency>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn list(pool: &PgPool) -> Result<Vec<Agency>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agencies ORDER BY id");
        sqlx::query_as::<_, Agency>(&query).fetch_all(pool).await
    }

    async fn replace(
        pool: &PgPool,
        id: DbId,
        dto: &AgencyDto,
    ) -> Result<Option<Agency>, sqlx::Error> {
        let query = format!(
            "UPDATE agencies SET
                name = $2,
                address = $3,
                phone = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Agency>(&query)
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
        dto: &AgencyDto,
    ) -> Result<Option<Agency>, sqlx::Error> {
        let query = format!(
            "UPDATE agencies SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                phone = COALESCE($4, phone),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Agency>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.address)
            .bind(&dto.phone)
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM agencies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `managers` table.

use async_trait::async_trait;
use sqlx::PgPool;

use bankadvice_core::types::DbId;

use crate::models::manager::{Manager, ManagerDto};

use super::CrudRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, gender, telephone, user_id, enterprise_id, created_at, updated_at";

/// Provides CRUD operations for managers.
pub struct ManagerRepo;

impl ManagerRepo {
    /// Resolve the manager profile linked to the given user login.
    ///
    /// Returns `None` when no profile is linked to that identity.
    pub async fn find_by_user_login(
        pool: &PgPool,
        login: &str,
    ) -> Result<Option<Manager>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM managers
             WHERE user_id = (SELECT id FROM users WHERE login = $1)"
        );
        sqlx::query_as::<_, Manager>(&query)
            .bind(login)
            .fetch_optional(pool)
            .await
    }
}

#[async_trait]
impl CrudRepo for ManagerRepo {
    const ENTITY: &'static str = "manager";

    type Row = Manager;
    type Dto = ManagerDto;

    async fn insert(pool: &PgPool, dto: &ManagerDto) -> Result<Manager, sqlx::Error> {
        let query = format!(
            "INSERT INTO managers (name, gender, telephone, user_id, enterprise_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Manager>(&query)
            .bind(&dto.name)
            .bind(dto.gender)
            .bind(&dto.telephone)
            .bind(dto.user_id)
            .bind(dto.enterprise_id)
            .fetch_one(pool)
            .await
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Manager>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM managers WHERE id = $1");
        sqlx::query_as::<_, Manager>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn list(pool: &PgPool) -> Result<Vec<Manager>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM managers ORDER BY id");
        sqlx::query_as::<_, Manager>(&query).fetch_all(pool).await
    }

    async fn replace(
        pool: &PgPool,
        id: DbId,
        dto: &ManagerDto,
    ) -> Result<Option<Manager>, sqlx::Error> {
        let query = format!(
            "UPDATE managers SET
                name = $2,
                gender = $3,
                telephone = $4,
                user_id = $5,
                enterprise_id = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Manager>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(dto.gender)
            .bind(&dto.telephone)
            .bind(dto.user_id)
            .bind(dto.enterprise_id)
            .fetch_optional(pool)
            .await
    }

    async fn merge(
        pool: &PgPool,
        id: DbId,
        dto: &ManagerDto,
    ) -> Result<Option<Manager>, sqlx::Error> {
        let query = format!(
            "UPDATE managers SET
                name = COALESCE($2, name),
                gender = COALESCE($3, gender),
                telephone = COALESCE($4, telephone),
                user_id = COALESCE($5, user_id),
                enterprise_id = COALESCE($6, enterprise_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Manager>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(dto.gender)
            .bind(&dto.telephone)
            .bind(dto.user_id)
            .bind(dto.enterprise_id)
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM managers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

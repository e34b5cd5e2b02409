//! Repository for the `appointments` table.

use async_trait::async_trait;
use sqlx::PgPool;

use bankadvice_core::types::DbId;

use crate::models::appointment::{Appointment, AppointmentDto};

use super::CrudRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, subject, date, manager_id, advisor_id, created_at, updated_at";

/// Provides CRUD operations for appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// List all appointments for a given manager.
    pub async fn list_by_manager(
        pool: &PgPool,
        manager_id: DbId,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM appointments WHERE manager_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(manager_id)
            .fetch_all(pool)
            .await
    }

    /// List all appointments for a given advisor.
    pub async fn list_by_advisor(
        pool: &PgPool,
        advisor_id: DbId,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM appointments WHERE advisor_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(advisor_id)
            .fetch_all(pool)
            .await
    }
}

#[async_trait]
impl CrudRepo for AppointmentRepo {
    const ENTITY: &'static str = "appointment";

    type Row = Appointment;
    type Dto = AppointmentDto;

    async fn insert(pool: &PgPool, dto: &AppointmentDto) -> Result<Appointment, sqlx::Error> {
        let query = format!(
            "INSERT INTO appointments (subject, date, manager_id, advisor_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(&dto.subject)
            .bind(dto.date)
            .bind(dto.manager_id)
            .bind(dto.advisor_id)
            .fetch_one(pool)
            .await
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointments WHERE id = $1");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn list(pool: &PgPool) -> Result<Vec<Appointment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointments ORDER BY id");
        sqlx::query_as::<_, Appointment>(&query)
            .fetch_all(pool)
            .await
    }

    async fn replace(
        pool: &PgPool,
        id: DbId,
        dto: &AppointmentDto,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!(
            "UPDATE appointments SET
                subject = $2,
                date = $3,
                manager_id = $4,
                advisor_id = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(&dto.subject)
            .bind(dto.date)
            .bind(dto.manager_id)
            .bind(dto.advisor_id)
            .fetch_optional(pool)
            .await
    }

    async fn merge(
        pool: &PgPool,
        id: DbId,
        dto: &AppointmentDto,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!(
            "UPDATE appointments SET
                subject = COALESCE($2, subject),
                date = COALESCE($3, date),
                manager_id = COALESCE($4, manager_id),
                advisor_id = COALESCE($5, advisor_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(&dto.subject)
            .bind(dto.date)
            .bind(dto.manager_id)
            .bind(dto.advisor_id)
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

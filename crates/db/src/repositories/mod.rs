//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. The shared [`CrudRepo`]
//! trait is the capability surface the generic HTTP layer is instantiated
//! over; entity-specific queries (scoped lists, principal lookups) are
//! inherent methods on the individual repositories.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;
use validator::Validate;

use bankadvice_core::types::DbId;

use crate::models::{Identifiable, Persisted};

pub mod advisor_repo;
pub mod agency_repo;
pub mod appointment_repo;
pub mod enterprise_repo;
pub mod manager_repo;
pub mod user_repo;

pub use advisor_repo::AdvisorRepo;
pub use agency_repo::AgencyRepo;
pub use appointment_repo::AppointmentRepo;
pub use enterprise_repo::EnterpriseRepo;
pub use manager_repo::ManagerRepo;
pub use user_repo::UserRepo;

/// CRUD capability set implemented by every entity repository.
///
/// `Row` is the persisted representation, `Dto` the transfer object. Every
/// mutation is a single conditional statement (`RETURNING` carries the
/// success condition), so existence checking and the mutation itself
/// cannot race.
#[async_trait]
pub trait CrudRepo: Send + Sync + 'static {
    /// Entity name used in error payloads and alert topics.
    const ENTITY: &'static str;

    type Row: Persisted + Serialize + Send + Sync + Unpin + 'static;
    type Dto: Identifiable + Validate + DeserializeOwned + Send + Sync + 'static;

    /// Insert a new row from the transfer object, returning the created row.
    async fn insert(pool: &PgPool, dto: &Self::Dto) -> Result<Self::Row, sqlx::Error>;

    /// Find a row by its internal id.
    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Self::Row>, sqlx::Error>;

    /// List all rows in storage order.
    async fn list(pool: &PgPool) -> Result<Vec<Self::Row>, sqlx::Error>;

    /// Fully overwrite the row with the transfer object (`None` clears).
    ///
    /// Returns `None` if no row with the given `id` exists.
    async fn replace(
        pool: &PgPool,
        id: DbId,
        dto: &Self::Dto,
    ) -> Result<Option<Self::Row>, sqlx::Error>;

    /// Merge-patch the row: only non-`None` fields overwrite stored values.
    ///
    /// Returns `None` if no row with the given `id` exists.
    async fn merge(
        pool: &PgPool,
        id: DbId,
        dto: &Self::Dto,
    ) -> Result<Option<Self::Row>, sqlx::Error>;

    /// Delete by id unconditionally. Returns `true` if a row was removed.
    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error>;
}

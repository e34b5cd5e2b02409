//! Domain model structs and transfer objects.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A single all-`Option` transfer object serving create, full update,
//!   and merge patch

pub mod advisor;
pub mod agency;
pub mod appointment;
pub mod enterprise;
pub mod manager;
pub mod user;

use serde::{Deserialize, Serialize};

use bankadvice_core::types::DbId;

/// Persisted rows expose their server-assigned identifier.
pub trait Persisted {
    fn id(&self) -> DbId;
}

/// Transfer objects expose their optional client-supplied identifier.
///
/// `None` on create is the only legal state; update and merge patch require
/// the id to be present and to match the path.
pub trait Identifiable {
    fn id(&self) -> Option<DbId>;
}

/// Advisor/manager gender, stored as the Postgres `gender` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "gender", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

//! Authentication identity rows.
//!
//! Users are not a REST resource here; the table backs the 1:1 profile
//! links and the current-principal lookups.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bankadvice_core::types::{DbId, Timestamp};

/// Row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub login: String,
    pub created_at: Timestamp,
}

/// Input for inserting a user (seed data, tests, provisioning hooks).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub login: String,
}

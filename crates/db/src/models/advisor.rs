//! Advisor profile model and transfer object.
//!
//! An advisor is optionally linked 1:1 to a user account (the
//! authentication identity) and optionally to an agency.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bankadvice_core::types::{DbId, Timestamp};

use super::{Gender, Identifiable, Persisted};

/// Row from the `advisors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Advisor {
    pub id: DbId,
    pub name: String,
    pub gender: Option<Gender>,
    pub telephone: Option<String>,
    pub user_id: Option<DbId>,
    pub agency_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Persisted for Advisor {
    fn id(&self) -> DbId {
        self.id
    }
}

/// Transfer object for advisors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AdvisorDto {
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub gender: Option<Gender>,
    #[validate(length(min = 5, max = 30))]
    pub telephone: Option<String>,
    pub user_id: Option<DbId>,
    pub agency_id: Option<DbId>,
}

impl Identifiable for AdvisorDto {
    fn id(&self) -> Option<DbId> {
        self.id
    }
}

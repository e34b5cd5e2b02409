//! Manager profile model and transfer object.
//!
//! Mirror of the advisor profile, linked to an enterprise instead of an
//! agency.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bankadvice_core::types::{DbId, Timestamp};

use super::{Gender, Identifiable, Persisted};

/// Row from the `managers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Manager {
    pub id: DbId,
    pub name: String,
    pub gender: Option<Gender>,
    pub telephone: Option<String>,
    pub user_id: Option<DbId>,
    pub enterprise_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Persisted for Manager {
    fn id(&self) -> DbId {
        self.id
    }
}

/// Transfer object for managers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ManagerDto {
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub gender: Option<Gender>,
    #[validate(length(min = 5, max = 30))]
    pub telephone: Option<String>,
    pub user_id: Option<DbId>,
    pub enterprise_id: Option<DbId>,
}

impl Identifiable for ManagerDto {
    fn id(&self) -> Option<DbId> {
        self.id
    }
}

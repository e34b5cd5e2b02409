//! Enterprise model and transfer object.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bankadvice_core::types::{DbId, Timestamp};

use super::{Identifiable, Persisted};

/// Row from the `enterprises` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enterprise {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Persisted for Enterprise {
    fn id(&self) -> DbId {
        self.id
    }
}

/// Transfer object for enterprises.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EnterpriseDto {
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(max = 250))]
    pub address: Option<String>,
    #[validate(length(min = 5, max = 30))]
    pub phone: Option<String>,
}

impl Identifiable for EnterpriseDto {
    fn id(&self) -> Option<DbId> {
        self.id
    }
}

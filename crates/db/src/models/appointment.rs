//! Appointment model and transfer object.
//!
//! An appointment references exactly one manager and one advisor; the
//! database rejects rows missing either reference.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bankadvice_core::types::{DbId, Timestamp};

use super::{Identifiable, Persisted};

/// Row from the `appointments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub subject: Option<String>,
    pub date: Option<Timestamp>,
    pub manager_id: DbId,
    pub advisor_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Persisted for Appointment {
    fn id(&self) -> DbId {
        self.id
    }
}

/// Transfer object for appointments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppointmentDto {
    pub id: Option<DbId>,
    #[validate(length(max = 250))]
    pub subject: Option<String>,
    pub date: Option<Timestamp>,
    pub manager_id: Option<DbId>,
    pub advisor_id: Option<DbId>,
}

impl Identifiable for AppointmentDto {
    fn id(&self) -> Option<DbId> {
        self.id
    }
}

//! Appointment handlers beyond the shared CRUD surface: the
//! relationship-scoped list.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use bankadvice_core::policy::{self, Operation};
use bankadvice_core::types::DbId;
use bankadvice_db::models::appointment::Appointment;
use bankadvice_db::repositories::{AppointmentRepo, CrudRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for the appointment list (`?manager_id=` / `?advisor_id=`).
#[derive(Debug, Deserialize)]
pub struct AppointmentListParams {
    pub manager_id: Option<DbId>,
    pub advisor_id: Option<DbId>,
}

/// GET /api/appointments
///
/// Unfiltered, or scoped to one manager or one advisor. `manager_id` wins
/// when both filters are supplied.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<AppointmentListParams>,
) -> AppResult<Json<Vec<Appointment>>> {
    policy::authorize(&user.role, AppointmentRepo::ENTITY, Operation::Read)?;
    let rows = match (params.manager_id, params.advisor_id) {
        (Some(manager_id), _) => {
            AppointmentRepo::list_by_manager(&state.pool, manager_id).await?
        }
        (None, Some(advisor_id)) => {
            AppointmentRepo::list_by_advisor(&state.pool, advisor_id).await?
        }
        (None, None) => AppointmentRepo::list(&state.pool).await?,
    };
    Ok(Json(rows))
}

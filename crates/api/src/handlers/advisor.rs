//! Advisor handlers beyond the shared CRUD surface.

use axum::extract::State;
use axum::Json;

use bankadvice_core::error::CoreError;
use bankadvice_core::policy::{self, Operation};
use bankadvice_db::models::advisor::Advisor;
use bankadvice_db::repositories::{AdvisorRepo, CrudRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/advisors/user
///
/// Resolve the advisor profile linked to the authenticated principal.
/// 404 when no profile is linked to that identity.
pub async fn current_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Advisor>> {
    policy::authorize(&user.role, AdvisorRepo::ENTITY, Operation::Read)?;
    let advisor = AdvisorRepo::find_by_user_login(&state.pool, &user.login)
        .await?
        .ok_or(CoreError::ProfileNotLinked {
            entity: AdvisorRepo::ENTITY,
            login: user.login,
        })?;
    Ok(Json(advisor))
}

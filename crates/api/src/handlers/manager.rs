//! Manager handlers beyond the shared CRUD surface.

use axum::extract::State;
use axum::Json;

use bankadvice_core::error::CoreError;
use bankadvice_core::policy::{self, Operation};
use bankadvice_db::models::manager::Manager;
use bankadvice_db::repositories::{CrudRepo, ManagerRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/managers/user
///
/// Resolve the manager profile linked to the authenticated principal.
/// 404 when no profile is linked to that identity.
pub async fn current_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Manager>> {
    policy::authorize(&user.role, ManagerRepo::ENTITY, Operation::Read)?;
    let manager = ManagerRepo::find_by_user_login(&state.pool, &user.login)
        .await?
        .ok_or(CoreError::ProfileNotLinked {
            entity: ManagerRepo::ENTITY,
            login: user.login,
        })?;
    Ok(Json(manager))
}

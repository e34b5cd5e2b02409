//! Generic CRUD handlers, instantiated once per entity type.
//!
//! Every handler runs the same sequence: policy check, identifier
//! validation, one conditional repository statement, alert publication.
//! Existence is never pre-checked separately from the mutation, so a
//! concurrent delete cannot produce inconsistent responses.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use validator::Validate;

use bankadvice_core::error::CoreError;
use bankadvice_core::policy::{self, Operation};
use bankadvice_core::types::DbId;
use bankadvice_db::models::{Identifiable, Persisted};
use bankadvice_db::repositories::CrudRepo;
use bankadvice_events::EntityEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Binds a repository to its REST collection path.
///
/// This is the per-entity configuration of the generic component: the
/// repository supplies storage and the entity name, the path supplies the
/// `Location` header prefix.
pub trait CrudResource: CrudRepo {
    /// Absolute collection path, e.g. `/api/advisors`.
    const PATH: &'static str;
}

fn check_valid(dto: &impl Validate) -> Result<(), AppError> {
    dto.validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}

/// Identifier checks shared by update and partial update: the body id must
/// be present and must match the path id.
fn check_update_id<R: CrudResource>(path_id: DbId, dto: &R::Dto) -> Result<(), AppError> {
    let body_id = dto.id().ok_or(CoreError::IdNull { entity: R::ENTITY })?;
    if body_id != path_id {
        return Err(CoreError::IdMismatch {
            entity: R::ENTITY,
            path_id,
            body_id,
        }
        .into());
    }
    Ok(())
}

/// POST / -- create a new row.
///
/// Rejects a transfer object that already carries an id.
pub async fn create<R: CrudResource>(
    State(state): State<AppState>,
    user: AuthUser,
    Json(dto): Json<R::Dto>,
) -> AppResult<Response> {
    policy::authorize(&user.role, R::ENTITY, Operation::Create)?;
    if dto.id().is_some() {
        return Err(CoreError::IdAlreadyExists { entity: R::ENTITY }.into());
    }
    check_valid(&dto)?;

    let row = R::insert(&state.pool, &dto).await?;
    let id = row.id();
    tracing::debug!(entity = R::ENTITY, id, "created");
    state.event_bus.publish(EntityEvent::created(R::ENTITY, id));

    let location = format!("{}/{}", R::PATH, id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(row),
    )
        .into_response())
}

/// PUT /{id} -- fully overwrite an existing row.
pub async fn update<R: CrudResource>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(dto): Json<R::Dto>,
) -> AppResult<Json<R::Row>> {
    policy::authorize(&user.role, R::ENTITY, Operation::Update)?;
    check_update_id::<R>(id, &dto)?;
    check_valid(&dto)?;

    let row = R::replace(&state.pool, id, &dto)
        .await?
        .ok_or(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        })?;
    tracing::debug!(entity = R::ENTITY, id, "updated");
    state.event_bus.publish(EntityEvent::updated(R::ENTITY, id));
    Ok(Json(row))
}

/// PATCH /{id} -- merge-patch an existing row.
///
/// Fields absent from the body leave the stored values untouched.
pub async fn partial_update<R: CrudResource>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(dto): Json<R::Dto>,
) -> AppResult<Json<R::Row>> {
    policy::authorize(&user.role, R::ENTITY, Operation::Update)?;
    check_update_id::<R>(id, &dto)?;
    check_valid(&dto)?;

    let row = R::merge(&state.pool, id, &dto)
        .await?
        .ok_or(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        })?;
    tracing::debug!(entity = R::ENTITY, id, "patched");
    state.event_bus.publish(EntityEvent::updated(R::ENTITY, id));
    Ok(Json(row))
}

/// GET / -- list all rows.
pub async fn list<R: CrudResource>(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<R::Row>>> {
    policy::authorize(&user.role, R::ENTITY, Operation::Read)?;
    let rows = R::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /{id} -- fetch one row.
pub async fn get_by_id<R: CrudResource>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<R::Row>> {
    policy::authorize(&user.role, R::ENTITY, Operation::Read)?;
    let row = R::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        })?;
    Ok(Json(row))
}

/// DELETE /{id} -- remove a row unconditionally.
///
/// Always responds 204; the alert fires only when a row was actually
/// removed, so replaying a delete does not re-alert.
pub async fn delete<R: CrudResource>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    policy::authorize(&user.role, R::ENTITY, Operation::Delete)?;
    if R::delete(&state.pool, id).await? {
        tracing::debug!(entity = R::ENTITY, id, "deleted");
        state.event_bus.publish(EntityEvent::deleted(R::ENTITY, id));
    }
    Ok(StatusCode::NO_CONTENT)
}

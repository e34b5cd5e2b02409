//! Generic route pair for a CRUD resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::crud::{self, CrudResource};
use crate::state::AppState;

/// Build the standard route pair for one entity:
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// PATCH  /{id}   -> partial_update
/// DELETE /{id}   -> delete
/// ```
pub fn crud_router<R: CrudResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(crud::list::<R>).post(crud::create::<R>))
        .route(
            "/{id}",
            get(crud::get_by_id::<R>)
                .put(crud::update::<R>)
                .patch(crud::partial_update::<R>)
                .delete(crud::delete::<R>),
        )
}

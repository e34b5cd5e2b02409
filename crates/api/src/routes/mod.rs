//! Route tree.

pub mod crud;
pub mod health;

use axum::routing::get;
use axum::Router;

use bankadvice_db::repositories::{
    AdvisorRepo, AgencyRepo, AppointmentRepo, EnterpriseRepo, ManagerRepo,
};

use crate::handlers;
use crate::handlers::crud::CrudResource;
use crate::state::AppState;

impl CrudResource for AgencyRepo {
    const PATH: &'static str = "/api/agencies";
}

impl CrudResource for EnterpriseRepo {
    const PATH: &'static str = "/api/enterprises";
}

impl CrudResource for AdvisorRepo {
    const PATH: &'static str = "/api/advisors";
}

impl CrudResource for ManagerRepo {
    const PATH: &'static str = "/api/managers";
}

impl CrudResource for AppointmentRepo {
    const PATH: &'static str = "/api/appointments";
}

/// Build the `/api` route tree.
///
/// ```text
/// /agencies, /agencies/{id}          standard CRUD
/// /enterprises, /enterprises/{id}    standard CRUD
/// /advisors, /advisors/{id}          standard CRUD
/// /advisors/user                     current principal's advisor profile
/// /managers, /managers/{id}          standard CRUD
/// /managers/user                     current principal's manager profile
/// /appointments                      list (?manager_id / ?advisor_id), create
/// /appointments/{id}                 get, update, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    // The static /user segment takes priority over the /{id} capture.
    let advisor_routes = Router::new()
        .route("/user", get(handlers::advisor::current_profile))
        .merge(crud::crud_router::<AdvisorRepo>());

    let manager_routes = Router::new()
        .route("/user", get(handlers::manager::current_profile))
        .merge(crud::crud_router::<ManagerRepo>());

    // Appointments swap the generic list for the relationship-scoped one.
    let appointment_routes = Router::new()
        .route(
            "/",
            get(handlers::appointment::list).post(handlers::crud::create::<AppointmentRepo>),
        )
        .route(
            "/{id}",
            get(handlers::crud::get_by_id::<AppointmentRepo>)
                .put(handlers::crud::update::<AppointmentRepo>)
                .patch(handlers::crud::partial_update::<AppointmentRepo>)
                .delete(handlers::crud::delete::<AppointmentRepo>),
        );

    Router::new()
        .nest("/agencies", crud::crud_router::<AgencyRepo>())
        .nest("/enterprises", crud::crud_router::<EnterpriseRepo>())
        .nest("/advisors", advisor_routes)
        .nest("/managers", manager_routes)
        .nest("/appointments", appointment_routes)
}

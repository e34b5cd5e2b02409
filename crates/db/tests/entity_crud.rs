//! Integration tests for the repository layer against a real database:
//! - Create / find round trips
//! - Full overwrite vs merge-patch semantics
//! - Relationship-scoped appointment queries
//! - Principal-linked profile lookups
//! - Foreign-key and unique-constraint behaviour

use assert_matches::assert_matches;
use sqlx::PgPool;

use bankadvice_db::models::advisor::AdvisorDto;
use bankadvice_db::models::agency::AgencyDto;
use bankadvice_db::models::appointment::AppointmentDto;
use bankadvice_db::models::manager::ManagerDto;
use bankadvice_db::models::user::CreateUser;
use bankadvice_db::models::Gender;
use bankadvice_db::repositories::{
    AdvisorRepo, AgencyRepo, AppointmentRepo, CrudRepo, ManagerRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_agency(name: &str) -> AgencyDto {
    AgencyDto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

fn new_advisor(name: &str) -> AdvisorDto {
    AdvisorDto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

fn new_manager(name: &str) -> ManagerDto {
    ManagerDto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

fn new_appointment(manager_id: i64, advisor_id: i64, subject: &str) -> AppointmentDto {
    AppointmentDto {
        subject: Some(subject.to_string()),
        manager_id: Some(manager_id),
        advisor_id: Some(advisor_id),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Create / find round trips
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_then_find_returns_equal_representation(pool: PgPool) {
    let created = AgencyRepo::insert(
        &pool,
        &AgencyDto {
            name: Some("Central".to_string()),
            address: Some("12 Main St".to_string()),
            phone: Some("555-0100".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let found = AgencyRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created agency must be findable");

    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Central");
    assert_eq!(found.address.as_deref(), Some("12 Main St"));
    assert_eq!(found.phone.as_deref(), Some("555-0100"));
}

#[sqlx::test]
async fn find_missing_id_returns_none(pool: PgPool) {
    let found = AdvisorRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn list_returns_rows_in_storage_order(pool: PgPool) {
    let first = AgencyRepo::insert(&pool, &new_agency("A1")).await.unwrap();
    let second = AgencyRepo::insert(&pool, &new_agency("A2")).await.unwrap();

    let all = AgencyRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

// ---------------------------------------------------------------------------
// Full overwrite vs merge-patch
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn replace_overwrites_all_fields(pool: PgPool) {
    let advisor = AdvisorRepo::insert(
        &pool,
        &AdvisorDto {
            name: Some("Bob".to_string()),
            gender: Some(Gender::Male),
            telephone: Some("555-0101".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Full update without telephone clears it.
    let updated = AdvisorRepo::replace(
        &pool,
        advisor.id,
        &AdvisorDto {
            id: Some(advisor.id),
            name: Some("Robert".to_string()),
            gender: Some(Gender::Male),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("row exists");

    assert_eq!(updated.name, "Robert");
    assert!(updated.telephone.is_none());
}

#[sqlx::test]
async fn merge_leaves_absent_fields_untouched(pool: PgPool) {
    let agency = AgencyRepo::insert(&pool, &new_agency("North")).await.unwrap();
    let advisor = AdvisorRepo::insert(&pool, &new_advisor("Bob")).await.unwrap();
    assert!(advisor.agency_id.is_none());

    // Patch only the agency link; the name must survive.
    let patched = AdvisorRepo::merge(
        &pool,
        advisor.id,
        &AdvisorDto {
            id: Some(advisor.id),
            agency_id: Some(agency.id),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("row exists");

    assert_eq!(patched.id, advisor.id);
    assert_eq!(patched.name, "Bob");
    assert_eq!(patched.agency_id, Some(agency.id));
}

#[sqlx::test]
async fn merge_is_idempotent(pool: PgPool) {
    let advisor = AdvisorRepo::insert(&pool, &new_advisor("Carol")).await.unwrap();

    let patch = AdvisorDto {
        id: Some(advisor.id),
        telephone: Some("555-0199".to_string()),
        ..Default::default()
    };

    let once = AdvisorRepo::merge(&pool, advisor.id, &patch)
        .await
        .unwrap()
        .expect("row exists");
    let twice = AdvisorRepo::merge(&pool, advisor.id, &patch)
        .await
        .unwrap()
        .expect("row exists");

    assert_eq!(once.name, twice.name);
    assert_eq!(once.gender, twice.gender);
    assert_eq!(once.telephone, twice.telephone);
    assert_eq!(once.user_id, twice.user_id);
    assert_eq!(once.agency_id, twice.agency_id);
}

#[sqlx::test]
async fn replace_and_merge_missing_id_return_none(pool: PgPool) {
    let replaced = AdvisorRepo::replace(&pool, 999_999, &new_advisor("Ghost"))
        .await
        .unwrap();
    assert!(replaced.is_none());

    let merged = AdvisorRepo::merge(&pool, 999_999, &new_advisor("Ghost"))
        .await
        .unwrap();
    assert!(merged.is_none());

    // Neither call may have created a row.
    assert!(AdvisorRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn delete_is_idempotent(pool: PgPool) {
    let manager = ManagerRepo::insert(&pool, &new_manager("Ada")).await.unwrap();

    assert!(ManagerRepo::delete(&pool, manager.id).await.unwrap());
    // Second delete removes nothing but does not fail.
    assert!(!ManagerRepo::delete(&pool, manager.id).await.unwrap());

    assert!(ManagerRepo::find_by_id(&pool, manager.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Relationship-scoped appointment queries
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn appointments_scoped_by_manager_and_advisor(pool: PgPool) {
    let m1 = ManagerRepo::insert(&pool, &new_manager("M1")).await.unwrap();
    let m2 = ManagerRepo::insert(&pool, &new_manager("M2")).await.unwrap();
    let a1 = AdvisorRepo::insert(&pool, &new_advisor("A1")).await.unwrap();
    let a2 = AdvisorRepo::insert(&pool, &new_advisor("A2")).await.unwrap();

    AppointmentRepo::insert(&pool, &new_appointment(m1.id, a1.id, "kickoff"))
        .await
        .unwrap();
    AppointmentRepo::insert(&pool, &new_appointment(m1.id, a2.id, "review"))
        .await
        .unwrap();
    AppointmentRepo::insert(&pool, &new_appointment(m2.id, a1.id, "audit"))
        .await
        .unwrap();

    let for_m1 = AppointmentRepo::list_by_manager(&pool, m1.id).await.unwrap();
    assert_eq!(for_m1.len(), 2);
    assert!(for_m1.iter().all(|a| a.manager_id == m1.id));

    let for_a1 = AppointmentRepo::list_by_advisor(&pool, a1.id).await.unwrap();
    assert_eq!(for_a1.len(), 2);
    assert!(for_a1.iter().all(|a| a.advisor_id == a1.id));

    let all = AppointmentRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test]
async fn deleting_a_manager_cascades_to_their_appointments(pool: PgPool) {
    let manager = ManagerRepo::insert(&pool, &new_manager("M")).await.unwrap();
    let advisor = AdvisorRepo::insert(&pool, &new_advisor("A")).await.unwrap();
    AppointmentRepo::insert(&pool, &new_appointment(manager.id, advisor.id, "x"))
        .await
        .unwrap();

    assert!(ManagerRepo::delete(&pool, manager.id).await.unwrap());

    assert!(AppointmentRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Principal-linked profiles
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn advisor_profile_resolves_by_user_login(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            login: "bob".to_string(),
        },
    )
    .await
    .unwrap();

    let advisor = AdvisorRepo::insert(
        &pool,
        &AdvisorDto {
            name: Some("Bob".to_string()),
            user_id: Some(user.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let linked = AdvisorRepo::find_by_user_login(&pool, "bob")
        .await
        .unwrap()
        .expect("profile is linked");
    assert_eq!(linked.id, advisor.id);

    // Unknown login resolves to an explicit absence, not an error.
    let missing = AdvisorRepo::find_by_user_login(&pool, "nobody").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn manager_profile_resolves_by_user_login(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            login: "ada".to_string(),
        },
    )
    .await
    .unwrap();

    let manager = ManagerRepo::insert(
        &pool,
        &ManagerDto {
            name: Some("Ada".to_string()),
            user_id: Some(user.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let linked = ManagerRepo::find_by_user_login(&pool, "ada")
        .await
        .unwrap()
        .expect("profile is linked");
    assert_eq!(linked.id, manager.id);
}

// ---------------------------------------------------------------------------
// Constraint behaviour
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn deleting_an_agency_unlinks_but_keeps_advisors(pool: PgPool) {
    let agency = AgencyRepo::insert(&pool, &new_agency("South")).await.unwrap();
    let advisor = AdvisorRepo::insert(
        &pool,
        &AdvisorDto {
            name: Some("Eve".to_string()),
            agency_id: Some(agency.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(AgencyRepo::delete(&pool, agency.id).await.unwrap());

    let survivor = AdvisorRepo::find_by_id(&pool, advisor.id)
        .await
        .unwrap()
        .expect("advisor must survive agency deletion");
    assert!(survivor.agency_id.is_none());
}

#[sqlx::test]
async fn user_link_is_one_to_one(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            login: "dup".to_string(),
        },
    )
    .await
    .unwrap();

    AdvisorRepo::insert(
        &pool,
        &AdvisorDto {
            name: Some("First".to_string()),
            user_id: Some(user.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let second = AdvisorRepo::insert(
        &pool,
        &AdvisorDto {
            name: Some("Second".to_string()),
            user_id: Some(user.id),
            ..Default::default()
        },
    )
    .await;

    assert_matches!(second, Err(sqlx::Error::Database(_)));
}

#[sqlx::test]
async fn appointment_requires_both_participants(pool: PgPool) {
    let manager = ManagerRepo::insert(&pool, &new_manager("M")).await.unwrap();

    let result = AppointmentRepo::insert(
        &pool,
        &AppointmentDto {
            subject: Some("half-booked".to_string()),
            manager_id: Some(manager.id),
            ..Default::default()
        },
    )
    .await;

    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

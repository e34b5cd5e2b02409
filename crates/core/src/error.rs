use crate::types::DbId;

/// Domain errors shared by every resource.
///
/// The identifier-consistency variants carry the entity name so the HTTP
/// layer can attach an `{entity, code}` pair to the response body.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("A new {entity} cannot already have an id")]
    IdAlreadyExists { entity: &'static str },

    #[error("Missing id for {entity}")]
    IdNull { entity: &'static str },

    #[error("Path id {path_id} does not match body id {body_id} for {entity}")]
    IdMismatch {
        entity: &'static str,
        path_id: DbId,
        body_id: DbId,
    },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("No {entity} profile linked to user {login}")]
    ProfileNotLinked { entity: &'static str, login: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Stable machine-readable error code attached to HTTP responses.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::IdAlreadyExists { .. } => "idexists",
            CoreError::IdNull { .. } => "idnull",
            CoreError::IdMismatch { .. } => "idinvalid",
            CoreError::NotFound { .. } => "idnotfound",
            CoreError::ProfileNotLinked { .. } => "nolinkedprofile",
            CoreError::Validation(_) => "validation",
            CoreError::Unauthorized(_) => "unauthorized",
            CoreError::Forbidden(_) => "forbidden",
            CoreError::Internal(_) => "internal",
        }
    }

    /// Entity name for variants that are about a specific resource.
    pub fn entity(&self) -> Option<&'static str> {
        match self {
            CoreError::IdAlreadyExists { entity }
            | CoreError::IdNull { entity }
            | CoreError::IdMismatch { entity, .. }
            | CoreError::NotFound { entity, .. }
            | CoreError::ProfileNotLinked { entity, .. } => Some(*entity),
            CoreError::Validation(_)
            | CoreError::Unauthorized(_)
            | CoreError::Forbidden(_)
            | CoreError::Internal(_) => None,
        }
    }
}

//! Authorization policy: a capability predicate over `{role, entity, operation}`.
//!
//! Every handler consults [`authorize`] before touching persistence. The
//! matrix is deliberately small and lives in one place instead of being
//! scattered across route annotations.

use std::fmt;

use crate::error::CoreError;
use crate::roles::{ROLE_ADMIN, ROLE_ADVISOR, ROLE_MANAGER, ROLE_USER};

/// The four operations a resource exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(s)
    }
}

/// Whether `role` may perform `operation` on `entity`.
///
/// - `ROLE_ADMIN` may do everything.
/// - `ROLE_ADVISOR` / `ROLE_MANAGER` may read everything and mutate
///   appointments (their own scheduling surface).
/// - `ROLE_USER` may read everything.
/// - `ROLE_ANONYMOUS` and unknown roles may do nothing.
pub fn allows(role: &str, entity: &str, operation: Operation) -> bool {
    match role {
        ROLE_ADMIN => true,
        ROLE_ADVISOR | ROLE_MANAGER => {
            operation == Operation::Read || entity == "appointment"
        }
        ROLE_USER => operation == Operation::Read,
        _ => false,
    }
}

/// [`allows`] as a `Result`, with a 403-mapped error on denial.
pub fn authorize(role: &str, entity: &'static str, operation: Operation) -> Result<(), CoreError> {
    if allows(role, entity, operation) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "role {role} may not {operation} {entity}"
        )))
    }
}

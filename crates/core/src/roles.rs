//! Well-known authority name constants.
//!
//! These must match the role claim minted by the identity provider.

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_USER: &str = "ROLE_USER";
pub const ROLE_ANONYMOUS: &str = "ROLE_ANONYMOUS";
pub const ROLE_ADVISOR: &str = "ROLE_ADVISOR";
pub const ROLE_MANAGER: &str = "ROLE_MANAGER";

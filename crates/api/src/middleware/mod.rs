//! Request-scoped extractors.

pub mod auth;

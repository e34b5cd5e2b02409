//! HTTP handlers.
//!
//! The shared CRUD contract lives in [`crud`] and is instantiated once per
//! entity by the route tree; the per-entity modules hold only the surface
//! that is genuinely entity-specific.

pub mod advisor;
pub mod appointment;
pub mod crud;
pub mod manager;

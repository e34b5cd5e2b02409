//! Mutation alert infrastructure.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`EntityEvent`] — the alert envelope emitted after every mutation.
//! - [`alert_log`] — subscriber that logs each alert via `tracing`.

pub mod alert_log;
pub mod bus;

pub use bus::{EntityAction, EntityEvent, EventBus};

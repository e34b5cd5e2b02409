//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`EntityEvent`]s. It is
//! designed to be shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use bankadvice_core::types::{DbId, APPLICATION_NAME};

// ---------------------------------------------------------------------------
// EntityEvent
// ---------------------------------------------------------------------------

/// What happened to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityAction {
    Created,
    Updated,
    Deleted,
}

impl EntityAction {
    fn as_str(self) -> &'static str {
        match self {
            EntityAction::Created => "created",
            EntityAction::Updated => "updated",
            EntityAction::Deleted => "deleted",
        }
    }
}

/// Alert emitted after every successful mutation: the application name,
/// the entity name, and the affected identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityEvent {
    /// Application name, always [`APPLICATION_NAME`].
    pub app: String,
    /// Entity kind, e.g. `"advisor"`.
    pub entity: String,
    /// Identifier of the affected row.
    pub entity_id: DbId,
    pub action: EntityAction,
    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl EntityEvent {
    fn new(entity: &str, entity_id: DbId, action: EntityAction) -> Self {
        Self {
            app: APPLICATION_NAME.to_string(),
            entity: entity.to_string(),
            entity_id,
            action,
            timestamp: Utc::now(),
        }
    }

    pub fn created(entity: &str, entity_id: DbId) -> Self {
        Self::new(entity, entity_id, EntityAction::Created)
    }

    pub fn updated(entity: &str, entity_id: DbId) -> Self {
        Self::new(entity, entity_id, EntityAction::Updated)
    }

    pub fn deleted(entity: &str, entity_id: DbId) -> Self {
        Self::new(entity, entity_id, EntityAction::Deleted)
    }

    /// Dot-separated topic, e.g. `"bankadvice.advisor.created"`.
    pub fn topic(&self) -> String {
        format!("{}.{}.{}", self.app, self.entity, self.action.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`EntityEvent`].
pub struct EventBus {
    sender: broadcast::Sender<EntityEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: EntityEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<EntityEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Subscriber that logs every mutation alert.

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;

use crate::bus::EntityEvent;

/// Consume the receiver until the bus closes, logging each alert.
///
/// Lagged receivers skip the dropped backlog and keep going.
pub async fn run(mut rx: Receiver<EntityEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => {
                tracing::info!(
                    app = %event.app,
                    entity = %event.entity,
                    entity_id = event.entity_id,
                    topic = %event.topic(),
                    "entity alert"
                );
            }
            Err(RecvError::Lagged(missed)) => {
                tracing::warn!(missed, "alert log lagged behind the event bus");
            }
            Err(RecvError::Closed) => break,
        }
    }
    tracing::debug!("alert log stopped: event bus closed");
}

//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`PlatformEvent`]s. It is
//! shared via `Arc<EventBus>` across the application.

use callboard_core::types::{DbId, Timestamp};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// Event types
// ---------------------------------------------------------------------------

/// Well-known `event_type` values published by mutations.
pub mod event_types {
    pub const LEAD_STATUS_UPDATED: &str = "lead.status_updated";
    pub const ACTION_ITEM_RESOLVED: &str = "action_item.resolved";
    pub const CAMPAIGN_STATUS_UPDATED: &str = "campaign.status_updated";
    pub const ORGANIZATION_UPDATED: &str = "organization.updated";
}

// ---------------------------------------------------------------------------
// PlatformEvent
// ---------------------------------------------------------------------------

/// A domain event that occurred inside one organization.
///
/// Constructed via [`PlatformEvent::new`] and enriched with the builder
/// methods [`with_source`](PlatformEvent::with_source),
/// [`with_actor`](PlatformEvent::with_actor),
/// [`with_invalidations`](PlatformEvent::with_invalidations), and
/// [`with_payload`](PlatformEvent::with_payload).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformEvent {
    /// Dot-separated event name, e.g. `"lead.status_updated"`.
    pub event_type: String,

    /// Tenant the event belongs to. Observers outside it never see it.
    pub org_id: DbId,

    /// Optional source entity kind (e.g. `"lead"`, `"campaign"`).
    pub source_entity_type: Option<String>,

    pub source_entity_id: Option<DbId>,

    /// Id of the user whose action triggered the event.
    pub actor_user_id: Option<DbId>,

    /// Dashboard paths whose data is stale after this event.
    pub invalidates: Vec<String>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    pub timestamp: Timestamp,
}

impl PlatformEvent {
    /// Create a new event with only the required fields.
    ///
    /// Optional fields default to `None`, no invalidations, and an empty
    /// JSON object payload.
    pub fn new(event_type: impl Into<String>, org_id: DbId) -> Self {
        Self {
            event_type: event_type.into(),
            org_id,
            source_entity_type: None,
            source_entity_id: None,
            actor_user_id: None,
            invalidates: Vec::new(),
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    pub fn with_source(mut self, entity_type: impl Into<String>, entity_id: DbId) -> Self {
        self.source_entity_type = Some(entity_type.into());
        self.source_entity_id = Some(entity_id);
        self
    }

    pub fn with_actor(mut self, user_id: DbId) -> Self {
        self.actor_user_id = Some(user_id);
        self
    }

    /// Set the paths observers should refetch.
    pub fn with_invalidations<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.invalidates = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
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
/// independently receive every published [`PlatformEvent`].
///
/// ```rust
/// use callboard_events::bus::{event_types, EventBus, PlatformEvent};
/// use uuid::Uuid;
///
/// let bus = EventBus::default();
/// let _rx = bus.subscribe();
///
/// bus.publish(PlatformEvent::new(event_types::LEAD_STATUS_UPDATED, Uuid::nil()));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<PlatformEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest unconsumed messages are dropped and
    /// slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// With no active subscribers the event is dropped.
    pub fn publish(&self, event: PlatformEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("Event published with no subscribers");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlatformEvent> {
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

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();
        let org = Uuid::new_v4();
        let lead = Uuid::new_v4();
        let user = Uuid::new_v4();

        bus.publish(
            PlatformEvent::new(event_types::LEAD_STATUS_UPDATED, org)
                .with_source("lead", lead)
                .with_actor(user)
                .with_invalidations(["/leads", "/dashboard"])
                .with_payload(serde_json::json!({"status": "contacted"})),
        );

        let received = rx.recv().await.expect("should receive the event");
        assert_eq!(received.event_type, "lead.status_updated");
        assert_eq!(received.org_id, org);
        assert_eq!(received.source_entity_type.as_deref(), Some("lead"));
        assert_eq!(received.source_entity_id, Some(lead));
        assert_eq!(received.actor_user_id, Some(user));
        assert_eq!(received.invalidates, vec!["/leads", "/dashboard"]);
        assert_eq!(received.payload["status"], "contacted");
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(PlatformEvent::new("multi.test", Uuid::nil()));

        let e1 = rx1.recv().await.expect("subscriber 1 should receive");
        let e2 = rx2.recv().await.expect("subscriber 2 should receive");
        assert_eq!(e1, e2);
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = EventBus::default();
        bus.publish(PlatformEvent::new("orphan.event", Uuid::nil()));
    }

    #[test]
    fn default_event_has_empty_optional_fields() {
        let event = PlatformEvent::new("bare.event", Uuid::nil());
        assert!(event.source_entity_type.is_none());
        assert!(event.actor_user_id.is_none());
        assert!(event.invalidates.is_empty());
        assert!(event.payload.is_object());
    }

    #[tokio::test]
    async fn slow_subscriber_observes_lag() {
        let bus = EventBus::new(2);
        let mut rx = bus.subscribe();
        for i in 0..4 {
            bus.publish(PlatformEvent::new(format!("e{i}"), Uuid::nil()));
        }
        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Lagged(2))
        ));
        assert_eq!(rx.recv().await.unwrap().event_type, "e2");
    }
}

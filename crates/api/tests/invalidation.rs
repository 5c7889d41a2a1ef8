//! Event bus to WebSocket fan-out.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::Message;
use callboard_api::invalidation::{invalidation_message, InvalidationRouter};
use callboard_api::ws::WsManager;
use callboard_events::{event_types, EventBus, PlatformEvent};
use uuid::Uuid;

fn lead_event(org: Uuid) -> PlatformEvent {
    PlatformEvent::new(event_types::LEAD_STATUS_UPDATED, org)
        .with_invalidations(["/leads", "/dashboard"])
}

#[test]
fn frame_shape() {
    let text = invalidation_message(&lead_event(Uuid::nil())).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "invalidate",
            "paths": ["/leads", "/dashboard"],
            "event_type": "lead.status_updated",
        })
    );
}

#[tokio::test]
async fn route_event_targets_only_the_events_org() {
    let manager = Arc::new(WsManager::new());
    let acme = Uuid::new_v4();
    let mut acme_rx = manager.add("acme".into(), Uuid::new_v4(), acme).await;
    let mut other_rx = manager.add("other".into(), Uuid::new_v4(), Uuid::new_v4()).await;
    let router = InvalidationRouter::new(Arc::clone(&manager));

    assert_eq!(router.route_event(&lead_event(acme)).await, 1);

    match acme_rx.try_recv() {
        Ok(Message::Text(text)) => assert!(text.as_str().contains("\"invalidate\"")),
        other => panic!("expected a text frame, got {other:?}"),
    }
    assert!(other_rx.try_recv().is_err());
}

#[tokio::test]
async fn events_without_paths_are_not_forwarded() {
    let manager = Arc::new(WsManager::new());
    let org = Uuid::new_v4();
    let mut rx = manager.add("c".into(), Uuid::new_v4(), org).await;
    let router = InvalidationRouter::new(Arc::clone(&manager));

    let sent = router
        .route_event(&PlatformEvent::new("something.happened", org))
        .await;

    assert_eq!(sent, 0);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn run_forwards_published_events_and_stops_when_bus_drops() {
    let manager = Arc::new(WsManager::new());
    let org = Uuid::new_v4();
    let mut rx = manager.add("c".into(), Uuid::new_v4(), org).await;

    let bus = EventBus::default();
    let handle = tokio::spawn(InvalidationRouter::new(Arc::clone(&manager)).run(bus.subscribe()));

    bus.publish(lead_event(org));
    let frame = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("frame should arrive")
        .expect("channel open");
    assert!(matches!(frame, Message::Text(_)));

    drop(bus);
    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("router should stop once the bus is gone")
        .unwrap();
}

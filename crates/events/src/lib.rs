//! Callboard's in-process event bus.
//!
//! Mutations publish a [`PlatformEvent`] naming the dashboard paths they
//! made stale; the API's invalidation router fans those out to connected
//! WebSocket clients.

pub mod bus;

pub use bus::{event_types, EventBus, PlatformEvent};

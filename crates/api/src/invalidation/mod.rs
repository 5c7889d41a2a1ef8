//! Fan-out of stale-view notices to connected dashboards.
//!
//! The [`InvalidationRouter`] subscribes to the event bus and forwards each
//! event's `invalidates` paths to the WebSocket connections of the event's
//! organization.

pub mod router;

pub use router::{invalidation_message, InvalidationRouter};

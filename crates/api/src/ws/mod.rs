//! WebSocket infrastructure for pushing invalidations to dashboards.
//!
//! Provides connection management, heartbeat monitoring, and the HTTP
//! upgrade handler.

mod handler;
mod heartbeat;
pub mod manager;

pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;

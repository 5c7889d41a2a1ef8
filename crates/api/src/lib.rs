//! Callboard API server library.
//!
//! Exposes the building blocks (config, state, error handling, actions,
//! routes, WebSocket and invalidation infrastructure) so integration tests
//! and the binary entrypoint share them.

pub mod actions;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod invalidation;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod ws;

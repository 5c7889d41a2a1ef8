//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the session from a JWT Bearer token.

pub mod auth;

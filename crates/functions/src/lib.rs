//! Client for the hosted backend's edge functions.
//!
//! Functions are invoked by name with a JSON body and answer with JSON.
//! See [`FunctionsClient::invoke`].

pub mod client;
pub mod config;

pub use client::{FunctionError, FunctionsClient};
pub use config::FunctionsConfig;

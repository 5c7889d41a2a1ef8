//! Session token validation.
//!
//! Tokens are issued by the hosted auth backend; this service only checks
//! them. [`jwt::generate_access_token`] exists for tooling and tests.

pub mod jwt;

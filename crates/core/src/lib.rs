//! Callboard domain core.
//!
//! Pure types and logic shared by the database, event, and API crates:
//! closed status enumerations, display formatting, the lead timeline
//! merge, and input validation. Nothing in this crate performs I/O.

pub mod error;
pub mod format;
pub mod paging;
pub mod status;
pub mod timeline;
pub mod types;
pub mod validation;

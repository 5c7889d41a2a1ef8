//! Follow-up action item rows.

use callboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An `action_items` row joined with the lead's contact name.
#[derive(Debug, Clone, FromRow)]
pub struct ActionItemRow {
    pub id: DbId,
    pub lead_id: Option<DbId>,
    pub call_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub is_resolved: bool,
    pub resolved_at: Option<Timestamp>,
    pub resolution_type: Option<String>,
    pub created_at: Timestamp,
    pub contact_first_name: Option<String>,
    pub contact_last_name: Option<String>,
}

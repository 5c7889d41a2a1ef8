//! Voice agent rows.

use callboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `agents` table.
#[derive(Debug, Clone, FromRow)]
pub struct Agent {
    pub id: DbId,
    pub org_id: DbId,
    pub name: String,
    pub agent_type: String,
    pub direction: String,
    pub status: String,
    pub phone_number: Option<String>,
    pub created_at: Timestamp,
}

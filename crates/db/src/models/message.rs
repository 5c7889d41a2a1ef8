//! SMS and email rows used by the lead timeline.

use callboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `sms_messages` table.
#[derive(Debug, Clone, FromRow)]
pub struct SmsRow {
    pub id: DbId,
    pub direction: String,
    pub body: String,
    pub created_at: Timestamp,
}

/// A row from the `emails` table.
#[derive(Debug, Clone, FromRow)]
pub struct EmailRow {
    pub id: DbId,
    pub direction: String,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub created_at: Timestamp,
}

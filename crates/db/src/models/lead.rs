//! Lead rows.

use callboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A `leads` row joined with its contact and campaign.
#[derive(Debug, Clone, FromRow)]
pub struct LeadRow {
    pub id: DbId,
    pub status: String,
    pub last_call_outcome: Option<String>,
    pub last_activity_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub contact_id: Option<DbId>,
    pub contact_first_name: Option<String>,
    pub contact_last_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub contact_company: Option<String>,
    pub campaign_id: Option<DbId>,
    pub campaign_name: Option<String>,
}

//! Campaign rows.

use callboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A `campaigns` row joined with its agent and lead count.
#[derive(Debug, Clone, FromRow)]
pub struct CampaignRow {
    pub id: DbId,
    pub name: String,
    pub status: String,
    pub created_at: Timestamp,
    pub agent_id: Option<DbId>,
    pub agent_name: Option<String>,
    pub lead_count: i64,
}

/// A [`CampaignRow`] with the extra columns shown on the campaign page.
#[derive(Debug, Clone, FromRow)]
pub struct CampaignDetailRow {
    #[sqlx(flatten)]
    pub campaign: CampaignRow,
    pub agent_direction: Option<String>,
    pub call_count: i64,
}

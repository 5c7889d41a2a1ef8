//! Call history rows.

use callboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A `calls` row joined with its contact, agent, and campaign.
///
/// Related columns are `None` when the foreign key is null or the
/// referenced row is gone.
#[derive(Debug, Clone, FromRow)]
pub struct CallRow {
    pub id: DbId,
    pub lead_id: Option<DbId>,
    pub direction: String,
    pub duration_seconds: Option<i32>,
    pub outcome: Option<String>,
    pub ai_summary: Option<String>,
    pub created_at: Timestamp,
    pub contact_first_name: Option<String>,
    pub contact_last_name: Option<String>,
    pub contact_phone: Option<String>,
    pub agent_name: Option<String>,
    pub campaign_name: Option<String>,
}

/// A [`CallRow`] plus the heavy transcript and recording columns, which are
/// only selected for the single-call view.
#[derive(Debug, Clone, FromRow)]
pub struct CallDetailRow {
    #[sqlx(flatten)]
    pub call: CallRow,
    pub transcript_text: Option<String>,
    pub recording_url: Option<String>,
}

/// The columns of a call needed for a lead's timeline.
#[derive(Debug, Clone, FromRow)]
pub struct CallTimelineRow {
    pub id: DbId,
    pub direction: String,
    pub duration_seconds: Option<i32>,
    pub outcome: Option<String>,
    pub ai_summary: Option<String>,
    pub created_at: Timestamp,
}

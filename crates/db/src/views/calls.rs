//! Calls page: call log list and single-call detail.

use callboard_core::format::{
    contact_name, format_call_time, format_duration, or_placeholder, UNKNOWN_PLACEHOLDER,
};
use callboard_core::paging::LIST_PAGE_LIMIT;
use callboard_core::status::{label_or_raw, Direction};
use callboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::PgPool;

use super::{row_or_none, rows_or_empty};
use crate::models::call::{CallDetailRow, CallRow};
use crate::repositories::CallRepo;

/// One row of the call log.
#[derive(Debug, Clone, Serialize)]
pub struct CallListItem {
    pub id: DbId,
    pub lead_id: Option<DbId>,
    pub contact_name: String,
    pub phone: String,
    pub agent_name: String,
    pub campaign_name: String,
    pub direction: String,
    pub duration: String,
    pub outcome: String,
    pub time: String,
    pub summary: String,
}

/// The single-call view with transcript and recording.
#[derive(Debug, Clone, Serialize)]
pub struct CallDetail {
    #[serde(flatten)]
    pub call: CallListItem,
    pub transcript: Option<String>,
    pub recording_url: Option<String>,
    pub created_at: Timestamp,
}

/// Map a joined call row onto its list view.
pub fn call_list_item(row: CallRow, now: Timestamp) -> CallListItem {
    let display_name = contact_name(
        row.contact_first_name.as_deref(),
        row.contact_last_name.as_deref(),
    )
    .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string());

    CallListItem {
        id: row.id,
        lead_id: row.lead_id,
        contact_name: display_name,
        phone: or_placeholder(row.contact_phone.as_deref()),
        agent_name: row
            .agent_name
            .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string()),
        campaign_name: or_placeholder(row.campaign_name.as_deref()),
        direction: label_or_raw::<Direction>(&row.direction),
        duration: format_duration(row.duration_seconds.unwrap_or(0).into()),
        outcome: or_placeholder(row.outcome.as_deref()),
        time: format_call_time(row.created_at, now),
        summary: or_placeholder(row.ai_summary.as_deref()),
    }
}

/// Map a call detail row onto its view.
pub fn call_detail(row: CallDetailRow, now: Timestamp) -> CallDetail {
    let created_at = row.call.created_at;
    CallDetail {
        call: call_list_item(row.call, now),
        transcript: row.transcript_text,
        recording_url: row.recording_url,
        created_at,
    }
}

/// The call log: up to [`LIST_PAGE_LIMIT`] calls, most recent first.
pub async fn list_calls(pool: &PgPool, org_id: DbId, now: Timestamp) -> Vec<CallListItem> {
    let rows = rows_or_empty(
        CallRepo::list_for_org(pool, org_id, LIST_PAGE_LIMIT).await,
        "calls",
        org_id,
    );
    rows.into_iter().map(|r| call_list_item(r, now)).collect()
}

/// One call, or `None` if it does not exist in the organization.
pub async fn get_call_by_id(
    pool: &PgPool,
    org_id: DbId,
    id: DbId,
    now: Timestamp,
) -> Option<CallDetail> {
    row_or_none(CallRepo::find_detail(pool, org_id, id).await, "call", id)
        .map(|r| call_detail(r, now))
}

//! Dashboard home: headline counts, recent calls, and open action items.

use callboard_core::format::{
    contact_name, format_relative_time, or_placeholder, EMPTY_PLACEHOLDER,
};
use callboard_core::paging::{LIST_PAGE_LIMIT, RECENT_CALLS_LIMIT};
use callboard_core::status::{CampaignStatus, LeadStatus};
use callboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::PgPool;

use super::calls::{call_list_item, CallListItem};
use super::{count_or_zero, rows_or_empty};
use crate::models::action_item::ActionItemRow;
use crate::repositories::{ActionItemRepo, CallRepo, CampaignRepo, LeadRepo};

/// Headline numbers for the dashboard cards.
///
/// Each count is independent; one that fails to load reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_calls: i64,
    /// Calls since midnight UTC of `now`.
    pub calls_today: i64,
    pub total_leads: i64,
    pub appointments_set: i64,
    pub active_campaigns: i64,
    pub open_action_items: i64,
}

/// One open follow-up in the dashboard's action list.
#[derive(Debug, Clone, Serialize)]
pub struct ActionItemView {
    pub id: DbId,
    pub lead_id: Option<DbId>,
    pub call_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub contact_name: String,
    pub created: String,
    pub created_at: Timestamp,
}

/// Start of the UTC calendar day containing `now`.
fn start_of_day(now: Timestamp) -> Timestamp {
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now)
}

pub async fn get_dashboard_stats(pool: &PgPool, org_id: DbId, now: Timestamp) -> DashboardStats {
    let (total_calls, calls_today, total_leads, appointments_set, active_campaigns, open_items) = tokio::join!(
        CallRepo::count_for_org(pool, org_id),
        CallRepo::count_since(pool, org_id, start_of_day(now)),
        LeadRepo::count_for_org(pool, org_id),
        LeadRepo::count_with_status(pool, org_id, LeadStatus::AppointmentSet),
        CampaignRepo::count_with_status(pool, org_id, CampaignStatus::Active),
        ActionItemRepo::count_open(pool, org_id),
    );

    DashboardStats {
        total_calls: count_or_zero(total_calls, "total_calls", org_id),
        calls_today: count_or_zero(calls_today, "calls_today", org_id),
        total_leads: count_or_zero(total_leads, "total_leads", org_id),
        appointments_set: count_or_zero(appointments_set, "appointments_set", org_id),
        active_campaigns: count_or_zero(active_campaigns, "active_campaigns", org_id),
        open_action_items: count_or_zero(open_items, "open_action_items", org_id),
    }
}

/// The [`RECENT_CALLS_LIMIT`] most recent calls.
pub async fn list_recent_calls(pool: &PgPool, org_id: DbId, now: Timestamp) -> Vec<CallListItem> {
    rows_or_empty(
        CallRepo::list_for_org(pool, org_id, RECENT_CALLS_LIMIT).await,
        "recent_calls",
        org_id,
    )
    .into_iter()
    .map(|r| call_list_item(r, now))
    .collect()
}

pub fn action_item_view(row: ActionItemRow, now: Timestamp) -> ActionItemView {
    let display_name = contact_name(
        row.contact_first_name.as_deref(),
        row.contact_last_name.as_deref(),
    )
    .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string());
    ActionItemView {
        id: row.id,
        lead_id: row.lead_id,
        call_id: row.call_id,
        title: row.title,
        description: or_placeholder(row.description.as_deref()),
        contact_name: display_name,
        created: format_relative_time(row.created_at, now),
        created_at: row.created_at,
    }
}

/// Unresolved action items, newest first.
pub async fn list_open_action_items(
    pool: &PgPool,
    org_id: DbId,
    now: Timestamp,
) -> Vec<ActionItemView> {
    rows_or_empty(
        ActionItemRepo::list_open_for_org(pool, org_id, LIST_PAGE_LIMIT).await,
        "action_items",
        org_id,
    )
    .into_iter()
    .map(|r| action_item_view(r, now))
    .collect()
}

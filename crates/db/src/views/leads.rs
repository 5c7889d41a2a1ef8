//! Leads page: pipeline list, lead detail, and the activity timeline.

use callboard_core::format::{
    contact_name, format_call_time, format_duration, format_relative_time, or_placeholder,
    EMPTY_PLACEHOLDER, UNKNOWN_PLACEHOLDER,
};
use callboard_core::paging::LIST_PAGE_LIMIT;
use callboard_core::status::{label_or_raw, Direction, LeadStatus};
use callboard_core::timeline::{
    merge_timeline, TimelineEvent, TimelineEventKind, TIMELINE_SOURCE_LIMIT,
};
use callboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::PgPool;

use super::{row_or_none, rows_or_empty};
use crate::models::call::CallTimelineRow;
use crate::models::lead::LeadRow;
use crate::models::message::{EmailRow, SmsRow};
use crate::repositories::{CallRepo, LeadRepo, MessageRepo};

/// Longest message body shown in a timeline entry before truncation.
const TIMELINE_DETAIL_MAX_CHARS: usize = 140;

/// One row of the leads pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct LeadListItem {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub campaign_name: String,
    /// Stored status value, e.g. `appt_set`.
    pub status: String,
    /// Display label, e.g. `Appt Set`.
    pub status_label: String,
    pub last_call_outcome: String,
    pub last_activity: String,
}

/// The single-lead view.
#[derive(Debug, Clone, Serialize)]
pub struct LeadDetail {
    #[serde(flatten)]
    pub lead: LeadListItem,
    pub contact_id: Option<DbId>,
    pub campaign_id: Option<DbId>,
    pub last_activity_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Map a joined lead row onto its list view.
pub fn lead_list_item(row: &LeadRow, now: Timestamp) -> LeadListItem {
    let name = contact_name(
        row.contact_first_name.as_deref(),
        row.contact_last_name.as_deref(),
    )
    .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string());

    LeadListItem {
        id: row.id,
        name,
        phone: or_placeholder(row.contact_phone.as_deref()),
        email: or_placeholder(row.contact_email.as_deref()),
        company: or_placeholder(row.contact_company.as_deref()),
        campaign_name: or_placeholder(row.campaign_name.as_deref()),
        status: row.status.clone(),
        status_label: label_or_raw::<LeadStatus>(&row.status),
        last_call_outcome: or_placeholder(row.last_call_outcome.as_deref()),
        last_activity: row
            .last_activity_at
            .map(|ts| format_relative_time(ts, now))
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string()),
    }
}

/// Map a joined lead row onto the detail view.
pub fn lead_detail(row: &LeadRow, now: Timestamp) -> LeadDetail {
    LeadDetail {
        lead: lead_list_item(row, now),
        contact_id: row.contact_id,
        campaign_id: row.campaign_id,
        last_activity_at: row.last_activity_at,
        created_at: row.created_at,
    }
}

/// The pipeline: up to [`LIST_PAGE_LIMIT`] leads by most recent activity,
/// never-contacted leads last.
pub async fn list_leads(pool: &PgPool, org_id: DbId, now: Timestamp) -> Vec<LeadListItem> {
    let rows = rows_or_empty(
        LeadRepo::list_for_org(pool, org_id, LIST_PAGE_LIMIT).await,
        "leads",
        org_id,
    );
    rows.iter().map(|r| lead_list_item(r, now)).collect()
}

/// One lead, or `None` if it does not exist in the organization.
pub async fn get_lead_by_id(
    pool: &PgPool,
    org_id: DbId,
    id: DbId,
    now: Timestamp,
) -> Option<LeadDetail> {
    row_or_none(LeadRepo::find_by_id(pool, org_id, id).await, "lead", id)
        .map(|r| lead_detail(&r, now))
}

/// The lead's activity feed: its latest calls, SMS, and emails merged
/// newest-first.
///
/// The three sources are fetched concurrently, each capped at
/// [`TIMELINE_SOURCE_LIMIT`]. A failed source contributes nothing.
pub async fn get_lead_timeline(
    pool: &PgPool,
    org_id: DbId,
    lead_id: DbId,
    now: Timestamp,
) -> Vec<TimelineEvent> {
    let (calls, sms, emails) = tokio::join!(
        CallRepo::list_for_lead(pool, org_id, lead_id, TIMELINE_SOURCE_LIMIT),
        MessageRepo::list_sms_for_lead(pool, org_id, lead_id, TIMELINE_SOURCE_LIMIT),
        MessageRepo::list_emails_for_lead(pool, org_id, lead_id, TIMELINE_SOURCE_LIMIT),
    );

    merge_timeline(
        rows_or_empty(calls, "timeline.calls", org_id)
            .into_iter()
            .map(|r| call_event(r, now))
            .collect(),
        rows_or_empty(sms, "timeline.sms", org_id)
            .into_iter()
            .map(|r| sms_event(r, now))
            .collect(),
        rows_or_empty(emails, "timeline.emails", org_id)
            .into_iter()
            .map(|r| email_event(r, now))
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Timeline entry builders
// ---------------------------------------------------------------------------

fn is_outbound(direction: &str) -> bool {
    direction == Direction::Outbound.as_str()
}

/// `Outbound call` / `4:32 · interested`, or the AI summary when present.
pub fn call_event(row: CallTimelineRow, now: Timestamp) -> TimelineEvent {
    let title = if is_outbound(&row.direction) {
        "Outbound call"
    } else {
        "Inbound call"
    };
    let duration = format_duration(row.duration_seconds.unwrap_or(0).into());
    let detail = match (row.ai_summary, row.outcome) {
        (Some(summary), _) if !summary.trim().is_empty() => truncate(&summary),
        (_, Some(outcome)) => format!("{duration} · {outcome}"),
        _ => duration,
    };

    TimelineEvent {
        kind: TimelineEventKind::Call,
        id: row.id,
        time: format_call_time(row.created_at, now),
        title: title.to_string(),
        detail,
        created_at: row.created_at,
    }
}

pub fn sms_event(row: SmsRow, now: Timestamp) -> TimelineEvent {
    let title = if is_outbound(&row.direction) {
        "SMS sent"
    } else {
        "SMS received"
    };
    TimelineEvent {
        kind: TimelineEventKind::Sms,
        id: row.id,
        time: format_call_time(row.created_at, now),
        title: title.to_string(),
        detail: truncate(&row.body),
        created_at: row.created_at,
    }
}

pub fn email_event(row: EmailRow, now: Timestamp) -> TimelineEvent {
    let title = match row.subject.as_deref().map(str::trim) {
        Some(subject) if !subject.is_empty() => subject.to_string(),
        _ if is_outbound(&row.direction) => "Email sent".to_string(),
        _ => "Email received".to_string(),
    };
    TimelineEvent {
        kind: TimelineEventKind::Email,
        id: row.id,
        time: format_call_time(row.created_at, now),
        title,
        detail: row.body.as_deref().map(truncate).unwrap_or_default(),
        created_at: row.created_at,
    }
}

/// Cut text to [`TIMELINE_DETAIL_MAX_CHARS`] characters, marking the cut.
fn truncate(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= TIMELINE_DETAIL_MAX_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(TIMELINE_DETAIL_MAX_CHARS).collect();
    format!("{}…", cut.trim_end())
}

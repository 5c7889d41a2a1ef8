//! Lead activity timeline: a read-time merge of calls, SMS, and email.
//!
//! Each source is fetched independently (capped at
//! [`TIMELINE_SOURCE_LIMIT`]) and the results are concatenated and sorted
//! newest-first. Nothing here is persisted.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// Maximum rows fetched from each timeline source.
pub const TIMELINE_SOURCE_LIMIT: i64 = 20;

/// The source a timeline entry was synthesized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    Call,
    Sms,
    Email,
}

/// One entry in a lead's activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEvent {
    #[serde(rename = "type")]
    pub kind: TimelineEventKind,
    /// Id of the underlying call, message, or email row.
    pub id: DbId,
    /// Display time, e.g. `Today 2:45 PM`.
    pub time: String,
    pub title: String,
    pub detail: String,
    pub created_at: Timestamp,
}

/// Merge the three per-source lists into one feed sorted by `created_at`
/// descending.
///
/// This is a concatenation followed by a stable sort, not a k-way merge:
/// entries with equal timestamps keep their source order (calls, then SMS,
/// then email), and the result holds at most the sum of the input lengths.
pub fn merge_timeline(
    calls: Vec<TimelineEvent>,
    sms: Vec<TimelineEvent>,
    emails: Vec<TimelineEvent>,
) -> Vec<TimelineEvent> {
    let mut events = Vec::with_capacity(calls.len() + sms.len() + emails.len());
    events.extend(calls);
    events.extend(sms);
    events.extend(emails);
    events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    events
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn base() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn event(kind: TimelineEventKind, minutes_ago: i64) -> TimelineEvent {
        TimelineEvent {
            kind,
            id: Uuid::new_v4(),
            time: String::new(),
            title: String::new(),
            detail: String::new(),
            created_at: base() - Duration::minutes(minutes_ago),
        }
    }

    fn many(kind: TimelineEventKind, count: i64, offset: i64, step: i64) -> Vec<TimelineEvent> {
        (0..count).map(|i| event(kind, offset + i * step)).collect()
    }

    #[test]
    fn interleaves_sources_newest_first() {
        let merged = merge_timeline(
            vec![event(TimelineEventKind::Call, 10), event(TimelineEventKind::Call, 40)],
            vec![event(TimelineEventKind::Sms, 5)],
            vec![event(TimelineEventKind::Email, 20)],
        );

        let kinds: Vec<_> = merged.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TimelineEventKind::Sms,
                TimelineEventKind::Call,
                TimelineEventKind::Email,
                TimelineEventKind::Call,
            ]
        );
    }

    #[test]
    fn result_is_sorted_descending() {
        let merged = merge_timeline(
            many(TimelineEventKind::Call, 20, 0, 7),
            many(TimelineEventKind::Sms, 20, 3, 5),
            many(TimelineEventKind::Email, 20, 1, 11),
        );

        assert!(merged
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[test]
    fn full_sources_cap_at_sixty() {
        let merged = merge_timeline(
            many(TimelineEventKind::Call, TIMELINE_SOURCE_LIMIT, 0, 1),
            many(TimelineEventKind::Sms, TIMELINE_SOURCE_LIMIT, 0, 2),
            many(TimelineEventKind::Email, TIMELINE_SOURCE_LIMIT, 0, 3),
        );
        assert_eq!(merged.len(), 60);
    }

    #[test]
    fn equal_timestamps_keep_source_order() {
        let call = event(TimelineEventKind::Call, 15);
        let sms = event(TimelineEventKind::Sms, 15);
        let email = event(TimelineEventKind::Email, 15);
        let (call_id, sms_id, email_id) = (call.id, sms.id, email.id);

        let merged = merge_timeline(vec![call], vec![sms], vec![email]);

        let ids: Vec<_> = merged.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![call_id, sms_id, email_id]);
    }

    #[test]
    fn empty_sources_yield_empty_feed() {
        assert!(merge_timeline(vec![], vec![], vec![]).is_empty());
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(event(TimelineEventKind::Sms, 1)).unwrap();
        assert_eq!(json["type"], "sms");
    }
}

//! Repository for the `calls` table.

use callboard_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::call::{CallDetailRow, CallRow, CallTimelineRow};

/// Select list for [`CallRow`]; expects `calls c` joined as in [`FROM_JOINED`].
const LIST_COLUMNS: &str = "c.id, c.lead_id, c.direction, c.duration_seconds, c.outcome, \
     c.ai_summary, c.created_at, \
     ct.first_name AS contact_first_name, ct.last_name AS contact_last_name, \
     ct.phone AS contact_phone, a.name AS agent_name, cp.name AS campaign_name";

const FROM_JOINED: &str = "FROM calls c \
     LEFT JOIN contacts ct ON ct.id = c.contact_id \
     LEFT JOIN agents a ON a.id = c.agent_id \
     LEFT JOIN campaigns cp ON cp.id = c.campaign_id";

/// Provides read access to call history.
pub struct CallRepo;

impl CallRepo {
    /// List an organization's calls, most recent first.
    pub async fn list_for_org(
        pool: &PgPool,
        org_id: DbId,
        limit: i64,
    ) -> Result<Vec<CallRow>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS} {FROM_JOINED} \
             WHERE c.org_id = $1 \
             ORDER BY c.created_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, CallRow>(&query)
            .bind(org_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find one call with its transcript and recording URL.
    pub async fn find_detail(
        pool: &PgPool,
        org_id: DbId,
        id: DbId,
    ) -> Result<Option<CallDetailRow>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS}, c.transcript_text, c.recording_url {FROM_JOINED} \
             WHERE c.org_id = $1 AND c.id = $2"
        );
        sqlx::query_as::<_, CallDetailRow>(&query)
            .bind(org_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the most recent calls placed to or from a lead.
    pub async fn list_for_lead(
        pool: &PgPool,
        org_id: DbId,
        lead_id: DbId,
        limit: i64,
    ) -> Result<Vec<CallTimelineRow>, sqlx::Error> {
        sqlx::query_as::<_, CallTimelineRow>(
            "SELECT id, direction, duration_seconds, outcome, ai_summary, created_at \
             FROM calls \
             WHERE org_id = $1 AND lead_id = $2 \
             ORDER BY created_at DESC \
             LIMIT $3",
        )
        .bind(org_id)
        .bind(lead_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Count all of an organization's calls.
    pub async fn count_for_org(pool: &PgPool, org_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM calls WHERE org_id = $1")
                .bind(org_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }

    /// Count calls created at or after `since`.
    pub async fn count_since(
        pool: &PgPool,
        org_id: DbId,
        since: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM calls WHERE org_id = $1 AND created_at >= $2",
        )
        .bind(org_id)
        .bind(since)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}

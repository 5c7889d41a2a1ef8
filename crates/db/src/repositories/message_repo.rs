//! Repository for the `sms_messages` and `emails` tables.

use callboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::message::{EmailRow, SmsRow};

/// Provides read access to a lead's SMS and email history.
pub struct MessageRepo;

impl MessageRepo {
    /// List the most recent SMS messages exchanged with a lead.
    pub async fn list_sms_for_lead(
        pool: &PgPool,
        org_id: DbId,
        lead_id: DbId,
        limit: i64,
    ) -> Result<Vec<SmsRow>, sqlx::Error> {
        sqlx::query_as::<_, SmsRow>(
            "SELECT id, direction, body, created_at \
             FROM sms_messages \
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

    /// List the most recent emails exchanged with a lead.
    pub async fn list_emails_for_lead(
        pool: &PgPool,
        org_id: DbId,
        lead_id: DbId,
        limit: i64,
    ) -> Result<Vec<EmailRow>, sqlx::Error> {
        sqlx::query_as::<_, EmailRow>(
            "SELECT id, direction, subject, body, created_at \
             FROM emails \
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
}

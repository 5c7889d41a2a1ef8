//! Repository for the `leads` table.

use callboard_core::status::LeadStatus;
use callboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::lead::LeadRow;

/// Select list for [`LeadRow`]; expects `leads l` joined as in [`FROM_JOINED`].
const COLUMNS: &str = "l.id, l.status, l.last_call_outcome, l.last_activity_at, l.created_at, \
     l.contact_id, ct.first_name AS contact_first_name, ct.last_name AS contact_last_name, \
     ct.phone AS contact_phone, ct.email AS contact_email, ct.company AS contact_company, \
     l.campaign_id, cp.name AS campaign_name";

const FROM_JOINED: &str = "FROM leads l \
     LEFT JOIN contacts ct ON ct.id = l.contact_id \
     LEFT JOIN campaigns cp ON cp.id = l.campaign_id";

/// Provides reads and status updates for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// List an organization's leads by most recent activity.
    ///
    /// Leads that have never been contacted sort last.
    pub async fn list_for_org(
        pool: &PgPool,
        org_id: DbId,
        limit: i64,
    ) -> Result<Vec<LeadRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM_JOINED} \
             WHERE l.org_id = $1 \
             ORDER BY l.last_activity_at DESC NULLS LAST, l.created_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, LeadRow>(&query)
            .bind(org_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a lead by ID within an organization.
    pub async fn find_by_id(
        pool: &PgPool,
        org_id: DbId,
        id: DbId,
    ) -> Result<Option<LeadRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM_JOINED} WHERE l.org_id = $1 AND l.id = $2");
        sqlx::query_as::<_, LeadRow>(&query)
            .bind(org_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a lead's status.
    ///
    /// Returns `true` if the lead exists in the organization and was updated.
    pub async fn update_status(
        pool: &PgPool,
        org_id: DbId,
        id: DbId,
        status: LeadStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE leads SET status = $3 WHERE org_id = $1 AND id = $2")
            .bind(org_id)
            .bind(id)
            .bind(status.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all of an organization's leads.
    pub async fn count_for_org(pool: &PgPool, org_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM leads WHERE org_id = $1")
                .bind(org_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }

    /// Count leads currently in `status`.
    pub async fn count_with_status(
        pool: &PgPool,
        org_id: DbId,
        status: LeadStatus,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM leads WHERE org_id = $1 AND status = $2")
                .bind(org_id)
                .bind(status.as_str())
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }
}

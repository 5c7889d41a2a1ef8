//! Repository for the `campaigns` table.

use callboard_core::status::CampaignStatus;
use callboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::campaign::{CampaignDetailRow, CampaignRow};

/// Select list for [`CampaignRow`]; expects `campaigns cp LEFT JOIN agents a`.
const COLUMNS: &str = "cp.id, cp.name, cp.status, cp.created_at, cp.agent_id, \
     a.name AS agent_name, \
     (SELECT COUNT(*) FROM leads l WHERE l.campaign_id = cp.id) AS lead_count";

/// Provides reads and status updates for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// List an organization's campaigns, newest first.
    pub async fn list_for_org(
        pool: &PgPool,
        org_id: DbId,
        limit: i64,
    ) -> Result<Vec<CampaignRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} \
             FROM campaigns cp LEFT JOIN agents a ON a.id = cp.agent_id \
             WHERE cp.org_id = $1 \
             ORDER BY cp.created_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, CampaignRow>(&query)
            .bind(org_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find one campaign with its agent direction and call count.
    pub async fn find_detail(
        pool: &PgPool,
        org_id: DbId,
        id: DbId,
    ) -> Result<Option<CampaignDetailRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, a.direction AS agent_direction, \
                    (SELECT COUNT(*) FROM calls c WHERE c.campaign_id = cp.id) AS call_count \
             FROM campaigns cp LEFT JOIN agents a ON a.id = cp.agent_id \
             WHERE cp.org_id = $1 AND cp.id = $2"
        );
        sqlx::query_as::<_, CampaignDetailRow>(&query)
            .bind(org_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a campaign's status.
    ///
    /// Returns `true` if the campaign exists in the organization and was updated.
    pub async fn update_status(
        pool: &PgPool,
        org_id: DbId,
        id: DbId,
        status: CampaignStatus,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE campaigns SET status = $3 WHERE org_id = $1 AND id = $2")
                .bind(org_id)
                .bind(id)
                .bind(status.as_str())
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count campaigns currently in `status`.
    pub async fn count_with_status(
        pool: &PgPool,
        org_id: DbId,
        status: CampaignStatus,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM campaigns WHERE org_id = $1 AND status = $2",
        )
        .bind(org_id)
        .bind(status.as_str())
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}

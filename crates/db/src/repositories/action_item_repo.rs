//! Repository for the `action_items` table.

use callboard_core::status::ResolutionType;
use callboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::action_item::ActionItemRow;

/// Provides reads and resolution for follow-up action items.
pub struct ActionItemRepo;

impl ActionItemRepo {
    /// List unresolved action items, newest first.
    pub async fn list_open_for_org(
        pool: &PgPool,
        org_id: DbId,
        limit: i64,
    ) -> Result<Vec<ActionItemRow>, sqlx::Error> {
        sqlx::query_as::<_, ActionItemRow>(
            "SELECT ai.id, ai.lead_id, ai.call_id, ai.title, ai.description, ai.is_resolved, \
                    ai.resolved_at, ai.resolution_type, ai.created_at, \
                    ct.first_name AS contact_first_name, ct.last_name AS contact_last_name \
             FROM action_items ai \
             LEFT JOIN leads l ON l.id = ai.lead_id \
             LEFT JOIN contacts ct ON ct.id = l.contact_id \
             WHERE ai.org_id = $1 AND ai.is_resolved = false \
             ORDER BY ai.created_at DESC \
             LIMIT $2",
        )
        .bind(org_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Mark an action item resolved by `user_id`.
    ///
    /// Already-resolved items are overwritten with the new resolution.
    /// Returns `true` if the item exists in the organization and was updated.
    pub async fn resolve(
        pool: &PgPool,
        org_id: DbId,
        id: DbId,
        resolution: ResolutionType,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE action_items \
             SET is_resolved = true, resolved_at = NOW(), resolution_type = $3, resolved_by = $4 \
             WHERE org_id = $1 AND id = $2",
        )
        .bind(org_id)
        .bind(id)
        .bind(resolution.as_str())
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count unresolved action items.
    pub async fn count_open(pool: &PgPool, org_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM action_items WHERE org_id = $1 AND is_resolved = false",
        )
        .bind(org_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}

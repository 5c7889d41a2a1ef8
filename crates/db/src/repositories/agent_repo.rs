//! Repository for the `agents` table.

use callboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::agent::Agent;

/// Column list for `agents` queries.
const COLUMNS: &str = "id, org_id, name, agent_type, direction, status, phone_number, created_at";

/// Provides read access to an organization's voice agents.
pub struct AgentRepo;

impl AgentRepo {
    /// List an organization's agents, newest first.
    pub async fn list_for_org(
        pool: &PgPool,
        org_id: DbId,
        limit: i64,
    ) -> Result<Vec<Agent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM agents \
             WHERE org_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, Agent>(&query)
            .bind(org_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}

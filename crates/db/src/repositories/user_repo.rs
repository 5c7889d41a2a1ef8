//! Repository for the `users` table.

use callboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::team::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, org_id, name, email, role, status, created_at";

/// Provides read access to team members.
pub struct UserRepo;

impl UserRepo {
    /// List an organization's members in the order they joined.
    pub async fn list_for_org(
        pool: &PgPool,
        org_id: DbId,
        limit: i64,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users \
             WHERE org_id = $1 \
             ORDER BY created_at ASC \
             LIMIT $2"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(org_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a member by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

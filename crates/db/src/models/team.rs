//! Team member rows (the `users` table).

use callboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub org_id: DbId,
    pub name: Option<String>,
    pub email: String,
    pub role: String,
    pub status: String,
    pub created_at: Timestamp,
}

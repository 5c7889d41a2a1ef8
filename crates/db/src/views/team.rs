//! Settings > Team: organization members.

use callboard_core::format::UNKNOWN_PLACEHOLDER;
use callboard_core::paging::LIST_PAGE_LIMIT;
use callboard_core::status::{label_or_raw, MemberStatus};
use callboard_core::types::DbId;
use serde::Serialize;
use sqlx::PgPool;

use super::{row_or_none, rows_or_empty};
use crate::models::team::User;
use crate::repositories::UserRepo;

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub org_id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    /// `Active` or `Invited`.
    pub status: String,
}

pub fn team_member(user: User) -> TeamMember {
    // Invited members have not set a display name yet.
    let name = match user.name.as_deref().map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ if !user.email.trim().is_empty() => user.email.clone(),
        _ => UNKNOWN_PLACEHOLDER.to_string(),
    };
    TeamMember {
        id: user.id,
        org_id: user.org_id,
        name,
        status: label_or_raw::<MemberStatus>(&user.status),
        email: user.email,
        role: user.role,
    }
}

/// Up to [`LIST_PAGE_LIMIT`] members in join order.
pub async fn list_team_members(pool: &PgPool, org_id: DbId) -> Vec<TeamMember> {
    rows_or_empty(
        UserRepo::list_for_org(pool, org_id, LIST_PAGE_LIMIT).await,
        "team",
        org_id,
    )
    .into_iter()
    .map(team_member)
    .collect()
}

/// The signed-in member's own record.
pub async fn get_member(pool: &PgPool, user_id: DbId) -> Option<TeamMember> {
    row_or_none(UserRepo::find_by_id(pool, user_id).await, "member", user_id).map(team_member)
}

//! Agents page.

use callboard_core::format::or_placeholder;
use callboard_core::paging::LIST_PAGE_LIMIT;
use callboard_core::status::{label_or_raw, AgentStatus, Direction};
use callboard_core::types::DbId;
use serde::Serialize;
use sqlx::PgPool;

use super::rows_or_empty;
use crate::models::agent::Agent;
use crate::repositories::AgentRepo;

#[derive(Debug, Clone, Serialize)]
pub struct AgentListItem {
    pub id: DbId,
    pub name: String,
    pub agent_type: String,
    pub direction: String,
    pub status: String,
    pub status_label: String,
    pub phone_number: String,
}

pub fn agent_list_item(agent: Agent) -> AgentListItem {
    AgentListItem {
        id: agent.id,
        name: agent.name,
        agent_type: agent.agent_type,
        direction: label_or_raw::<Direction>(&agent.direction),
        status_label: label_or_raw::<AgentStatus>(&agent.status),
        status: agent.status,
        phone_number: or_placeholder(agent.phone_number.as_deref()),
    }
}

/// Up to [`LIST_PAGE_LIMIT`] agents, newest first.
pub async fn list_agents(pool: &PgPool, org_id: DbId) -> Vec<AgentListItem> {
    rows_or_empty(
        AgentRepo::list_for_org(pool, org_id, LIST_PAGE_LIMIT).await,
        "agents",
        org_id,
    )
    .into_iter()
    .map(agent_list_item)
    .collect()
}

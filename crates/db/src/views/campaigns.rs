//! Campaigns page: campaign list and single-campaign detail.

use callboard_core::format::{format_short_date, or_placeholder, UNKNOWN_PLACEHOLDER};
use callboard_core::paging::LIST_PAGE_LIMIT;
use callboard_core::status::{label_or_raw, CampaignStatus, Direction};
use callboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::PgPool;

use super::{row_or_none, rows_or_empty};
use crate::models::campaign::{CampaignDetailRow, CampaignRow};
use crate::repositories::CampaignRepo;

/// One row of the campaigns table.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignListItem {
    pub id: DbId,
    pub name: String,
    pub status: String,
    pub status_label: String,
    pub agent_id: Option<DbId>,
    pub agent_name: String,
    pub lead_count: i64,
    /// Creation date, e.g. `Oct 3, 2026`.
    pub created: String,
}

/// The single-campaign view.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignDetail {
    #[serde(flatten)]
    pub campaign: CampaignListItem,
    pub agent_direction: String,
    pub call_count: i64,
    pub created_at: Timestamp,
}

pub fn campaign_list_item(row: CampaignRow) -> CampaignListItem {
    CampaignListItem {
        id: row.id,
        status_label: label_or_raw::<CampaignStatus>(&row.status),
        status: row.status,
        name: row.name,
        agent_id: row.agent_id,
        agent_name: row
            .agent_name
            .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string()),
        lead_count: row.lead_count,
        created: format_short_date(row.created_at),
    }
}

pub fn campaign_detail(row: CampaignDetailRow) -> CampaignDetail {
    let created_at = row.campaign.created_at;
    CampaignDetail {
        campaign: campaign_list_item(row.campaign),
        agent_direction: row
            .agent_direction
            .as_deref()
            .map(label_or_raw::<Direction>)
            .unwrap_or_else(|| or_placeholder(None)),
        call_count: row.call_count,
        created_at,
    }
}

/// Up to [`LIST_PAGE_LIMIT`] campaigns, newest first.
pub async fn list_campaigns(pool: &PgPool, org_id: DbId) -> Vec<CampaignListItem> {
    rows_or_empty(
        CampaignRepo::list_for_org(pool, org_id, LIST_PAGE_LIMIT).await,
        "campaigns",
        org_id,
    )
    .into_iter()
    .map(campaign_list_item)
    .collect()
}

/// One campaign, or `None` if it does not exist in the organization.
pub async fn get_campaign_by_id(pool: &PgPool, org_id: DbId, id: DbId) -> Option<CampaignDetail> {
    row_or_none(CampaignRepo::find_detail(pool, org_id, id).await, "campaign", id)
        .map(campaign_detail)
}

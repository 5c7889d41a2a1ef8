use callboard_core::status::CampaignStatus;
use callboard_core::types::DbId;
use callboard_db::repositories::CampaignRepo;
use callboard_events::{event_types, PlatformEvent};

use super::{paths, require_session, ActionContext, ActionError, ActionResult};
use crate::middleware::auth::AuthUser;

/// Pause, resume, or complete a campaign.
pub async fn update_campaign_status(
    ctx: ActionContext<'_>,
    session: Option<&AuthUser>,
    campaign_id: DbId,
    status: CampaignStatus,
) -> ActionResult {
    let user = require_session(session)?;

    if !CampaignRepo::update_status(ctx.pool, user.org_id, campaign_id, status).await? {
        return Err(ActionError::NotFound("Campaign"));
    }

    tracing::info!(
        %campaign_id,
        status = status.as_str(),
        user_id = %user.user_id,
        "Campaign status updated"
    );

    ctx.event_bus.publish(
        PlatformEvent::new(event_types::CAMPAIGN_STATUS_UPDATED, user.org_id)
            .with_source("campaign", campaign_id)
            .with_actor(user.user_id)
            .with_invalidations(paths::campaign(campaign_id))
            .with_payload(serde_json::json!({ "status": status.as_str() })),
    );
    Ok(())
}

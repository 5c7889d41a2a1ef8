use callboard_core::status::ResolutionType;
use callboard_core::types::DbId;
use callboard_db::repositories::ActionItemRepo;
use callboard_events::{event_types, PlatformEvent};

use super::{paths, require_session, ActionContext, ActionError, ActionResult};
use crate::middleware::auth::AuthUser;

/// Close a follow-up item, recording who resolved it and how.
///
/// Resolving an already-resolved item replaces the earlier resolution.
pub async fn resolve_action_item(
    ctx: ActionContext<'_>,
    session: Option<&AuthUser>,
    item_id: DbId,
    resolution: ResolutionType,
) -> ActionResult {
    let user = require_session(session)?;

    if !ActionItemRepo::resolve(ctx.pool, user.org_id, item_id, resolution, user.user_id).await? {
        return Err(ActionError::NotFound("Action item"));
    }

    tracing::info!(
        %item_id,
        resolution = resolution.as_str(),
        user_id = %user.user_id,
        "Action item resolved"
    );

    ctx.event_bus.publish(
        PlatformEvent::new(event_types::ACTION_ITEM_RESOLVED, user.org_id)
            .with_source("action_item", item_id)
            .with_actor(user.user_id)
            .with_invalidations(paths::action_item())
            .with_payload(serde_json::json!({ "resolution_type": resolution.as_str() })),
    );
    Ok(())
}

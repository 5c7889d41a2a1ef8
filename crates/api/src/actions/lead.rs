use callboard_core::status::LeadStatus;
use callboard_core::types::DbId;
use callboard_db::repositories::LeadRepo;
use callboard_events::{event_types, PlatformEvent};

use super::{paths, require_session, ActionContext, ActionError, ActionResult};
use crate::middleware::auth::AuthUser;

/// Move a lead to `status`. Any pipeline stage may follow any other.
pub async fn update_lead_status(
    ctx: ActionContext<'_>,
    session: Option<&AuthUser>,
    lead_id: DbId,
    status: LeadStatus,
) -> ActionResult {
    let user = require_session(session)?;

    if !LeadRepo::update_status(ctx.pool, user.org_id, lead_id, status).await? {
        return Err(ActionError::NotFound("Lead"));
    }

    tracing::info!(
        %lead_id,
        status = status.as_str(),
        user_id = %user.user_id,
        "Lead status updated"
    );

    ctx.event_bus.publish(
        PlatformEvent::new(event_types::LEAD_STATUS_UPDATED, user.org_id)
            .with_source("lead", lead_id)
            .with_actor(user.user_id)
            .with_invalidations(paths::lead(lead_id))
            .with_payload(serde_json::json!({ "status": status.as_str() })),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use callboard_events::EventBus;
    use uuid::Uuid;

    use super::*;
    use crate::actions::test_support::{session, unreachable_pool};

    #[tokio::test]
    async fn without_session_fails_before_any_write() {
        let pool = unreachable_pool();
        let bus = EventBus::default();
        let mut rx = bus.subscribe();
        let ctx = ActionContext { pool: &pool, event_bus: &bus };

        let result = update_lead_status(ctx, None, Uuid::new_v4(), LeadStatus::Contacted).await;

        assert_matches!(result, Err(ActionError::Unauthenticated));
        assert!(rx.try_recv().is_err(), "nothing should be published");
    }

    #[tokio::test]
    async fn backend_failure_is_reported_and_not_published() {
        let pool = unreachable_pool();
        let bus = EventBus::default();
        let mut rx = bus.subscribe();
        let ctx = ActionContext { pool: &pool, event_bus: &bus };
        let user = session();

        let result =
            update_lead_status(ctx, Some(&user), Uuid::new_v4(), LeadStatus::Contacted).await;

        assert_matches!(result, Err(ActionError::Backend(_)));
        assert!(rx.try_recv().is_err());
    }
}

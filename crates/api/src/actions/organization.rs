use callboard_core::error::CoreError;
use callboard_core::validation::validate_input;
use callboard_db::models::organization::UpdateOrganization;
use callboard_db::repositories::OrganizationRepo;
use callboard_events::{event_types, PlatformEvent};

use super::{paths, require_session, ActionContext, ActionError, ActionResult};
use crate::middleware::auth::AuthUser;

/// Edit the caller's own organization profile.
///
/// Only fields present in `input` change.
pub async fn update_organization(
    ctx: ActionContext<'_>,
    session: Option<&AuthUser>,
    input: &UpdateOrganization,
) -> ActionResult {
    let user = require_session(session)?;

    validate_input(input).map_err(|e| match e {
        CoreError::Validation(msg) => ActionError::Invalid(msg),
        other => ActionError::Invalid(other.to_string()),
    })?;

    let org = OrganizationRepo::update(ctx.pool, user.org_id, input)
        .await?
        .ok_or(ActionError::NotFound("Organization"))?;

    tracing::info!(org_id = %org.id, user_id = %user.user_id, "Organization profile updated");

    ctx.event_bus.publish(
        PlatformEvent::new(event_types::ORGANIZATION_UPDATED, org.id)
            .with_source("organization", org.id)
            .with_actor(user.user_id)
            .with_invalidations(paths::organization()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use callboard_events::EventBus;

    use super::*;
    use crate::actions::test_support::{session, unreachable_pool};

    #[tokio::test]
    async fn invalid_input_is_rejected_before_the_write() {
        let pool = unreachable_pool();
        let bus = EventBus::default();
        let ctx = ActionContext { pool: &pool, event_bus: &bus };
        let input = UpdateOrganization {
            website: Some("not a url".into()),
            ..Default::default()
        };

        let result = update_organization(ctx, Some(&session()), &input).await;

        assert_matches!(result, Err(ActionError::Invalid(msg)) if msg.starts_with("website"));
    }

    #[tokio::test]
    async fn whitespace_name_is_rejected() {
        let pool = unreachable_pool();
        let bus = EventBus::default();
        let mut rx = bus.subscribe();
        let ctx = ActionContext { pool: &pool, event_bus: &bus };
        let input = UpdateOrganization {
            name: Some("   ".into()),
            ..Default::default()
        };

        let result = update_organization(ctx, Some(&session()), &input).await;

        assert_matches!(result, Err(ActionError::Invalid(msg)) if msg == "name: must not be blank");
        assert!(rx.try_recv().is_err());
    }
}

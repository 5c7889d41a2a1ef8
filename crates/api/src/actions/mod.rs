//! Authenticated single-row mutations.
//!
//! Every action follows the same steps:
//!
//! 1. No session: fail with [`ActionError::Unauthenticated`] before touching
//!    the database.
//! 2. Run one `UPDATE ... WHERE org_id = $1 AND id = $2`. Zero affected rows
//!    means [`ActionError::NotFound`]. A database failure is reported with the
//!    backend's own message.
//! 3. Publish a [`PlatformEvent`](callboard_events::PlatformEvent) listing the
//!    dashboard paths that are now stale.
//!
//! Results convert into an [`ActionOutcome`] for the wire.

pub mod action_item;
pub mod campaign;
pub mod lead;
pub mod organization;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use callboard_events::EventBus;
use serde::Serialize;
use sqlx::PgPool;

use crate::middleware::auth::AuthUser;

pub use action_item::resolve_action_item;
pub use campaign::update_campaign_status;
pub use lead::update_lead_status;
pub use organization::update_organization;

/// What an action needs from the application state.
#[derive(Clone, Copy)]
pub struct ActionContext<'a> {
    pub pool: &'a PgPool,
    pub event_bus: &'a EventBus,
}

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Invalid(String),

    /// The database rejected the write; carries its message unchanged.
    #[error("{0}")]
    Backend(String),
}

impl ActionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActionError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ActionError::NotFound(_) => StatusCode::NOT_FOUND,
            ActionError::Invalid(_) => StatusCode::BAD_REQUEST,
            ActionError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ActionError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Action write failed");
        match err {
            sqlx::Error::Database(db_err) => ActionError::Backend(db_err.message().to_string()),
            other => ActionError::Backend(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ActionError {
    fn from(rejection: JsonRejection) -> Self {
        ActionError::Invalid(rejection.body_text())
    }
}

impl From<PathRejection> for ActionError {
    fn from(rejection: PathRejection) -> Self {
        ActionError::Invalid(rejection.body_text())
    }
}

pub type ActionResult = Result<(), ActionError>;

/// Wire shape of an action result.
///
/// `{"status":"success"}` or `{"status":"error","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionOutcome {
    Success,
    Error { message: String },
}

impl From<&ActionResult> for ActionOutcome {
    fn from(result: &ActionResult) -> Self {
        match result {
            Ok(()) => ActionOutcome::Success,
            Err(e) => ActionOutcome::Error {
                message: e.to_string(),
            },
        }
    }
}

/// Render an action result as an HTTP response with a matching status.
pub fn respond(result: ActionResult) -> Response {
    let status = match &result {
        Ok(()) => StatusCode::OK,
        Err(e) => e.status_code(),
    };
    (status, Json(ActionOutcome::from(&result))).into_response()
}

/// The session, or [`ActionError::Unauthenticated`].
fn require_session(session: Option<&AuthUser>) -> Result<&AuthUser, ActionError> {
    session.ok_or(ActionError::Unauthenticated)
}

/// Release a handler's parsed path and body only to a signed-in caller.
///
/// Action handlers extract their inputs as `Result`s so that an anonymous
/// request with a malformed body still hears "Not authenticated".
pub fn session_then<T>(
    session: Option<&AuthUser>,
    input: Result<T, ActionError>,
) -> Result<T, ActionError> {
    require_session(session)?;
    input
}

/// Presentation paths refreshed after each kind of mutation.
pub mod paths {
    use callboard_core::types::DbId;

    pub const DASHBOARD: &str = "/dashboard";
    pub const LEADS: &str = "/leads";
    pub const CAMPAIGNS: &str = "/campaigns";
    pub const SETTINGS: &str = "/settings";

    pub fn lead(id: DbId) -> Vec<String> {
        vec![LEADS.to_string(), format!("{LEADS}/{id}"), DASHBOARD.to_string()]
    }

    pub fn action_item() -> Vec<String> {
        vec![DASHBOARD.to_string()]
    }

    pub fn campaign(id: DbId) -> Vec<String> {
        vec![
            CAMPAIGNS.to_string(),
            format!("{CAMPAIGNS}/{id}"),
            DASHBOARD.to_string(),
        ]
    }

    pub fn organization() -> Vec<String> {
        vec![SETTINGS.to_string()]
    }
}

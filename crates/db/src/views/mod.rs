//! Display-ready view queries, one module per dashboard page.
//!
//! Every function here wraps a repository read and maps rows onto a flat
//! view model. A failed read is logged at `error` and returned as an empty
//! list (or `None`), so the page renders placeholders instead of failing.
//! Callers that must tell "no rows" from "backend unreachable" use
//! [`crate::repositories`] directly.

pub mod agents;
pub mod calls;
pub mod campaigns;
pub mod dashboard;
pub mod leads;
pub mod organization;
pub mod team;

use callboard_core::types::DbId;

/// Downgrade a failed list read to an empty page.
pub(crate) fn rows_or_empty<T>(
    result: Result<Vec<T>, sqlx::Error>,
    view: &'static str,
    org_id: DbId,
) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::error!(error = %e, view, %org_id, "View query failed, rendering empty list");
        Vec::new()
    })
}

/// Downgrade a failed single-row read to "not found".
pub(crate) fn row_or_none<T>(
    result: Result<Option<T>, sqlx::Error>,
    view: &'static str,
    id: DbId,
) -> Option<T> {
    result.unwrap_or_else(|e| {
        tracing::error!(error = %e, view, %id, "View query failed, rendering as not found");
        None
    })
}

/// Downgrade a failed count to zero.
pub(crate) fn count_or_zero(
    result: Result<i64, sqlx::Error>,
    stat: &'static str,
    org_id: DbId,
) -> i64 {
    result.unwrap_or_else(|e| {
        tracing::error!(error = %e, stat, %org_id, "Count query failed, reporting zero");
        0
    })
}

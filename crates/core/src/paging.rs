//! Fixed page sizes for dashboard list queries.

/// Maximum rows returned by any list view (calls, leads, campaigns, ...).
pub const LIST_PAGE_LIMIT: i64 = 100;

/// Number of calls shown in the dashboard's "recent calls" panel.
pub const RECENT_CALLS_LIMIT: i64 = 5;

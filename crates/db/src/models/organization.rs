//! Organization entity model and DTOs.

use callboard_core::types::{DbId, Timestamp};
use callboard_core::validation::not_blank;
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `organizations` table.
#[derive(Debug, Clone, FromRow)]
pub struct Organization {
    pub id: DbId,
    pub name: String,
    pub industry: Option<String>,
    pub business_type: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the settings page's organization profile form.
///
/// `None` leaves a column unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateOrganization {
    #[validate(
        custom(function = "not_blank"),
        length(max = 200, message = "must be at most 200 characters")
    )]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub industry: Option<String>,
    #[validate(length(max = 100))]
    pub business_type: Option<String>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
}

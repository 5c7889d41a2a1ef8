//! Repository for the `organizations` table.

use callboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::organization::{Organization, UpdateOrganization};

/// Column list for `organizations` queries.
const COLUMNS: &str =
    "id, name, industry, business_type, phone, website, address, created_at, updated_at";

/// Provides reads and profile updates for organizations.
pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Find an organization by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations WHERE id = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an organization's profile. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrganization,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!(
            "UPDATE organizations SET
                name = COALESCE($2, name),
                industry = COALESCE($3, industry),
                business_type = COALESCE($4, business_type),
                phone = COALESCE($5, phone),
                website = COALESCE($6, website),
                address = COALESCE($7, address),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.industry)
            .bind(&input.business_type)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }
}

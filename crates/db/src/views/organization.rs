//! Settings > Organization profile.

use callboard_core::format::or_placeholder;
use callboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::PgPool;

use super::row_or_none;
use crate::models::organization::Organization;
use crate::repositories::OrganizationRepo;

/// The organization profile with placeholders for unset fields.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationProfile {
    pub id: DbId,
    pub name: String,
    pub industry: String,
    pub business_type: String,
    pub phone: String,
    pub website: String,
    pub address: String,
    pub updated_at: Timestamp,
}

pub fn organization_profile(org: Organization) -> OrganizationProfile {
    OrganizationProfile {
        id: org.id,
        name: org.name,
        industry: or_placeholder(org.industry.as_deref()),
        business_type: or_placeholder(org.business_type.as_deref()),
        phone: or_placeholder(org.phone.as_deref()),
        website: or_placeholder(org.website.as_deref()),
        address: or_placeholder(org.address.as_deref()),
        updated_at: org.updated_at,
    }
}

pub async fn get_organization(pool: &PgPool, org_id: DbId) -> Option<OrganizationProfile> {
    row_or_none(
        OrganizationRepo::find_by_id(pool, org_id).await,
        "organization",
        org_id,
    )
    .map(organization_profile)
}

#[cfg(test)]
mod tests {
    use callboard_core::format::EMPTY_PLACEHOLDER;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn unset_fields_render_as_placeholder() {
        let profile = organization_profile(Organization {
            id: Uuid::new_v4(),
            name: "Acme Roofing".into(),
            industry: Some("Home services".into()),
            business_type: None,
            phone: Some("   ".into()),
            website: None,
            address: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        assert_eq!(profile.industry, "Home services");
        assert_eq!(profile.business_type, EMPTY_PLACEHOLDER);
        assert_eq!(profile.phone, EMPTY_PLACEHOLDER);
    }
}

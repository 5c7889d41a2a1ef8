//! Repository writes against a real schema.
//!
//! Requires a running Postgres reachable through `DATABASE_URL`.

mod common;

use assert_matches::assert_matches;
use callboard_core::status::{CampaignStatus, LeadStatus, ResolutionType};
use callboard_db::models::organization::UpdateOrganization;
use callboard_db::repositories::{ActionItemRepo, CampaignRepo, LeadRepo, OrganizationRepo};
use sqlx::PgPool;
use uuid::Uuid;

use common::*;

#[sqlx::test(migrations = "../../db/migrations")]
async fn lead_status_update_is_visible_on_reload(pool: PgPool) {
    let org = insert_org(&pool, "Acme").await;
    let lead = insert_lead(&pool, org, None, None, None).await;

    let updated = LeadRepo::update_status(&pool, org, lead, LeadStatus::Contacted)
        .await
        .unwrap();
    assert!(updated);

    let row = LeadRepo::find_by_id(&pool, org, lead).await.unwrap().unwrap();
    assert_eq!(row.status, "contacted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn updates_do_not_cross_organizations(pool: PgPool) {
    let acme = insert_org(&pool, "Acme").await;
    let other = insert_org(&pool, "Other").await;
    let lead = insert_lead(&pool, other, None, None, None).await;
    let campaign = insert_campaign(&pool, other, None, "Theirs", "active").await;

    assert!(!LeadRepo::update_status(&pool, acme, lead, LeadStatus::BadLead).await.unwrap());
    assert!(
        !CampaignRepo::update_status(&pool, acme, campaign, CampaignStatus::Paused)
            .await
            .unwrap()
    );
    assert!(!LeadRepo::update_status(&pool, acme, Uuid::new_v4(), LeadStatus::New).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resolving_an_action_item_records_who_and_how(pool: PgPool) {
    let org = insert_org(&pool, "Acme").await;
    let user = insert_user(&pool, org, "sam@acme.test", Some("Sam")).await;
    let item = insert_action_item(&pool, org, None, "Call back").await;

    let resolved = ActionItemRepo::resolve(&pool, org, item, ResolutionType::Dismissed, user)
        .await
        .unwrap();
    assert!(resolved);
    assert_eq!(ActionItemRepo::count_open(&pool, org).await.unwrap(), 0);

    let (kind, by): (Option<String>, Option<Uuid>) = sqlx::query_as(
        "SELECT resolution_type, resolved_by FROM action_items WHERE id = $1",
    )
    .bind(item)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(kind.as_deref(), Some("dismissed"));
    assert_eq!(by, Some(user));

    // Resolving again overwrites the previous resolution.
    ActionItemRepo::resolve(&pool, org, item, ResolutionType::WrongNumber, user)
        .await
        .unwrap();
    let kind: Option<String> =
        sqlx::query_scalar("SELECT resolution_type FROM action_items WHERE id = $1")
            .bind(item)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(kind.as_deref(), Some("wrong_number"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn organization_update_applies_only_given_fields(pool: PgPool) {
    let org = insert_org(&pool, "Acme").await;
    let input = UpdateOrganization {
        website: Some("https://acme.test".into()),
        ..Default::default()
    };

    let updated = OrganizationRepo::update(&pool, org, &input).await.unwrap().unwrap();
    assert_eq!(updated.name, "Acme");
    assert_eq!(updated.website.as_deref(), Some("https://acme.test"));

    let missing = OrganizationRepo::update(&pool, Uuid::new_v4(), &input).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_check_rejects_unknown_values(pool: PgPool) {
    let org = insert_org(&pool, "Acme").await;
    let err = sqlx::query("INSERT INTO leads (org_id, status) VALUES ($1, 'maybe')")
        .bind(org)
        .execute(&pool)
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.constraint() == Some("ck_leads_status"));
}

//! Fixture inserts shared by the database integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn insert_org(pool: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO organizations (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_user(pool: &PgPool, org_id: Uuid, email: &str, name: Option<&str>) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO users (org_id, email, name, status) VALUES ($1, $2, $3, 'active') RETURNING id",
    )
    .bind(org_id)
    .bind(email)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_agent(pool: &PgPool, org_id: Uuid, name: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO agents (org_id, name, direction, status) \
         VALUES ($1, $2, 'outbound', 'active') RETURNING id",
    )
    .bind(org_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_campaign(
    pool: &PgPool,
    org_id: Uuid,
    agent_id: Option<Uuid>,
    name: &str,
    status: &str,
) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO campaigns (org_id, agent_id, name, status) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(org_id)
    .bind(agent_id)
    .bind(name)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_contact(pool: &PgPool, org_id: Uuid, first: &str, last: Option<&str>) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO contacts (org_id, first_name, last_name) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(org_id)
    .bind(first)
    .bind(last)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_lead(
    pool: &PgPool,
    org_id: Uuid,
    contact_id: Option<Uuid>,
    campaign_id: Option<Uuid>,
    last_activity_at: Option<DateTime<Utc>>,
) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO leads (org_id, contact_id, campaign_id, last_activity_at) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(org_id)
    .bind(contact_id)
    .bind(campaign_id)
    .bind(last_activity_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_call(
    pool: &PgPool,
    org_id: Uuid,
    lead_id: Option<Uuid>,
    created_at: DateTime<Utc>,
) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO calls (org_id, lead_id, direction, duration_seconds, created_at) \
         VALUES ($1, $2, 'outbound', 90, $3) RETURNING id",
    )
    .bind(org_id)
    .bind(lead_id)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_sms(pool: &PgPool, org_id: Uuid, lead_id: Uuid, created_at: DateTime<Utc>) {
    sqlx::query(
        "INSERT INTO sms_messages (org_id, lead_id, direction, body, created_at) \
         VALUES ($1, $2, 'outbound', 'Reminder: tomorrow at 10', $3)",
    )
    .bind(org_id)
    .bind(lead_id)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_email(pool: &PgPool, org_id: Uuid, lead_id: Uuid, created_at: DateTime<Utc>) {
    sqlx::query(
        "INSERT INTO emails (org_id, lead_id, direction, subject, created_at) \
         VALUES ($1, $2, 'outbound', 'Your quote', $3)",
    )
    .bind(org_id)
    .bind(lead_id)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_action_item(pool: &PgPool, org_id: Uuid, lead_id: Option<Uuid>, title: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO action_items (org_id, lead_id, title) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(org_id)
    .bind(lead_id)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Every tenant-owned query
//! is scoped by `org_id`.

pub mod action_item_repo;
pub mod agent_repo;
pub mod call_repo;
pub mod campaign_repo;
pub mod lead_repo;
pub mod message_repo;
pub mod organization_repo;
pub mod user_repo;

pub use action_item_repo::ActionItemRepo;
pub use agent_repo::AgentRepo;
pub use call_repo::CallRepo;
pub use campaign_repo::CampaignRepo;
pub use lead_repo::LeadRepo;
pub use message_repo::MessageRepo;
pub use organization_repo::OrganizationRepo;
pub use user_repo::UserRepo;

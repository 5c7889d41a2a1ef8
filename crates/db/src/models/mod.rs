//! Row models and input DTOs, one module per table family.

pub mod action_item;
pub mod agent;
pub mod call;
pub mod campaign;
pub mod lead;
pub mod message;
pub mod organization;
pub mod team;

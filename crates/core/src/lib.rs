//! `orgapi-core` — domain building blocks for the organizations API.
//!
//! This crate contains **pure domain** types (no HTTP, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod organization;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::OrganizationId;
pub use organization::{Organization, OrganizationName};

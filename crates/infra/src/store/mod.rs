//! Organization storage boundary.
//!
//! Handlers depend on the `OrganizationStore` trait only; the in-memory
//! implementation is what the binary wires up.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryOrganizationStore;
pub use r#trait::OrganizationStore;

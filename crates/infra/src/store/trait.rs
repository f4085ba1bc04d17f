use std::sync::Arc;

use orgapi_core::{DomainResult, Organization, OrganizationId};

/// Key/value store for organization records.
///
/// Implementations own every record they hand out copies of. Each call is a
/// single atomic access; there are no multi-call transactions.
pub trait OrganizationStore: Send + Sync {
    /// All records, in insertion order.
    fn list(&self) -> Vec<Organization>;

    /// Look up a single record.
    fn get(&self, id: OrganizationId) -> Option<Organization>;

    /// Validate `name`, assign the next id, insert and return the new record.
    fn create(&self, name: String) -> DomainResult<Organization>;
}

impl<S> OrganizationStore for Arc<S>
where
    S: OrganizationStore + ?Sized,
{
    fn list(&self) -> Vec<Organization> {
        (**self).list()
    }

    fn get(&self, id: OrganizationId) -> Option<Organization> {
        (**self).get(id)
    }

    fn create(&self, name: String) -> DomainResult<Organization> {
        (**self).create(name)
    }
}

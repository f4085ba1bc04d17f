use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use orgapi_core::{DomainError, DomainResult, Entity, Organization, OrganizationId, OrganizationName};

use super::r#trait::OrganizationStore;

#[derive(Debug)]
struct Inner {
    // Ids are handed out in increasing order, so key order is insertion order.
    records: BTreeMap<OrganizationId, Organization>,
    next_id: OrganizationId,
}

/// In-memory organization store.
///
/// A single lock guards both the map and the id counter so that id assignment
/// and insertion happen atomically.
#[derive(Debug)]
pub struct InMemoryOrganizationStore {
    inner: RwLock<Inner>,
}

impl InMemoryOrganizationStore {
    /// Empty store; the first created record gets id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: BTreeMap::new(),
                next_id: OrganizationId::FIRST,
            }),
        }
    }

    /// Store pre-populated with the `{id: 0, name: "Test"}` record.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write().unwrap_or_else(PoisonError::into_inner);
            let seed = Organization::seed();
            inner.records.insert(seed.id(), seed);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every write leaves `Inner` consistent, so a poisoned lock is still usable.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryOrganizationStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl OrganizationStore for InMemoryOrganizationStore {
    fn list(&self) -> Vec<Organization> {
        self.read().records.values().cloned().collect()
    }

    fn get(&self, id: OrganizationId) -> Option<Organization> {
        self.read().records.get(&id).cloned()
    }

    fn create(&self, name: String) -> DomainResult<Organization> {
        // Validate before taking the lock so rejected names never consume an id.
        let name = OrganizationName::parse(name)?;

        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id = id.next().ok_or(DomainError::IdsExhausted)?;

        let organization = Organization::new(id, name);
        inner.records.insert(id, organization.clone());

        tracing::debug!(organization_id = %id, "organization created");
        Ok(organization)
    }
}

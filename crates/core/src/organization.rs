//! Organization entity.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::id::OrganizationId;

/// Organization name: 1 to 255 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrganizationName(String);

impl OrganizationName {
    pub const MIN_LEN: usize = 1;
    pub const MAX_LEN: usize = 255;

    /// Validate and wrap a name. Length is counted in characters, not bytes.
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let len = raw.chars().count();

        if len < Self::MIN_LEN {
            return Err(DomainError::validation(
                "name",
                format!("must NOT have fewer than {} characters", Self::MIN_LEN),
            ));
        }
        if len > Self::MAX_LEN {
            return Err(DomainError::validation(
                "name",
                format!("must NOT have more than {} characters", Self::MAX_LEN),
            ));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OrganizationName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<OrganizationName> for String {
    fn from(value: OrganizationName) -> Self {
        value.0
    }
}

impl core::fmt::Display for OrganizationName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An organization record: `{ "id": <number>, "name": <string> }`.
///
/// Records are created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    id: OrganizationId,
    name: OrganizationName,
}

impl Organization {
    pub fn new(id: OrganizationId, name: OrganizationName) -> Self {
        Self { id, name }
    }

    /// The record every seeded store starts with.
    pub fn seed() -> Self {
        Self {
            id: OrganizationId::SEED,
            name: OrganizationName("Test".to_string()),
        }
    }

    pub fn name(&self) -> &OrganizationName {
        &self.name
    }
}

impl Entity for Organization {
    type Id = OrganizationId;

    fn id(&self) -> OrganizationId {
        self.id
    }
}

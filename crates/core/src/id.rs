//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an organization.
///
/// Ids are plain integers assigned by the store; `0` is reserved for the
/// seed record and the counter starts at `1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(u64);

impl OrganizationId {
    /// Id of the record every seeded store starts with.
    pub const SEED: OrganizationId = OrganizationId(0);

    /// First id handed out by a fresh counter.
    pub const FIRST: OrganizationId = OrganizationId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The id following this one, or `None` at the end of the id space.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl core::fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for OrganizationId {
    type Err = DomainError;

    /// Accepts plain decimal digits only: no sign, no surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::invalid_id(format!("must be a non-negative integer, got '{s}'"));

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value = s.parse::<u64>().map_err(|_| invalid())?;
        Ok(Self(value))
    }
}

use serde::Deserialize;
use serde_json::{json, Value};

use orgapi_core::{DomainResult, Organization, OrganizationId, OrganizationName};

use crate::app::schema::Validate;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/organizations`. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
}

impl Validate for CreateOrganizationRequest {
    fn validate(&self) -> DomainResult<()> {
        OrganizationName::parse(self.name.as_str()).map(|_| ())
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn organization_data(organization: &Organization) -> Value {
    json!({ "organization": organization })
}

pub fn organizations_data(organizations: &[Organization]) -> Value {
    json!({ "organizations": organizations })
}

pub fn organization_not_found_data(id: OrganizationId) -> Value {
    json!({ "organizationId": format!("Organization with ID '{id}' not found.") })
}

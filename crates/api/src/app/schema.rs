//! Request/response schemas per route.
//!
//! Request shapes are enforced by typed extractors (`ValidJson`,
//! `OrganizationIdParam`) before a handler body runs. The JSON-schema fragments
//! below describe the same shapes for clients and are served at
//! `GET /api/organizations/schema`.

use serde_json::{json, Value};

use orgapi_core::{DomainResult, OrganizationName};

/// Post-deserialization checks for request bodies.
pub trait Validate {
    fn validate(&self) -> DomainResult<()>;
}

pub fn organization_properties() -> Value {
    json!({
        "id": { "type": "number" },
        "name": {
            "type": "string",
            "minLength": OrganizationName::MIN_LEN,
            "maxLength": OrganizationName::MAX_LEN,
        },
    })
}

/// JSend success envelope around `data` with the given properties.
pub fn response_template(properties: Value) -> Value {
    json!({
        "type": "object",
        "properties": {
            "status": { "type": "string" },
            "statusCode": { "type": "number" },
            "data": {
                "type": "object",
                "properties": properties,
            },
        },
    })
}

fn organization_object() -> Value {
    json!({
        "type": "object",
        "properties": organization_properties(),
    })
}

pub fn get_all_organizations_schema() -> Value {
    json!({
        "response": {
            "200": response_template(json!({
                "organizations": {
                    "type": "array",
                    "items": organization_object(),
                },
            })),
        },
    })
}

pub fn get_organization_by_id_schema() -> Value {
    json!({
        "params": {
            "type": "object",
            "required": ["organizationId"],
            "properties": {
                "organizationId": { "type": "number" },
            },
        },
        "response": {
            "200": response_template(json!({ "organization": organization_object() })),
        },
    })
}

pub fn create_organization_schema() -> Value {
    json!({
        "body": {
            "required": ["name"],
            "properties": organization_properties(),
        },
        "response": {
            "201": response_template(json!({ "organization": organization_object() })),
        },
    })
}

/// All route schemas keyed by operation name.
pub fn all_schemas() -> Value {
    json!({
        "getAllOrganizations": get_all_organizations_schema(),
        "getOrganizationById": get_organization_by_id_schema(),
        "createOrganization": create_organization_schema(),
    })
}

use axum::{
    extract::Extension,
    routing::{get, MethodRouter},
    Router,
};

use orgapi_core::{Organization, OrganizationId};
use orgapi_infra::OrganizationStore;

use crate::app::{
    dto,
    envelope::ApiResponse,
    errors::ApiError,
    extract::{OrganizationIdParam, ValidJson},
    schema,
    SharedStore,
};

use super::system;

pub fn router() -> Router {
    Router::new()
        .route("/", collection())
        .route("/schema", get(get_schemas).fallback(system::fallback))
        .route("/:organizationId", get(get_organization).fallback(system::fallback))
}

/// List + create. Also mounted on the trailing-slash path by the parent router.
pub fn collection() -> MethodRouter {
    get(list_organizations)
        .post(create_organization)
        .fallback(system::fallback)
}

pub async fn list_organizations(Extension(store): Extension<SharedStore>) -> ApiResponse {
    let organizations = store.list();
    ApiResponse::ok(dto::organizations_data(&organizations))
}

pub async fn get_organization(
    Extension(store): Extension<SharedStore>,
    OrganizationIdParam(id): OrganizationIdParam,
) -> Result<ApiResponse, ApiError> {
    find(&store, id).map(|org| ApiResponse::ok(dto::organization_data(&org)))
}

pub async fn create_organization(
    Extension(store): Extension<SharedStore>,
    ValidJson(body): ValidJson<dto::CreateOrganizationRequest>,
) -> Result<ApiResponse, ApiError> {
    let organization = store.create(body.name)?;
    Ok(ApiResponse::created(dto::organization_data(&organization)))
}

pub async fn get_schemas() -> ApiResponse {
    ApiResponse::ok(serde_json::json!({ "schemas": schema::all_schemas() }))
}

fn find(store: &SharedStore, id: OrganizationId) -> Result<Organization, ApiError> {
    store.get(id).ok_or_else(|| {
        tracing::debug!(organization_id = %id, "organization lookup missed");
        ApiError::OrganizationNotFound(id)
    })
}

//! API error type and its conversion into JSend fail/error responses.

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use orgapi_core::{DomainError, OrganizationId};

use crate::app::{dto, envelope::ApiResponse};

/// Failures a handler (or extractor) can end a request with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request body was missing, not JSON, or did not match the schema.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// A path parameter failed to parse.
    #[error("invalid path parameter '{name}': {message}")]
    InvalidPathParam { name: &'static str, message: String },

    #[error("organization {0} not found")]
    OrganizationNotFound(OrganizationId),

    #[error("route {method} {path} not found")]
    RouteNotFound { method: String, path: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl ApiError {
    /// Map to the JSend envelope returned to the caller.
    pub fn to_api_response(&self) -> ApiResponse {
        match self {
            ApiError::Domain(DomainError::Validation { field, message }) => {
                ApiResponse::bad_request(json!({ *field: message }))
            }
            // Organization ids are the only identifiers the API parses.
            ApiError::Domain(DomainError::InvalidId(msg)) => {
                ApiResponse::bad_request(json!({ "organizationId": msg }))
            }
            ApiError::Domain(err @ DomainError::IdsExhausted) => {
                ApiResponse::internal_server_error(err.to_string())
            }
            ApiError::InvalidBody(msg) => ApiResponse::bad_request(json!({ "body": msg })),
            ApiError::InvalidPathParam { name, message } => {
                ApiResponse::bad_request(json!({ *name: message }))
            }
            ApiError::OrganizationNotFound(id) => {
                ApiResponse::not_found(dto::organization_not_found_data(*id))
            }
            ApiError::RouteNotFound { method, path } => ApiResponse::not_found(json!({
                "route": format!("Route {method}:{path} not found."),
            })),
            ApiError::Internal(msg) => ApiResponse::internal_server_error(msg.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(_) | ApiError::Domain(DomainError::IdsExhausted) => {
                tracing::error!("request failed: {self}")
            }
            other => tracing::debug!("request rejected: {other}"),
        }
        self.to_api_response().into_response()
    }
}

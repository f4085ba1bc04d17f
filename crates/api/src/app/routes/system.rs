use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
};

use crate::app::errors::ApiError;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Catch-all for unmatched paths and for unsupported methods on known paths.
pub async fn fallback(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

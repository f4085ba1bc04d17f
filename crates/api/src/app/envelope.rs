//! JSend response envelope.
//!
//! Every response body has a `status` and a `statusCode`. Payloads go under
//! `data` (success, fail) or `message` (error):
//!
//! - `"success"` (2xx): `data` holds the result, keyed by resource name.
//!   `ok(json!({"organization": org}))`, never `ok(json!(org))`.
//! - `"fail"` (4xx): `data` describes what was wrong, keyed by the offending
//!   input. `not_found(json!({"organizationId": "..."}))`, never
//!   `not_found(json!({"message": "..."}))`.
//! - `"error"` (5xx): `message` describes the server-side failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JSendStatus {
    Success,
    Fail,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSendPayload {
    Data { data: Value },
    Message { message: String },
}

/// Serialized response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JSendBody {
    pub status: JSendStatus,
    pub status_code: u16,
    #[serde(flatten)]
    pub payload: JSendPayload,
}

/// HTTP status code paired with its JSend body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status_code: StatusCode,
    body: JSendBody,
}

impl ApiResponse {
    // Success

    pub fn ok(data: Value) -> Self {
        Self::success(StatusCode::OK, data)
    }

    pub fn created(data: Value) -> Self {
        Self::success(StatusCode::CREATED, data)
    }

    pub fn accepted(data: Value) -> Self {
        Self::success(StatusCode::ACCEPTED, data)
    }

    pub fn no_content() -> Self {
        Self::success(StatusCode::NO_CONTENT, Value::Null)
    }

    // Client error

    pub fn bad_request(data: Value) -> Self {
        Self::fail(StatusCode::BAD_REQUEST, data)
    }

    pub fn not_found(data: Value) -> Self {
        Self::fail(StatusCode::NOT_FOUND, data)
    }

    // Server error

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::error(StatusCode::NOT_IMPLEMENTED, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::error(StatusCode::BAD_GATEWAY, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::error(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    pub fn gateway_timeout(message: impl Into<String>) -> Self {
        Self::error(StatusCode::GATEWAY_TIMEOUT, message)
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn body(&self) -> &JSendBody {
        &self.body
    }

    fn success(status_code: StatusCode, data: Value) -> Self {
        Self::build(status_code, JSendStatus::Success, JSendPayload::Data { data })
    }

    fn fail(status_code: StatusCode, data: Value) -> Self {
        Self::build(status_code, JSendStatus::Fail, JSendPayload::Data { data })
    }

    fn error(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self::build(
            status_code,
            JSendStatus::Error,
            JSendPayload::Message {
                message: message.into(),
            },
        )
    }

    fn build(status_code: StatusCode, status: JSendStatus, payload: JSendPayload) -> Self {
        Self {
            status_code,
            body: JSendBody {
                status,
                status_code: status_code.as_u16(),
                payload,
            },
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        // 204 must not carry a body on the wire.
        if self.status_code == StatusCode::NO_CONTENT {
            return self.status_code.into_response();
        }
        (self.status_code, Json(self.body)).into_response()
    }
}

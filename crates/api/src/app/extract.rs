//! Extractors that reject invalid requests with JSend fail responses.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use orgapi_core::OrganizationId;

use crate::app::{errors::ApiError, schema::Validate};

/// JSON body that has been deserialized and passed `Validate`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// The `:organizationId` path segment, parsed as an unsigned integer.
#[derive(Debug, Clone, Copy)]
pub struct OrganizationIdParam(pub OrganizationId);

#[async_trait]
impl<S> FromRequestParts<S> for OrganizationIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidPathParam {
                name: "organizationId",
                message: e.body_text(),
            })?;

        Ok(Self(raw.parse::<OrganizationId>()?))
    }
}

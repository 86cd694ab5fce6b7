//! Custom Axum extractors
//!
//! Wrap the stock extractors so their rejections come back as `ApiError`
//! with the usual JSON body instead of axum's plain-text responses.

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON body extractor
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Extract and validate a student id from path
pub struct StudentId(pub i64);

impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state).await?;

        let id = raw.parse::<i64>().map_err(|_| {
            ApiError::Validation(ValidationError::Malformed {
                input: "student id",
                reason: format!("'{}' is not an integer", raw),
            })
        })?;

        Ok(Self(id))
    }
}
